//! сравнение результатов нормализации с ICU4X

#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
