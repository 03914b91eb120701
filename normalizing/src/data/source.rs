use std::collections::{HashMap, HashSet};

use unicode_normalization::char::{
    canonical_combining_class, compose, decompose_canonical, decompose_compatible,
};
use unicode_normalization::{is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick};
use unicode_normalization::IsNormalized;

use crate::decomposition::hangul::is_hangul_syllable;
use crate::{Form, QuickCheck};

/// источник данных о нормализации, из которого строится хранилище свойств.
///
/// декомпозиции могут быть как "сырыми" (элементы сами имеют декомпозицию), так и полными -
/// хранилище разворачивает их самостоятельно. данные слогов хангыль игнорируются - они
/// вычисляются алгоритмически.
///
/// первичным композитом может быть только кодпоинт с канонической декомпозицией ровно из двух
/// кодпоинтов (первый, второй). более длинная декомпозиция принимается, но кодпоинт тогда
/// только декомпозируется и при композиции не восстанавливается
pub trait DataSource
{
    /// класс комбинирования
    fn ccc(&self, code: u32) -> u8;

    /// каноническая декомпозиция. для первичного композита - пара (первый, второй)
    fn canonical_mapping(&self, code: u32) -> Option<Vec<u32>>;

    /// декомпозиция совместимости (только если у кодпоинта есть тег совместимости)
    fn compatibility_mapping(&self, code: u32) -> Option<Vec<u32>>;

    /// исключение композиции из списка CompositionExclusions. синглтоны и декомпозиции,
    /// начинающиеся с нестартера, хранилище исключает само
    fn is_composition_exclusion(&self, _code: u32) -> bool
    {
        false
    }

    /// опубликованное значение быстрой проверки. если None - значение будет вычислено
    fn quick_check(&self, _code: u32, _form: Form) -> Option<QuickCheck>
    {
        None
    }
}

/// встроенные данные Unicode 15.1 - таблицы символов крейта unicode-normalization
#[derive(Debug, Clone, Copy, Default)]
pub struct UcdSource;

impl UcdSource
{
    /// полная декомпозиция; None, если кодпоинт декомпозируется сам в себя
    fn full_decomposition(code: u32, compatibility: bool) -> Option<Vec<u32>>
    {
        let c = char::from_u32(code)?;

        if is_hangul_syllable(code) {
            return None;
        }

        let mut result = Vec::with_capacity(4);
        let push = |d: char| result.push(u32::from(d));

        match compatibility {
            true => decompose_compatible(c, push),
            false => decompose_canonical(c, push),
        }

        match result.as_slice() {
            [single] if *single == code => None,
            _ => Some(result),
        }
    }
}

impl DataSource for UcdSource
{
    fn ccc(&self, code: u32) -> u8
    {
        char::from_u32(code).map_or(0, canonical_combining_class)
    }

    /// для первичных композитов восстанавливаем пару (первый, второй) - она нужна для таблицы
    /// композиций, для остальных кодпоинтов отдаём полную декомпозицию
    fn canonical_mapping(&self, code: u32) -> Option<Vec<u32>>
    {
        let full = Self::full_decomposition(code, false)?;
        let c = char::from_u32(code)?;

        if let Some((&last, init)) = full.split_last() {
            let chars: Option<Vec<char>> = init.iter().map(|&d| char::from_u32(d)).collect();
            let first = chars.and_then(|chars| {
                let (&head, tail) = chars.split_first()?;
                tail.iter().try_fold(head, |acc, &mark| compose(acc, mark))
            });

            if let (Some(first), Some(second)) = (first, char::from_u32(last)) {
                if compose(first, second) == Some(c) {
                    return Some(vec![u32::from(first), last]);
                }
            }
        }

        Some(full)
    }

    fn compatibility_mapping(&self, code: u32) -> Option<Vec<u32>>
    {
        let compatibility = Self::full_decomposition(code, true)?;

        match Self::full_decomposition(code, false) {
            Some(canonical) if canonical == compatibility => None,
            _ => Some(compatibility),
        }
    }

    fn is_composition_exclusion(&self, code: u32) -> bool
    {
        Self::full_decomposition(code, false).is_some()
            && self.quick_check(code, Form::Nfc) == Some(QuickCheck::No)
    }

    fn quick_check(&self, code: u32, form: Form) -> Option<QuickCheck>
    {
        let c = core::iter::once(char::from_u32(code)?);

        let value = match form {
            Form::Nfc => is_nfc_quick(c),
            Form::Nfd => is_nfd_quick(c),
            Form::Nfkc => is_nfkc_quick(c),
            Form::Nfkd => is_nfkd_quick(c),
            Form::Fcd | Form::None => return None,
        };

        Some(match value {
            IsNormalized::Yes => QuickCheck::Yes,
            IsNormalized::No => QuickCheck::No,
            IsNormalized::Maybe => QuickCheck::Maybe,
        })
    }
}

/// данные, собранные вызывающей стороной - для частных и тестовых форм нормализации.
/// записи перекрывают данные базового источника (если он задан)
#[derive(Default)]
pub struct CustomSource
{
    base: Option<Box<dyn DataSource + Send + Sync>>,
    ccc: HashMap<u32, u8>,
    canonical: HashMap<u32, Vec<u32>>,
    compatibility: HashMap<u32, Vec<u32>>,
    exclusions: HashSet<u32>,
}

impl CustomSource
{
    /// пустой источник: все кодпоинты - стартеры без декомпозиции
    pub fn new() -> Self
    {
        Self::default()
    }

    /// источник поверх другого источника
    pub fn overlay<S>(base: S) -> Self
    where
        S: DataSource + Send + Sync + 'static,
    {
        Self {
            base: Some(Box::new(base)),
            ..Self::default()
        }
    }

    pub fn with_ccc(mut self, code: u32, ccc: u8) -> Self
    {
        self.ccc.insert(code, ccc);
        self
    }

    pub fn with_canonical(mut self, code: u32, mapping: &[u32]) -> Self
    {
        self.canonical.insert(code, mapping.to_vec());
        self
    }

    pub fn with_compatibility(mut self, code: u32, mapping: &[u32]) -> Self
    {
        self.compatibility.insert(code, mapping.to_vec());
        self
    }

    pub fn with_exclusion(mut self, code: u32) -> Self
    {
        self.exclusions.insert(code);
        self
    }
}

impl DataSource for CustomSource
{
    fn ccc(&self, code: u32) -> u8
    {
        match self.ccc.get(&code) {
            Some(&ccc) => ccc,
            None => self.base.as_ref().map_or(0, |base| base.ccc(code)),
        }
    }

    fn canonical_mapping(&self, code: u32) -> Option<Vec<u32>>
    {
        match self.canonical.get(&code) {
            Some(mapping) => Some(mapping.clone()),
            None => self.base.as_ref()?.canonical_mapping(code),
        }
    }

    fn compatibility_mapping(&self, code: u32) -> Option<Vec<u32>>
    {
        match self.compatibility.get(&code) {
            Some(mapping) => Some(mapping.clone()),
            None => self.base.as_ref()?.compatibility_mapping(code),
        }
    }

    fn is_composition_exclusion(&self, code: u32) -> bool
    {
        self.exclusions.contains(&code)
            || self
                .base
                .as_ref()
                .is_some_and(|base| base.is_composition_exclusion(code))
    }

    // значения быстрых проверок базового источника могут не соответствовать перекрытым записям,
    // поэтому для собственных данных они всегда вычисляются
}
