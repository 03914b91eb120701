use thiserror::Error;

/// ошибки нормализации и построения хранилища свойств
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError
{
    /// результат не помещается в буфер фиксированного размера, в буфер ничего не записано
    #[error("output buffer too small: {required} bytes required")]
    BufferTooSmall { required: usize },

    /// неизвестная форма нормализации в настройках
    #[error("unsupported normalization form: {0:?}")]
    UnsupportedForm(String),

    /// источник данных содержит значение, не являющееся скалярным значением Unicode
    #[error("invalid code point in data source: {0:#06X}")]
    InvalidCodepoint(u32),

    /// данные источника не помещаются в формат таблиц
    #[error("data source overflows the {0} table")]
    TableOverflow(&'static str),
}
