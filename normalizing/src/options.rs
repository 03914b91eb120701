use core::str::FromStr;

use crate::NormalizationError;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Form
{
    /// каноническая декомпозиция с последующей канонической композицией
    #[default]
    Nfc,
    /// каноническая декомпозиция
    Nfd,
    /// декомпозиция совместимости с последующей канонической композицией
    Nfkc,
    /// декомпозиция совместимости
    Nfkd,
    /// "Fast C or D" - канонический порядок без полной декомпозиции
    Fcd,
    /// без нормализации
    None,
}

/// тип декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode
{
    Canonical,
    Compatibility,
}

/// результат быстрой проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuickCheck
{
    Yes,
    Maybe,
    No,
}

/// версия свойств Unicode, которую использует нормализатор
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UnicodeVersion
{
    /// актуальная версия данных хранилища
    #[default]
    Default,
    /// символы, появившиеся после Unicode 3.2, не нормализуются (IDNA 2003 и подобные протоколы)
    LegacyCompat,
}

/// алгоритм композиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy
{
    /// стандартное правило блокировки UAX #15
    #[default]
    Standard,
    /// комбинирование только со смежным стартером: первый нескомбинированный кодпоинт
    /// прекращает композицию для текущего стартера (FCC)
    Contiguous,
}

/// настройки нормализатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options
{
    pub form: Form,
    pub version: UnicodeVersion,
    pub strategy: Strategy,
}

impl Options
{
    pub fn new(form: Form) -> Self
    {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn with_form(mut self, form: Form) -> Self
    {
        self.form = form;
        self
    }

    pub fn with_version(mut self, version: UnicodeVersion) -> Self
    {
        self.version = version;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self
    {
        self.strategy = strategy;
        self
    }
}

impl Form
{
    /// все формы, для которых в хранилище есть данные быстрых проверок
    pub const PRIMARY: [Form; 4] = [Form::Nfd, Form::Nfkd, Form::Nfc, Form::Nfkc];

    /// тип декомпозиции, лежащей в основе формы
    pub fn mode(self) -> Option<Mode>
    {
        match self {
            Form::Nfc | Form::Nfd | Form::Fcd => Some(Mode::Canonical),
            Form::Nfkc | Form::Nfkd => Some(Mode::Compatibility),
            Form::None => None,
        }
    }

    /// форма подразумевает композицию?
    pub fn is_composing(self) -> bool
    {
        matches!(self, Form::Nfc | Form::Nfkc)
    }

    /// индекс формы в наборах флагов хранилища. FCD использует границы NFD
    pub(crate) fn index(self) -> Option<usize>
    {
        match self {
            Form::Nfd | Form::Fcd => Some(0),
            Form::Nfkd => Some(1),
            Form::Nfc => Some(2),
            Form::Nfkc => Some(3),
            Form::None => None,
        }
    }
}

impl FromStr for Form
{
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "nfc" => Form::Nfc,
            "nfd" => Form::Nfd,
            "nfkc" => Form::Nfkc,
            "nfkd" => Form::Nfkd,
            "fcd" => Form::Fcd,
            "none" => Form::None,
            _ => return Err(NormalizationError::UnsupportedForm(value.to_owned())),
        })
    }
}

impl FromStr for UnicodeVersion
{
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(UnicodeVersion::Default),
            "legacy" | "legacy-compat" | "3.2" => Ok(UnicodeVersion::LegacyCompat),
            _ => Err(NormalizationError::UnsupportedForm(value.to_owned())),
        }
    }
}

impl FromStr for Strategy
{
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Strategy::Standard),
            "contiguous" | "fcc" => Ok(Strategy::Contiguous),
            _ => Err(NormalizationError::UnsupportedForm(value.to_owned())),
        }
    }
}
