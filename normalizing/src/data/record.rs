use crate::{Form, QuickCheck};

/// свойства кодпоинта, собранные из таблиц хранилища
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord
{
    pub code: u32,
    /// класс комбинирования, 0 - стартер
    pub ccc: u8,
    /// полная каноническая декомпозиция. Some(пустой вектор) - кодпоинт удаляется
    pub canonical: Option<Vec<u32>>,
    /// полная декомпозиция совместимости, если она отличается от канонической
    pub compatibility: Option<Vec<u32>>,
    /// быстрые проверки в порядке NFD, NFKD, NFC, NFKC
    pub quick_check: [QuickCheck; 4],
    /// исключение композиции
    pub is_excluded: bool,
    /// кодпоинт бывает первым в паре композиции
    pub combines_forward: bool,
    /// кодпоинт бывает вторым в паре композиции
    pub combines_backward: bool,
    /// граница перед кодпоинтом, по формам (NFD, NFKD, NFC, NFKC)
    pub has_boundary_before: [bool; 4],
    /// граница после кодпоинта
    pub has_boundary_after: [bool; 4],
    /// кодпоинт не взаимодействует с соседями и не меняется при нормализации
    pub is_inert: [bool; 4],
}

impl CodepointRecord
{
    /// значение быстрой проверки для формы
    pub fn quick_check(&self, form: Form) -> QuickCheck
    {
        match form {
            Form::Fcd | Form::None => QuickCheck::Yes,
            _ => form.index().map_or(QuickCheck::Yes, |index| self.quick_check[index]),
        }
    }
}
