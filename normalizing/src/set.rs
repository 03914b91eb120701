use core::ops::RangeInclusive;

use icu_collections::codepointinvlist::{CodePointInversionList, CodePointInversionListBuilder};

/// множество кодпоинтов (список инверсий ICU4X): область действия фильтрованного нормализатора
/// и маска режима совместимости с Unicode 3.2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointSet(CodePointInversionList<'static>);

impl Default for CodepointSet
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl CodepointSet
{
    /// пустое множество
    pub fn new() -> Self
    {
        Self(CodePointInversionListBuilder::new().build())
    }

    /// всё кодовое пространство
    pub fn all() -> Self
    {
        Self(CodePointInversionList::all())
    }

    /// множество из диапазонов (в любом порядке, пересечения допускаются)
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeInclusive<u32>>,
    {
        let mut builder = CodePointInversionListBuilder::new();

        for range in ranges {
            builder.add_range32(range);
        }

        Self(builder.build())
    }

    /// дополнение множества до всего кодового пространства
    pub fn complement(&self) -> Self
    {
        let mut builder = CodePointInversionListBuilder::new();

        builder.add_set(&self.0);
        builder.complement();

        Self(builder.build())
    }

    /// содержит ли множество кодпоинт?
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.0.contains32(code)
    }

    pub fn is_empty(&self) -> bool
    {
        self.0.iter_ranges().next().is_none()
    }

    /// диапазоны множества по возрастанию
    pub fn ranges(&self) -> impl Iterator<Item = RangeInclusive<u32>> + '_
    {
        self.0.iter_ranges()
    }

    /// исходный список инверсий
    pub fn as_inversion_list(&self) -> &CodePointInversionList<'static>
    {
        &self.0
    }
}

impl From<CodePointInversionList<'static>> for CodepointSet
{
    fn from(list: CodePointInversionList<'static>) -> Self
    {
        Self(list)
    }
}

impl FromIterator<u32> for CodepointSet
{
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self
    {
        Self::from_ranges(iter.into_iter().map(|code| code ..= code))
    }
}
