/// маска кодпоинта в записи таблицы композиций
const CODE_MASK: u64 = 0x1FFFFF;
/// сдвиг полученного при комбинировании кодпоинта
const COMPOSED_SHIFT: u32 = 21;
/// сдвиг информации о комбинировании полученного кодпоинта
const COMBINING_SHIFT: u32 = 48;

/// максимальный индекс в таблице композиций, который можно записать в информацию о комбинировании
pub const MAX_COMBINING_INDEX: usize = 0x7FF;
/// максимальное количество вариантов комбинирования одного кодпоинта
pub const MAX_COMBINING_COUNT: usize = 0x1F;

/// распакованная информация о комбинировании -
/// индекс в таблице комбинаций и количество записанных для кодпоинта вариантов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointCombining
{
    pub index: u16,
    pub count: u16,
}

impl From<u16> for CodepointCombining
{
    #[inline(always)]
    fn from(value: u16) -> Self
    {
        Self {
            index: value & 0x7FF,
            count: value >> 11,
        }
    }
}

impl CodepointCombining
{
    /// запечь информацию о комбинировании в u16
    pub fn bake(&self) -> u16
    {
        self.index | (self.count << 11)
    }
}

/// результат комбинирования кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineResult
{
    /// кодпоинты скомбинированы, полученный кодпоинт также может быть скомбинирован
    Combined(u32, u16),
    /// кодпоинты скомбинированы, полученный кодпоинт не может быть скомбинирован
    Final(u32),
    /// кодпоинты не комбинируются
    None,
}

/// запись таблицы композиций: второй кодпоинт, результат и его информация о комбинировании
#[inline(always)]
pub fn bake_entry(second: u32, composed: u32, combining: u16) -> u64
{
    (second as u64) | (composed as u64) << COMPOSED_SHIFT | (combining as u64) << COMBINING_SHIFT
}

/// скомбинировать два кодпоинта.
/// записи для одного первого кодпоинта отсортированы по второму кодпоинту
#[inline(always)]
pub fn combine(combining: u16, second: u32, compositions: &[u64]) -> CombineResult
{
    if combining == 0 {
        return CombineResult::None;
    }

    let combining = CodepointCombining::from(combining);
    let first = combining.index as usize;
    let last = first + combining.count as usize;

    let entries = match compositions.get(first .. last) {
        Some(entries) => entries,
        None => return CombineResult::None,
    };

    match entries.binary_search_by_key(&second, |entry| (entry & CODE_MASK) as u32) {
        Ok(position) => {
            let entry = entries[position];
            let code = ((entry >> COMPOSED_SHIFT) & CODE_MASK) as u32;

            match (entry >> COMBINING_SHIFT) as u16 {
                0 => CombineResult::Final(code),
                combining => CombineResult::Combined(code, combining),
            }
        }
        Err(_) => CombineResult::None,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn packed_lookup()
    {
        // A: + U+0300 -> U+00C0, + U+0301 -> U+00C1; E: + U+0300 -> U+00C8
        let a = CodepointCombining { index: 0, count: 2 }.bake();
        let e = CodepointCombining { index: 2, count: 1 }.bake();

        let table = [
            bake_entry(0x300, 0xC0, 0),
            bake_entry(0x301, 0xC1, e),
            bake_entry(0x300, 0xC8, 0),
        ];

        assert_eq!(combine(a, 0x300, &table), CombineResult::Final(0xC0));
        assert_eq!(combine(a, 0x301, &table), CombineResult::Combined(0xC1, e));
        assert_eq!(combine(a, 0x302, &table), CombineResult::None);
        assert_eq!(combine(e, 0x300, &table), CombineResult::Final(0xC8));
        assert_eq!(combine(0, 0x300, &table), CombineResult::None);
    }
}
