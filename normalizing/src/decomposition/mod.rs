use crate::codepoint::Codepoint;
use crate::data::PropertyStore;
use crate::Mode;

pub mod hangul;

/// полная декомпозиция символов строки с последующим каноническим упорядочиванием
pub fn decompose<I>(store: &PropertyStore, chars: I, mode: Mode, buffer: &mut Vec<Codepoint>)
where
    I: IntoIterator<Item = char>,
{
    let start = buffer.len();

    for c in chars {
        store.decompose_into(u32::from(c), mode, buffer);
    }

    reorder(&mut buffer[start ..]);
}

/// каноническое упорядочивание: устойчивая сортировка каждой последовательности нестартеров по CCC.
/// стартеры не перемещаются, кодпоинты с одинаковым CCC сохраняют исходный порядок
#[inline]
pub fn reorder(buffer: &mut [Codepoint])
{
    for i in 1 .. buffer.len() {
        let current = buffer[i];

        if current.is_starter() {
            continue;
        }

        let mut j = i;

        while j > 0 {
            let previous = buffer[j - 1];

            if previous.is_starter() || previous.ccc() <= current.ccc() {
                break;
            }

            buffer[j] = previous;
            j -= 1;
        }

        buffer[j] = current;
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn codepoints(values: &[(u32, u8)]) -> Vec<Codepoint>
    {
        values
            .iter()
            .map(|&(code, ccc)| Codepoint::from_code_and_ccc(code, ccc))
            .collect()
    }

    #[test]
    fn marks_are_sorted_between_starters()
    {
        let mut buffer = codepoints(&[
            (0x41, 0),
            (0x300, 230),
            (0x316, 220),
            (0x301, 230),
            (0x42, 0),
            (0x327, 202),
            (0x31B, 216),
            (0x323, 220),
        ]);

        reorder(&mut buffer);

        let codes: Vec<u32> = buffer.iter().map(|c| c.code()).collect();

        assert_eq!(
            codes,
            [0x41, 0x316, 0x300, 0x301, 0x42, 0x327, 0x31B, 0x323]
        );
    }

    #[test]
    fn leading_nonstarters()
    {
        let mut buffer = codepoints(&[(0x301, 230), (0x323, 220), (0x41, 0)]);

        reorder(&mut buffer);

        let codes: Vec<u32> = buffer.iter().map(|c| c.code()).collect();

        assert_eq!(codes, [0x323, 0x301, 0x41]);
    }
}
