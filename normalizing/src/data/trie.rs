use std::collections::HashMap;
use std::hash::Hash;

/// количество бит, с помощью которых кодируется смещение кодпоинта в блоке
pub const BLOCK_BITS: u32 = 7;
/// размер блока
pub const BLOCK_SIZE: usize = 1 << BLOCK_BITS;
/// маска смещения в блоке
const BLOCK_MASK: u32 = (1 << BLOCK_BITS) - 1;
/// до этого кодпоинта (включительно) все кодпоинты записаны в таблицу данных последовательно
pub const CONTINUOUS_BLOCK_END: u32 = 0xFFF;
/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// получить кодпоинт по содержащему его блоку и смещению
macro_rules! code_for {
    ($block: expr, $offset: expr) => {
        ($block << BLOCK_BITS) + $offset
    };
}

/// индекс блока для кодпоинта
macro_rules! block_for {
    ($code: expr) => {
        $code >> BLOCK_BITS
    };
}

/// двухуровневая таблица значений для всего кодового пространства:
/// индекс блока -> блок из 128 значений. одинаковые блоки хранятся один раз,
/// блоки после последнего непустого ссылаются на пустой блок-заглушку
#[derive(Debug, Clone)]
pub struct CodepointTrie<T>
{
    /// индекс блока
    index: Vec<u16>,
    /// основные данные
    data: Vec<T>,
    /// смещение блока-заглушки (значения по умолчанию)
    empty_block: u32,
}

impl<T> CodepointTrie<T>
where
    T: Copy + Default + Eq + Hash,
{
    /// построить таблицу, запросив значение для каждого кодпоинта
    pub fn build<F>(mut value: F) -> Self
    where
        F: FnMut(u32) -> T,
    {
        let max_blocks = block_for!(LAST_CODEPOINT) + 1;

        let mut index: Vec<u16> = Vec::with_capacity(max_blocks as usize);
        let mut data: Vec<T> = Vec::new();
        let mut known: HashMap<[T; BLOCK_SIZE], u16> = HashMap::new();

        let empty = [T::default(); BLOCK_SIZE];
        let mut last_nonempty_block = 0;

        // заполняем блоки
        for block in 0 .. max_blocks {
            let mut block_data = [T::default(); BLOCK_SIZE];

            for offset in 0 .. BLOCK_SIZE as u32 {
                block_data[offset as usize] = value(code_for!(block, offset));
            }

            // блоки непрерывного участка пишем последовательно, без дедупликации
            let continuous = code_for!(block, 0) <= CONTINUOUS_BLOCK_END;

            if !continuous && block_data == empty {
                index.push(u16::MAX);
                continue;
            }

            last_nonempty_block = block;

            let position = match known.get(&block_data) {
                Some(&position) if !continuous => position,
                _ => {
                    let position = block_for!(data.len()) as u16;

                    data.extend_from_slice(&block_data);
                    known.entry(block_data).or_insert(position);

                    position
                }
            };

            index.push(position);
        }

        // пустые блоки ссылаются на заглушку в конце таблицы
        let empty_block = block_for!(data.len()) as u16;
        data.extend_from_slice(&empty);

        index.truncate(last_nonempty_block as usize + 1);
        index
            .iter_mut()
            .filter(|position| **position == u16::MAX)
            .for_each(|position| *position = empty_block);

        Self {
            index,
            data,
            empty_block: empty_block as u32,
        }
    }

    /// значение для кодпоинта. для значений вне кодового пространства - значение по умолчанию
    #[inline(always)]
    pub fn get(&self, code: u32) -> T
    {
        if code <= CONTINUOUS_BLOCK_END {
            return self.data[code as usize];
        }

        let block = match self.index.get(block_for!(code) as usize) {
            Some(&block) => block as u32,
            None => self.empty_block,
        };

        self.data[(code_for!(block, code & BLOCK_MASK)) as usize]
    }

    /// количество хранимых блоков (с учётом заглушки)
    pub fn blocks(&self) -> usize
    {
        self.data.len() / BLOCK_SIZE
    }
}
