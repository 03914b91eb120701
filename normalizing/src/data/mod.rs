use crate::codepoint::Codepoint;
use crate::composition::hangul::compose_hangul;
use crate::composition::pairs::{combine, CombineResult};
use crate::decomposition::hangul::decompose_hangul;
use crate::{CodepointSet, Form, Mode, NormalizationError, Normalizer, Options, QuickCheck};

use build::{MappingSlot, Tables};
use properties::{Properties, COMBINES_BACKWARD, COMBINES_FORWARD, EXCLUDED};
use trie::CodepointTrie;

pub use record::CodepointRecord;
pub use source::{CustomSource, DataSource, UcdSource};

pub(crate) mod build;
pub(crate) mod properties;
pub(crate) mod trie;

mod legacy;
mod record;
mod source;

/// неизменяемое хранилище свойств нормализации для всего кодового пространства.
///
/// хранилище строится один раз и передаётся нормализаторам по ссылке; оно не содержит
/// изменяемого состояния и может одновременно использоваться из нескольких потоков
#[derive(Debug, Clone)]
pub struct PropertyStore
{
    /// свойства кодпоинтов
    trie: CodepointTrie<Properties>,
    /// декомпозиции, 0 - пустая запись
    mappings: Vec<MappingSlot>,
    /// кодпоинты декомпозиций вместе с их CCC
    expansions: Vec<u32>,
    /// пары композиций
    compositions: Vec<u64>,
    /// граница быстрого пропуска кодпоинтов по формам (NFD, NFKD, NFC, NFKC)
    yes_below: [u32; 4],
    /// кодпоинты, нормализуемые в режиме совместимости с Unicode 3.2
    legacy: CodepointSet,
}

impl Default for PropertyStore
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl PropertyStore
{
    /// хранилище со встроенными данными Unicode 15.1
    pub fn new() -> Self
    {
        match Self::from_source(&UcdSource) {
            Ok(store) => store,
            // встроенные данные проверены тестами - ошибка здесь означает повреждённую сборку
            Err(error) => panic!("built-in normalization data is inconsistent: {}", error),
        }
    }

    /// хранилище на основе произвольного источника данных
    pub fn from_source<S>(source: &S) -> Result<Self, NormalizationError>
    where
        S: DataSource + ?Sized,
    {
        let Tables {
            trie,
            mappings,
            expansions,
            compositions,
            yes_below,
        } = build::build(source)?;

        Ok(Self {
            trie,
            mappings,
            expansions,
            compositions,
            yes_below,
            legacy: legacy::legacy_set(),
        })
    }

    /// нормализатор для указанных настроек
    pub fn normalizer(&self, options: Options) -> Normalizer<'_>
    {
        Normalizer::new(self, options)
    }

    // свойства отдельных кодпоинтов

    /// класс канонического комбинирования
    #[inline]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.trie.get(code).ccc
    }

    /// полная декомпозиция кодпоинта. None - кодпоинт декомпозируется сам в себя
    pub fn decomposition(&self, code: u32, mode: Mode) -> Option<Vec<u32>>
    {
        if let Some((l, v, t)) = decompose_hangul(code) {
            return Some(core::iter::once(l).chain(Some(v)).chain(t).collect());
        }

        let expansion = self.expansion(self.properties(code).slot, mode)?;

        Some(expansion.iter().map(|&c| Codepoint::from_baked(c).code()).collect())
    }

    /// значение быстрой проверки
    #[inline]
    pub fn quick_check(&self, code: u32, form: Form) -> QuickCheck
    {
        self.properties(code).quick_check(form)
    }

    /// исключение композиции (Full_Composition_Exclusion)
    #[inline]
    pub fn is_excluded(&self, code: u32) -> bool
    {
        self.properties(code).has(EXCLUDED)
    }

    /// первичный композит, полученный из пары кодпоинтов
    pub fn compose_pair(&self, first: u32, second: u32) -> Option<u32>
    {
        self.combine(first, self.properties(first).combining, second)
            .map(|(code, _)| code)
    }

    #[inline]
    pub fn has_boundary_before(&self, code: u32, form: Form) -> bool
    {
        self.properties(code).has_boundary_before(form)
    }

    #[inline]
    pub fn has_boundary_after(&self, code: u32, form: Form) -> bool
    {
        self.properties(code).has_boundary_after(form)
    }

    #[inline]
    pub fn is_inert(&self, code: u32, form: Form) -> bool
    {
        self.properties(code).is_inert(form)
    }

    /// все свойства кодпоинта
    pub fn record(&self, code: u32) -> CodepointRecord
    {
        let properties = self.properties(code);

        let canonical = self.decomposition(code, Mode::Canonical);
        let compatibility = match self.mappings.get(properties.slot as usize) {
            Some(slot) if properties.slot != 0 && slot.compatibility.is_some() => {
                self.decomposition(code, Mode::Compatibility)
            }
            _ => None,
        };

        CodepointRecord {
            code,
            ccc: properties.ccc,
            canonical,
            compatibility,
            quick_check: Form::PRIMARY.map(|form| properties.quick_check(form)),
            is_excluded: properties.has(EXCLUDED),
            combines_forward: properties.has(COMBINES_FORWARD),
            combines_backward: properties.has(COMBINES_BACKWARD),
            has_boundary_before: Form::PRIMARY.map(|form| properties.has_boundary_before(form)),
            has_boundary_after: Form::PRIMARY.map(|form| properties.has_boundary_after(form)),
            is_inert: Form::PRIMARY.map(|form| properties.is_inert(form)),
        }
    }

    /// кодпоинты, которые нормализуются в режиме совместимости с Unicode 3.2
    pub fn legacy_set(&self) -> &CodepointSet
    {
        &self.legacy
    }

    // нормализация текста

    /// полная (каноническая или совместимости) декомпозиция с последующим каноническим упорядочиванием
    pub fn decompose(&self, text: &str, compatibility: bool) -> String
    {
        let form = match compatibility {
            true => Form::Nfkd,
            false => Form::Nfd,
        };

        Normalizer::new(self, Options::new(form)).normalize(text)
    }

    /// декомпозиция с последующей канонической композицией
    pub fn compose(&self, text: &str, compatibility: bool) -> String
    {
        let form = match compatibility {
            true => Form::Nfkc,
            false => Form::Nfc,
        };

        Normalizer::new(self, Options::new(form)).normalize(text)
    }

    // внутренний интерфейс нормализатора

    #[inline(always)]
    pub(crate) fn properties(&self, code: u32) -> Properties
    {
        self.trie.get(code)
    }

    /// кодпоинты ниже возвращаемого значения не требуют обращения к таблице свойств:
    /// это стартеры с границей перед ними, не меняющиеся при нормализации
    #[inline(always)]
    pub(crate) fn yes_below(&self, form: Form) -> u32
    {
        match form.index() {
            Some(index) => self.yes_below[index],
            None => u32::MAX,
        }
    }

    /// записать полную декомпозицию кодпоинта в буфер
    #[inline(always)]
    pub(crate) fn decompose_into(&self, code: u32, mode: Mode, buffer: &mut Vec<Codepoint>)
    {
        let properties = self.properties(code);

        if properties.slot == 0 {
            match decompose_hangul(code) {
                Some((l, v, t)) => {
                    buffer.push(Codepoint::from_code(l));
                    buffer.push(Codepoint::from_code(v));

                    if let Some(t) = t {
                        buffer.push(Codepoint::from_code(t));
                    }
                }
                None => buffer.push(Codepoint::from_code_and_ccc(code, properties.ccc)),
            }

            return;
        }

        match self.expansion(properties.slot, mode) {
            Some(expansion) => buffer.extend(expansion.iter().map(|&c| Codepoint::from_baked(c))),
            None => buffer.push(Codepoint::from_code_and_ccc(code, properties.ccc)),
        }
    }

    /// скомбинировать стартер (с известной информацией о комбинировании) со следующим кодпоинтом.
    /// результат - полученный кодпоинт и его информация о комбинировании
    #[inline(always)]
    pub(crate) fn combine(&self, first: u32, combining: u16, second: u32) -> Option<(u32, u16)>
    {
        if let Some(code) = compose_hangul(first, second) {
            return Some((code, self.properties(code).combining));
        }

        match combine(combining, second, &self.compositions) {
            CombineResult::Combined(code, combining) => Some((code, combining)),
            CombineResult::Final(code) => Some((code, 0)),
            CombineResult::None => None,
        }
    }

    /// декомпозиция из таблицы расширений; для совместимости - каноническая, если своей нет
    #[inline(always)]
    fn expansion(&self, slot: u16, mode: Mode) -> Option<&[u32]>
    {
        if slot == 0 {
            return None;
        }

        let slot = self.mappings.get(slot as usize)?;

        let expansion = match mode {
            Mode::Canonical => slot.canonical,
            Mode::Compatibility => slot.compatibility.or(slot.canonical),
        }?;

        let start = expansion.start as usize;

        self.expansions.get(start .. start + expansion.len as usize)
    }
}
