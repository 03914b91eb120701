use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, warn};

use super::properties::*;
use super::source::DataSource;
use super::trie::{CodepointTrie, LAST_CODEPOINT};
use crate::codepoint::Codepoint;
use crate::composition::pairs::{
    bake_entry, CodepointCombining, MAX_COMBINING_COUNT, MAX_COMBINING_INDEX,
};
use crate::decomposition::hangul::*;
use crate::{Form, Mode, NormalizationError, QuickCheck};

/// максимальная глубина рекурсивной замены кодпоинтов при полной декомпозиции
pub const MAX_DECOMPOSITION_DEPTH: usize = 32;
/// максимальная длина полной декомпозиции одного кодпоинта
pub const MAX_EXPANSION_LENGTH: usize = 1024;

/// отрезок таблицы расширений
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion
{
    pub start: u32,
    pub len: u16,
}

/// полные декомпозиции кодпоинта. декомпозиция совместимости хранится,
/// только если она отличается от канонической
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingSlot
{
    pub canonical: Option<Expansion>,
    pub compatibility: Option<Expansion>,
}

/// таблицы хранилища свойств
pub struct Tables
{
    pub trie: CodepointTrie<Properties>,
    pub mappings: Vec<MappingSlot>,
    pub expansions: Vec<u32>,
    pub compositions: Vec<u64>,
    /// для каждой из форм NFD, NFKD, NFC, NFKC: кодпоинты ниже этого значения - стартеры
    /// с положительной быстрой проверкой и границей перед ними
    pub yes_below: [u32; 4],
}

/// данные, полученные из источника
#[derive(Default)]
struct Raw
{
    ccc: HashMap<u32, u8>,
    canonical: HashMap<u32, Vec<u32>>,
    compatibility: HashMap<u32, Vec<u32>>,
    exclusions: HashSet<u32>,
    quick_checks: HashMap<u32, [Option<QuickCheck>; 4]>,
}

impl Raw
{
    fn ccc(&self, code: u32) -> u8
    {
        self.ccc.get(&code).copied().unwrap_or(0)
    }

    fn mapping(&self, code: u32, mode: Mode) -> Option<&Vec<u32>>
    {
        match mode {
            Mode::Canonical => self.canonical.get(&code),
            Mode::Compatibility => self
                .compatibility
                .get(&code)
                .or_else(|| self.canonical.get(&code)),
        }
    }
}

/// является ли значение скалярным значением Unicode?
fn is_scalar(code: u32) -> bool
{
    code <= LAST_CODEPOINT && !(0xD800 ..= 0xDFFF).contains(&code)
}

/// проверить кодпоинты декомпозиции
fn validate(mapping: Vec<u32>) -> Result<Vec<u32>, NormalizationError>
{
    match mapping.iter().find(|&&code| !is_scalar(code)) {
        Some(&code) => Err(NormalizationError::InvalidCodepoint(code)),
        None => Ok(mapping),
    }
}

/// собрать данные источника для всего кодового пространства
fn collect<S>(source: &S) -> Result<Raw, NormalizationError>
where
    S: DataSource + ?Sized,
{
    let mut raw = Raw::default();

    for code in (0 ..= LAST_CODEPOINT).filter(|&code| is_scalar(code)) {
        let ccc = source.ccc(code);

        if ccc != 0 {
            raw.ccc.insert(code, ccc);
        }

        // слоги хангыль декомпозируются алгоритмически
        if is_hangul_syllable(code) {
            continue;
        }

        if let Some(mapping) = source.canonical_mapping(code) {
            raw.canonical.insert(code, validate(mapping)?);
        }

        if let Some(mapping) = source.compatibility_mapping(code) {
            raw.compatibility.insert(code, validate(mapping)?);
        }

        if source.is_composition_exclusion(code) {
            raw.exclusions.insert(code);
        }

        let quick_checks = Form::PRIMARY.map(|form| source.quick_check(code, form));

        if quick_checks.iter().any(|qc| qc.is_some_and(|qc| qc != QuickCheck::Yes)) {
            raw.quick_checks.insert(code, quick_checks);
        }
    }

    Ok(raw)
}

/// полная декомпозиция: рекурсивная замена кодпоинтов их декомпозициями с помощью стека.
/// None - декомпозиция зациклена или слишком длинная
fn expand(raw: &Raw, code: u32, mode: Mode) -> Option<Vec<u32>>
{
    let mapping = match is_hangul_syllable(code) {
        true => return Some(hangul_jamo(code)),
        false => raw.mapping(code, mode)?,
    };

    let mut result = Vec::with_capacity(mapping.len());
    let mut stack: Vec<(u32, usize)> = mapping.iter().rev().map(|&c| (c, 1)).collect();

    while let Some((current, depth)) = stack.pop() {
        if depth > MAX_DECOMPOSITION_DEPTH || stack.len() + result.len() > MAX_EXPANSION_LENGTH {
            return None;
        }

        if is_hangul_syllable(current) {
            result.extend(hangul_jamo(current));
            continue;
        }

        match raw.mapping(current, mode) {
            Some(mapping) => stack.extend(mapping.iter().rev().map(|&c| (c, depth + 1))),
            None => result.push(current),
        }
    }

    Some(result)
}

/// чамо слога хангыль
fn hangul_jamo(code: u32) -> Vec<u32>
{
    match decompose_hangul(code) {
        Some((l, v, Some(t))) => vec![l, v, t],
        Some((l, v, None)) => vec![l, v],
        None => vec![code],
    }
}

/// полные декомпозиции кодпоинта - каноническая и совместимости (если отличается)
struct Decomposed
{
    canonical: Option<Vec<u32>>,
    compatibility: Option<Vec<u32>>,
}

impl Decomposed
{
    fn for_mode(&self, mode: Mode) -> Option<&Vec<u32>>
    {
        match mode {
            Mode::Canonical => self.canonical.as_ref(),
            Mode::Compatibility => self.compatibility.as_ref().or(self.canonical.as_ref()),
        }
    }
}

/// построить таблицы хранилища
pub fn build<S>(source: &S) -> Result<Tables, NormalizationError>
where
    S: DataSource + ?Sized,
{
    let raw = collect(source)?;

    // полные декомпозиции

    let mut decomposed: BTreeMap<u32, Decomposed> = BTreeMap::new();
    let mut broken = 0;

    for &code in raw.canonical.keys().chain(raw.compatibility.keys()) {
        if decomposed.contains_key(&code) {
            continue;
        }

        let mut full = |mode| match raw.mapping(code, mode) {
            Some(_) => match expand(&raw, code, mode) {
                Some(expansion) => Some(expansion),
                None => {
                    warn!(
                        "U+{:04X}: {:?} decomposition is cyclic or too long, ignored",
                        code, mode
                    );
                    broken += 1;
                    None
                }
            },
            None => None,
        };

        let canonical = full(Mode::Canonical);
        let compatibility = full(Mode::Compatibility).filter(|c| Some(c) != canonical.as_ref());

        decomposed.insert(
            code,
            Decomposed {
                canonical,
                compatibility,
            },
        );
    }

    // исключения композиции: явные, синглтоны, декомпозиции нестартеров и декомпозиции,
    // начинающиеся с нестартера

    let is_excluded = |code: u32| match (raw.canonical.get(&code), decomposed.get(&code)) {
        (Some(mapping), Some(Decomposed { canonical: Some(_), .. })) => match mapping.as_slice() {
            [first, _] => {
                raw.exclusions.contains(&code) || raw.ccc(code) != 0 || raw.ccc(*first) != 0
            }
            _ => true,
        },
        _ => false,
    };

    // пары композиций

    let mut pairs: BTreeMap<u32, BTreeMap<u32, u32>> = BTreeMap::new();

    let mut composable: Vec<(&u32, &Vec<u32>)> = raw.canonical.iter().collect();
    composable.sort_unstable();

    // отброшенные (зацикленные или слишком длинные) декомпозиции не комбинируются
    for (&code, mapping) in composable {
        let expanded = decomposed.get(&code).is_some_and(|d| d.canonical.is_some());

        let &[first, second] = mapping.as_slice() else {
            continue;
        };

        if !expanded || is_excluded(code) {
            continue;
        }

        pairs.entry(first).or_default().entry(second).or_insert(code);
    }

    let (compositions, combining) = bake_compositions(&pairs)?;

    let composites: HashSet<u32> = pairs.values().flat_map(|p| p.values().copied()).collect();

    let combines_forward = |code: u32| {
        combining.contains_key(&code) || is_hangul_l(code) || is_hangul_lv(code)
    };

    let backward: HashSet<u32> = pairs.values().flat_map(|p| p.keys().copied()).collect();
    let combines_backward =
        |code: u32| backward.contains(&code) || is_hangul_v(code) || is_hangul_t(code);

    // таблица декомпозиций

    let mut mappings = vec![MappingSlot::default()];
    let mut expansions: Vec<u32> = Vec::new();
    let mut slots: HashMap<u32, u16> = HashMap::new();

    for (&code, entry) in decomposed.iter() {
        if entry.canonical.is_none() && entry.compatibility.is_none() {
            continue;
        }

        let slot = u16::try_from(mappings.len())
            .map_err(|_| NormalizationError::TableOverflow("mappings"))?;

        let mut store = |expansion: &Option<Vec<u32>>| -> Result<_, NormalizationError> {
            Ok(match expansion {
                Some(expansion) => {
                    let start = u32::try_from(expansions.len())
                        .map_err(|_| NormalizationError::TableOverflow("expansions"))?;

                    expansions.extend(
                        expansion
                            .iter()
                            .map(|&c| Codepoint::from_code_and_ccc(c, raw.ccc(c)).baked()),
                    );

                    Some(Expansion {
                        start,
                        len: expansion.len() as u16,
                    })
                }
                None => None,
            })
        };

        mappings.push(MappingSlot {
            canonical: store(&entry.canonical)?,
            compatibility: store(&entry.compatibility)?,
        });
        slots.insert(code, slot);
    }

    // свойства кодпоинтов. кодпоинты, не попавшие в таблицу, - инертные стартеры

    let mut interesting: HashSet<u32> = HashSet::new();

    interesting.extend(raw.ccc.keys());
    interesting.extend(decomposed.keys());
    interesting.extend(raw.quick_checks.keys());
    interesting.extend(raw.exclusions.iter());
    interesting.extend(combining.keys());
    interesting.extend(backward.iter());
    interesting.extend(HANGUL_L_BASE .. HANGUL_L_BASE + HANGUL_L_COUNT);
    interesting.extend(HANGUL_V_BASE .. HANGUL_V_BASE + HANGUL_V_COUNT);
    interesting.extend(HANGUL_T_BASE + 1 .. HANGUL_T_BASE + HANGUL_T_COUNT);
    interesting.extend(HANGUL_S_BASE .. HANGUL_S_BASE + HANGUL_S_COUNT);

    let mut properties: HashMap<u32, Properties> = HashMap::with_capacity(interesting.len());

    for code in interesting {
        let entry = match is_hangul_syllable(code) {
            true => Decomposed {
                canonical: Some(hangul_jamo(code)),
                compatibility: None,
            },
            false => match decomposed.get(&code) {
                Some(entry) => Decomposed {
                    canonical: entry.canonical.clone(),
                    compatibility: entry.compatibility.clone(),
                },
                None => Decomposed {
                    canonical: None,
                    compatibility: None,
                },
            },
        };

        let ccc = raw.ccc(code);
        let excluded = is_excluded(code);
        let forward = combines_forward(code);
        let backward = combines_backward(code);
        let composite = composites.contains(&code) || is_hangul_syllable(code);

        let mut flags = 0;

        let mut set = |flag: u32, condition: bool| {
            if condition {
                flags |= flag;
            }
        };

        set(EXCLUDED, excluded);
        set(COMBINES_FORWARD, forward);
        set(COMBINES_BACKWARD, backward);

        // быстрые проверки: опубликованные значения источника или вычисленные по данным

        let published = raw.quick_checks.get(&code).copied().unwrap_or([None; 4]);

        let derived = {
            let nfd = match entry.canonical.is_some() {
                true => QuickCheck::No,
                false => QuickCheck::Yes,
            };
            let nfkd = match entry.canonical.is_some() || entry.compatibility.is_some() {
                true => QuickCheck::No,
                false => QuickCheck::Yes,
            };
            let nfc = match (entry.canonical.is_some() && !composite) || excluded {
                true => QuickCheck::No,
                false => match backward {
                    true => QuickCheck::Maybe,
                    false => QuickCheck::Yes,
                },
            };
            let nfkc = match nfc == QuickCheck::No || entry.compatibility.is_some() {
                true => QuickCheck::No,
                false => nfc,
            };

            [nfd, nfkd, nfc, nfkc]
        };

        let quick_checks: Vec<QuickCheck> = published
            .iter()
            .zip(derived)
            .map(|(published, derived)| published.unwrap_or(derived))
            .collect();

        set(QC_NFD_NO, quick_checks[0] == QuickCheck::No);
        set(QC_NFKD_NO, quick_checks[1] == QuickCheck::No);
        set(QC_NFC_NO, quick_checks[2] == QuickCheck::No);
        set(QC_NFC_MAYBE, quick_checks[2] == QuickCheck::Maybe);
        set(QC_NFKC_NO, quick_checks[3] == QuickCheck::No);
        set(QC_NFKC_MAYBE, quick_checks[3] == QuickCheck::Maybe);

        // границы и инертность

        for (index, form) in Form::PRIMARY.into_iter().enumerate() {
            let mode = match form.mode() {
                Some(mode) => mode,
                None => continue,
            };

            let mapping = entry.for_mode(mode);
            let itself = [code];
            let d: &[u32] = mapping.map_or(&itself[..], |m| m.as_slice());

            let (before, after) = match (d.first(), d.last()) {
                (Some(&first), Some(&last)) => match form.is_composing() {
                    false => (raw.ccc(first) == 0, raw.ccc(last) == 0),
                    true => (
                        raw.ccc(first) == 0 && !combines_backward(first),
                        raw.ccc(last) == 0 && !combines_forward(last) && !forward,
                    ),
                },
                _ => (false, false),
            };

            let inert = before
                && after
                && ccc == 0
                && quick_checks[index] == QuickCheck::Yes
                && match form.is_composing() {
                    false => mapping.is_none(),
                    true => !forward && !backward,
                };

            set(1 << (NO_BOUNDARY_BEFORE_SHIFT + index as u32), !before);
            set(1 << (NO_BOUNDARY_AFTER_SHIFT + index as u32), !after);
            set(1 << (NOT_INERT_SHIFT + index as u32), !inert);
        }

        // CCC первого и последнего кодпоинтов канонической декомпозиции - для проверки FCD

        let (lead, trail) = match entry.canonical.as_ref() {
            Some(d) => (
                d.first().map_or(0, |&c| raw.ccc(c)),
                d.last().map_or(0, |&c| raw.ccc(c)),
            ),
            None => (ccc, ccc),
        };

        let value = Properties {
            ccc,
            lead,
            trail,
            flags,
            slot: slots.get(&code).copied().unwrap_or(0),
            combining: combining.get(&code).copied().unwrap_or(0),
        };

        if value != Properties::default() {
            properties.insert(code, value);
        }
    }

    let mut yes_below = [LAST_CODEPOINT + 1; 4];

    for (&code, value) in properties.iter() {
        for (index, form) in Form::PRIMARY.into_iter().enumerate() {
            if value.ccc != 0
                || value.quick_check(form) != QuickCheck::Yes
                || !value.has_boundary_before(form)
            {
                yes_below[index] = yes_below[index].min(code);
            }
        }
    }

    let trie = CodepointTrie::build(|code| properties.get(&code).copied().unwrap_or_default());

    debug!(
        "property store: {} code points with properties, {} trie blocks, {} mappings, \
         {} expansion entries, {} composition pairs, {} broken decompositions",
        properties.len(),
        trie.blocks(),
        mappings.len() - 1,
        expansions.len(),
        compositions.len(),
        broken
    );

    Ok(Tables {
        trie,
        mappings,
        expansions,
        compositions,
        yes_below,
    })
}

/// "запеченные" композиции - массив значений и информация о комбинировании для первых кодпоинтов пар
fn bake_compositions(
    pairs: &BTreeMap<u32, BTreeMap<u32, u32>>,
) -> Result<(Vec<u64>, HashMap<u32, u16>), NormalizationError>
{
    let mut data: Vec<(u32, u32)> = Vec::new();
    let mut combining: HashMap<u32, u16> = HashMap::new();

    for (&first, seconds) in pairs.iter() {
        let index = data.len();
        let count = seconds.len();

        if index > MAX_COMBINING_INDEX || count > MAX_COMBINING_COUNT {
            return Err(NormalizationError::TableOverflow("compositions"));
        }

        let info = CodepointCombining {
            index: index as u16,
            count: count as u16,
        };

        combining.insert(first, info.bake());
        data.extend(seconds.iter().map(|(&second, &composed)| (second, composed)));
    }

    // для каждой пары записываем информацию о комбинировании получаемого кодпоинта
    let compositions = data
        .into_iter()
        .map(|(second, composed)| {
            bake_entry(second, composed, combining.get(&composed).copied().unwrap_or(0))
        })
        .collect();

    Ok((compositions, combining))
}
