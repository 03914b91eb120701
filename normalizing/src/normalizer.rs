use crate::codepoint::Codepoint;
use crate::composition::compose;
use crate::data::PropertyStore;
use crate::decomposition::decompose;
use crate::iter::NormalizingIter;
use crate::quick_check;
use crate::{CodepointSet, Form, NormalizationError, Options, QuickCheck, UnicodeVersion};

/// нормализатор: хранилище свойств + настройки (+ фильтр кодпоинтов).
///
/// текст разбивается на отрезки по границам нормализации - отрезок начинается с символа,
/// перед которым есть граница для выбранной формы, и нормализуется независимо от остальных.
/// символы вне области нормализации (фильтр, режим Unicode 3.2) копируются без изменений
/// и являются границами с обеих сторон
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a>
{
    store: &'a PropertyStore,
    options: Options,
    filter: Option<&'a CodepointSet>,
}

impl<'a> Normalizer<'a>
{
    pub fn new(store: &'a PropertyStore, options: Options) -> Self
    {
        Self {
            store,
            options,
            filter: None,
        }
    }

    pub fn nfd(store: &'a PropertyStore) -> Self
    {
        Self::new(store, Options::new(Form::Nfd))
    }

    pub fn nfkd(store: &'a PropertyStore) -> Self
    {
        Self::new(store, Options::new(Form::Nfkd))
    }

    pub fn nfc(store: &'a PropertyStore) -> Self
    {
        Self::new(store, Options::new(Form::Nfc))
    }

    pub fn nfkc(store: &'a PropertyStore) -> Self
    {
        Self::new(store, Options::new(Form::Nfkc))
    }

    /// нормализовать только кодпоинты из множества, остальные - копировать без изменений
    pub fn filtered(mut self, filter: &'a CodepointSet) -> Self
    {
        self.filter = Some(filter);
        self
    }

    pub fn options(&self) -> Options
    {
        self.options
    }

    pub fn form(&self) -> Form
    {
        self.options.form
    }

    pub fn store(&self) -> &'a PropertyStore
    {
        self.store
    }

    pub(crate) fn set_form(&mut self, form: Form)
    {
        self.options.form = form;
    }

    /// нормализация строки
    pub fn normalize(&self, text: &str) -> String
    {
        let mut result = String::with_capacity(text.len());

        self.normalize_to(text, &mut result);

        result
    }

    /// нормализация строки с записью результата в конец output
    pub fn normalize_to(&self, text: &str, output: &mut String)
    {
        if self.form() == Form::None {
            output.push_str(text);
            return;
        }

        let mut buffer: Vec<Codepoint> = Vec::with_capacity(18);
        let mut rest = text;

        loop {
            // уже нормализованный префикс копируем как есть
            let prefix = self.normalized_prefix_len(rest);

            output.push_str(&rest[.. prefix]);
            rest = &rest[prefix ..];

            if rest.is_empty() {
                return;
            }

            let end = self.segment_end(rest, 0);

            self.normalize_segment(&rest[.. end], output, &mut buffer);
            rest = &rest[end ..];
        }
    }

    /// нормализация в буфер фиксированного размера. возвращает количество записанных байт.
    /// если буфер мал - в него ничего не записывается, ошибка содержит требуемый размер
    pub fn normalize_into(&self, text: &str, output: &mut [u8]) -> Result<usize, NormalizationError>
    {
        copy_into(&self.normalize(text), output)
    }

    /// быстрая проверка строки
    pub fn quick_check(&self, text: &str) -> QuickCheck
    {
        quick_check::quick_check(self.store, text, self.form(), |code| self.in_scope(code))
    }

    /// нормализована ли строка? полная нормализация выполняется только в случае MAYBE,
    /// начиная с последней границы перед первым сомнительным символом
    pub fn is_normalized(&self, text: &str) -> bool
    {
        match self.quick_check(text) {
            QuickCheck::Yes => true,
            QuickCheck::No => false,
            QuickCheck::Maybe => {
                let rest = &text[self.normalized_prefix_len(text) ..];

                self.normalize(rest) == rest
            }
        }
    }

    /// находится ли строка в формате FCD (независимо от формы нормализатора)
    pub fn is_fcd(&self, text: &str) -> bool
    {
        quick_check::is_fcd(self.store, text, |code| self.in_scope(code))
    }

    /// длина (в байтах) префикса строки, который точно нормализован
    pub fn normalized_prefix_len(&self, text: &str) -> usize
    {
        quick_check::normalized_prefix_len(self.store, text, self.form(), |code| {
            self.in_scope(code)
        })
    }

    /// нормализованная конкатенация двух строк
    pub fn concatenate(&self, left: &str, right: &str) -> String
    {
        let mut result = String::with_capacity(left.len() + right.len());

        self.normalize_to(left, &mut result);
        self.append(&mut result, right);

        result
    }

    /// нормализованная конкатенация в буфер фиксированного размера (см. normalize_into)
    pub fn concatenate_into(
        &self,
        left: &str,
        right: &str,
        output: &mut [u8],
    ) -> Result<usize, NormalizationError>
    {
        copy_into(&self.concatenate(left, right), output)
    }

    /// дописать строку к уже нормализованной строке target. повторно нормализуется только
    /// участок от последней границы target до первой границы дописываемой строки
    pub fn append(&self, target: &mut String, text: &str)
    {
        if text.is_empty() {
            return;
        }

        let joined = match (target.chars().next_back(), text.chars().next()) {
            (Some(last), Some(first)) => !self.is_boundary_between(last, first),
            _ => false,
        };

        if !joined {
            self.normalize_to(text, target);
            return;
        }

        let start = self.segment_start(target, target.len());
        let end = self.segment_end(text, 0);

        let mut window = target.split_off(start);
        window.push_str(&text[.. end]);

        self.normalize_to(&window, target);
        self.normalize_to(&text[end ..], target);
    }

    /// итератор по нормализованным символам строки
    pub fn iter(&self, text: &'a str) -> NormalizingIter<'a>
    {
        NormalizingIter::new(*self, text)
    }

    // разбиение на отрезки

    /// попадает ли кодпоинт в область нормализации?
    #[inline(always)]
    pub(crate) fn in_scope(&self, code: u32) -> bool
    {
        if let Some(filter) = self.filter {
            if !filter.contains(code) {
                return false;
            }
        }

        match self.options.version {
            UnicodeVersion::Default => true,
            UnicodeVersion::LegacyCompat => self.store.legacy_set().contains(code),
        }
    }

    /// есть ли граница нормализации между двумя соседними символами?
    #[inline]
    pub(crate) fn is_boundary_between(&self, previous: char, current: char) -> bool
    {
        let form = self.form();

        if form == Form::None {
            return true;
        }

        let (previous, code) = (u32::from(previous), u32::from(current));

        if !self.in_scope(code) || !self.in_scope(previous) {
            return true;
        }

        code < self.store.yes_below(form) || self.store.has_boundary_before(code, form)
    }

    /// конец отрезка, начинающегося в start: ближайшая граница после start или конец строки
    pub(crate) fn segment_end(&self, text: &str, start: usize) -> usize
    {
        let mut chars = text[start ..].char_indices();

        let mut previous = match chars.next() {
            Some((_, c)) => c,
            None => return text.len(),
        };

        for (offset, c) in chars {
            if self.is_boundary_between(previous, c) {
                return start + offset;
            }

            previous = c;
        }

        text.len()
    }

    /// начало отрезка, заканчивающегося в end: ближайшая граница перед end или 0
    pub(crate) fn segment_start(&self, text: &str, end: usize) -> usize
    {
        let mut chars = text[.. end].char_indices().rev();

        let (mut index, mut current) = match chars.next() {
            Some(entry) => entry,
            None => return 0,
        };

        for (previous_index, previous) in chars {
            if self.is_boundary_between(previous, current) {
                return index;
            }

            index = previous_index;
            current = previous;
        }

        0
    }

    /// нормализация одного отрезка
    pub(crate) fn normalize_segment(
        &self,
        segment: &str,
        output: &mut String,
        buffer: &mut Vec<Codepoint>,
    )
    {
        let form = self.form();

        // отрезок вне области нормализации состоит из одного символа
        let outside = segment.chars().next().is_some_and(|c| !self.in_scope(u32::from(c)));

        let mode = match form.mode() {
            Some(mode) if !outside => mode,
            _ => {
                output.push_str(segment);
                return;
            }
        };

        // FCD: отрезок в правильном порядке копируется, в противном случае - заменяется на NFD
        if form == Form::Fcd && quick_check::is_fcd(self.store, segment, |_| true) {
            output.push_str(segment);
            return;
        }

        buffer.clear();
        decompose(self.store, segment.chars(), mode, buffer);

        if form.is_composing() {
            compose(self.store, buffer, self.options.strategy);
        }

        output.extend(buffer.iter().map(|&codepoint| char::from(codepoint)));
        buffer.clear();
    }
}

/// скопировать результат в буфер целиком или не копировать ничего
fn copy_into(normalized: &str, output: &mut [u8]) -> Result<usize, NormalizationError>
{
    let required = normalized.len();

    match output.get_mut(.. required) {
        Some(target) => {
            target.copy_from_slice(normalized.as_bytes());
            Ok(required)
        }
        None => Err(NormalizationError::BufferTooSmall { required }),
    }
}
