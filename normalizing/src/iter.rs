use log::trace;

use crate::codepoint::Codepoint;
use crate::{Form, Normalizer};

/// двунаправленный итератор по нормализованным символам строки.
///
/// исходная строка нормализуется отрезками (от границы до границы нормализации), текущий отрезок
/// хранится в буфере. клонирование копирует всё состояние, клоны не зависят друг от друга
#[derive(Debug, Clone)]
pub struct NormalizingIter<'a>
{
    normalizer: Normalizer<'a>,
    text: &'a str,
    /// начало текущего отрезка в исходной строке
    start: usize,
    /// конец текущего отрезка
    end: usize,
    /// нормализованный отрезок
    buffer: Vec<char>,
    /// позиция в буфере: символ, который вернёт next()
    position: usize,
}

impl<'a> NormalizingIter<'a>
{
    pub fn new(normalizer: Normalizer<'a>, text: &'a str) -> Self
    {
        Self {
            normalizer,
            text,
            start: 0,
            end: 0,
            buffer: Vec::new(),
            position: 0,
        }
    }

    /// текущий символ (тот, который вернёт next()), без перемещения
    pub fn current(&mut self) -> Option<char>
    {
        if self.position >= self.buffer.len() && !self.load_next() {
            return None;
        }

        self.buffer.get(self.position).copied()
    }

    /// предыдущий символ с перемещением назад
    pub fn previous(&mut self) -> Option<char>
    {
        if self.position == 0 && !self.load_previous() {
            return None;
        }

        self.position -= 1;
        self.buffer.get(self.position).copied()
    }

    /// первый символ нормализованной строки
    pub fn first_char(&mut self) -> Option<char>
    {
        self.reset();
        self.next()
    }

    /// последний символ нормализованной строки; итератор оказывается перед ним
    pub fn last_char(&mut self) -> Option<char>
    {
        self.jump(self.text.len());
        self.previous()
    }

    /// позиция в исходной строке: начало текущего отрезка, или его конец,
    /// если все символы отрезка уже пройдены
    pub fn index(&self) -> usize
    {
        match self.position < self.buffer.len() {
            true => self.start,
            false => self.end,
        }
    }

    /// перейти к ближайшей границе нормализации в исходной строке, не превышающей index
    pub fn set_index(&mut self, index: usize)
    {
        let text = self.text;
        let mut index = index.min(text.len());

        while !text.is_char_boundary(index) {
            index -= 1;
        }

        let boundary = match (text[.. index].chars().next_back(), text[index ..].chars().next()) {
            (Some(previous), Some(current))
                if !self.normalizer.is_boundary_between(previous, current) =>
            {
                self.normalizer.segment_start(text, index)
            }
            _ => index,
        };

        trace!("set_index: {} -> chunk boundary {}", index, boundary);

        self.jump(boundary);
    }

    /// в начало строки
    pub fn reset(&mut self)
    {
        self.jump(0);
    }

    /// новая исходная строка, итератор - в её начале
    pub fn set_text(&mut self, text: &'a str)
    {
        self.text = text;
        self.reset();
    }

    /// сменить форму нормализации. позиция сохраняется (с точностью до границы новой формы)
    pub fn set_form(&mut self, form: Form)
    {
        let index = self.index();

        self.normalizer.set_form(form);
        self.set_index(index);
    }

    pub fn form(&self) -> Form
    {
        self.normalizer.form()
    }

    /// установить позицию на границу отрезков, сбросив буфер
    fn jump(&mut self, index: usize)
    {
        self.start = index;
        self.end = index;
        self.buffer.clear();
        self.position = 0;
    }

    /// нормализовать отрезок исходной строки в буфер
    fn fill(&mut self, start: usize, end: usize)
    {
        let mut normalized = String::with_capacity(end - start);
        let mut scratch: Vec<Codepoint> = Vec::new();

        self.normalizer
            .normalize_segment(&self.text[start .. end], &mut normalized, &mut scratch);

        self.start = start;
        self.end = end;
        self.buffer.clear();
        self.buffer.extend(normalized.chars());
    }

    /// загрузить следующий непустой отрезок. false - достигнут конец строки
    fn load_next(&mut self) -> bool
    {
        while self.end < self.text.len() {
            let start = self.end;
            let end = self.normalizer.segment_end(self.text, start);

            self.fill(start, end);
            self.position = 0;

            if !self.buffer.is_empty() {
                return true;
            }
        }

        false
    }

    /// загрузить предыдущий непустой отрезок. false - достигнуто начало строки
    fn load_previous(&mut self) -> bool
    {
        while self.start > 0 {
            let end = self.start;
            let start = self.normalizer.segment_start(self.text, end);

            self.fill(start, end);
            self.position = self.buffer.len();

            if !self.buffer.is_empty() {
                return true;
            }
        }

        false
    }
}

impl<'a> Iterator for NormalizingIter<'a>
{
    type Item = char;

    fn next(&mut self) -> Option<char>
    {
        if self.position >= self.buffer.len() && !self.load_next() {
            return None;
        }

        let c = self.buffer.get(self.position).copied();
        self.position += 1;

        c
    }
}
