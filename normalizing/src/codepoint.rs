/// кодпоинт для декомпозиции / композиции в виде u32, где CCC хранится в младших битах
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        // в буфер попадают только скалярные значения Unicode - из &str или из данных хранилища,
        // которые проверяются при его построении
        char::from_u32(value.code()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{{ code: U+{:04X}, ccc: {} }}", self.code(), self.ccc())
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    #[inline(always)]
    pub fn from_baked(value: u32) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self(code << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        Self(code << 8)
    }

    /// значение для хранения в таблице расширений
    #[inline(always)]
    pub fn baked(&self) -> u32
    {
        self.0
    }
}
