use crate::{Form, QuickCheck};

/// NFD_QC = No
pub const QC_NFD_NO: u32 = 1 << 0;
/// NFKD_QC = No
pub const QC_NFKD_NO: u32 = 1 << 1;
/// NFC_QC = No
pub const QC_NFC_NO: u32 = 1 << 2;
/// NFC_QC = Maybe
pub const QC_NFC_MAYBE: u32 = 1 << 3;
/// NFKC_QC = No
pub const QC_NFKC_NO: u32 = 1 << 4;
/// NFKC_QC = Maybe
pub const QC_NFKC_MAYBE: u32 = 1 << 5;
/// исключение композиции (Full_Composition_Exclusion)
pub const EXCLUDED: u32 = 1 << 6;
/// может быть скомбинирован со следующим кодпоинтом
pub const COMBINES_FORWARD: u32 = 1 << 7;
/// может быть скомбинирован с предыдущим кодпоинтом
pub const COMBINES_BACKWARD: u32 = 1 << 8;

// флаги границ хранятся инвертированными: кодпоинт, отсутствующий в таблице (нулевое значение),
// является инертным стартером для всех форм. 4 бита на группу - NFD, NFKD, NFC, NFKC

/// нет границы перед кодпоинтом
pub const NO_BOUNDARY_BEFORE_SHIFT: u32 = 9;
/// нет границы после кодпоинта
pub const NO_BOUNDARY_AFTER_SHIFT: u32 = 13;
/// кодпоинт не инертен
pub const NOT_INERT_SHIFT: u32 = 17;

/// значение таблицы свойств для одного кодпоинта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Properties
{
    /// класс комбинирования
    pub ccc: u8,
    /// CCC первого кодпоинта канонической декомпозиции
    pub lead: u8,
    /// CCC последнего кодпоинта канонической декомпозиции
    pub trail: u8,
    /// флаги быстрых проверок, композиции и границ
    pub flags: u32,
    /// номер записи в таблице декомпозиций, 0 - декомпозиции нет
    pub slot: u16,
    /// сжатая информация о композициях, в которых кодпоинт участвует первым
    pub combining: u16,
}

impl Properties
{
    #[inline(always)]
    pub fn has(&self, flag: u32) -> bool
    {
        self.flags & flag != 0
    }

    /// значение быстрой проверки для формы
    #[inline(always)]
    pub fn quick_check(&self, form: Form) -> QuickCheck
    {
        let (no, maybe) = match form {
            Form::Nfd => (QC_NFD_NO, 0),
            Form::Nfkd => (QC_NFKD_NO, 0),
            Form::Nfc => (QC_NFC_NO, QC_NFC_MAYBE),
            Form::Nfkc => (QC_NFKC_NO, QC_NFKC_MAYBE),
            Form::Fcd | Form::None => return QuickCheck::Yes,
        };

        match self.flags {
            flags if flags & no != 0 => QuickCheck::No,
            flags if flags & maybe != 0 => QuickCheck::Maybe,
            _ => QuickCheck::Yes,
        }
    }

    #[inline(always)]
    pub fn has_boundary_before(&self, form: Form) -> bool
    {
        self.boundary_flag(form, NO_BOUNDARY_BEFORE_SHIFT)
    }

    #[inline(always)]
    pub fn has_boundary_after(&self, form: Form) -> bool
    {
        self.boundary_flag(form, NO_BOUNDARY_AFTER_SHIFT)
    }

    #[inline(always)]
    pub fn is_inert(&self, form: Form) -> bool
    {
        self.boundary_flag(form, NOT_INERT_SHIFT)
    }

    #[inline(always)]
    fn boundary_flag(&self, form: Form, shift: u32) -> bool
    {
        match form.index() {
            Some(index) => self.flags & (1 << (shift + index as u32)) == 0,
            None => true,
        }
    }
}
