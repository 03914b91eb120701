// в блоке чамо (U+1100..U+11FF) могут быть скомбинированы кодпоинты:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные)
// U+11A7 (T_BASE) - "отсутствие завершающей согласной", сам по себе не комбинируется

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// кодпоинт, предшествующий блоку завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше - с учётом отсутствия согласной)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// является ли кодпоинт слогом хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// слог LV (без завершающей согласной)?
#[inline(always)]
pub fn is_hangul_lv(code: u32) -> bool
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    s < HANGUL_S_COUNT && s % HANGUL_T_COUNT == 0
}

/// ведущая согласная чамо?
#[inline(always)]
pub fn is_hangul_l(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_L_BASE) < HANGUL_L_COUNT
}

/// гласная чамо?
#[inline(always)]
pub fn is_hangul_v(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_V_BASE) < HANGUL_V_COUNT
}

/// завершающая согласная чамо? T_BASE к ним не относится
#[inline(always)]
pub fn is_hangul_t(code: u32) -> bool
{
    let t = code.wrapping_sub(HANGUL_T_BASE);

    t != 0 && t < HANGUL_T_COUNT
}

/// декомпозиция слога хангыль на 2 или 3 чамо, все они - стартеры
#[inline(always)]
pub fn decompose_hangul(code: u32) -> Option<(u32, u32, Option<u32>)>
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    if s >= HANGUL_S_COUNT {
        return None;
    }

    let l = HANGUL_L_BASE + s / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    Some((
        l,
        v,
        match t {
            0 => None,
            _ => Some(HANGUL_T_BASE + t),
        },
    ))
}
