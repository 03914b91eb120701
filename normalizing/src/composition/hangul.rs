use crate::decomposition::hangul::*;

/// кодпоинт хангыль, который может быть скомбинирован с идущим перед ним L или слогом LV
#[derive(Debug, PartialEq)]
enum HangulVT
{
    /// гласная (отступ от начала блока гласных)
    Vowel(u32),
    /// завершающая согласная (отступ от T_BASE, всегда > 0)
    TrailingConsonant(u32),
}

/// скомбинировать чамо хангыль: L + V -> LV, LV + T -> LVT
#[inline(always)]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    match get_vt(second)? {
        HangulVT::Vowel(v) => {
            let l = first.wrapping_sub(HANGUL_L_BASE);

            match l < HANGUL_L_COUNT {
                true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT),
                false => None,
            }
        }
        HangulVT::TrailingConsonant(t) => match is_hangul_lv(first) {
            true => Some(first + t),
            false => None,
        },
    }
}

/// гласная или завершающая согласная чамо?
#[inline(always)]
fn get_vt(code: u32) -> Option<HangulVT>
{
    let v = code.wrapping_sub(HANGUL_V_BASE);

    if v < HANGUL_V_COUNT {
        return Some(HangulVT::Vowel(v));
    }

    // T_BASE означает отсутствие согласной и не может быть скомбинирован
    let t = code.wrapping_sub(HANGUL_T_BASE);

    match t != 0 && t < HANGUL_T_COUNT {
        true => Some(HangulVT::TrailingConsonant(t)),
        false => None,
    }
}
