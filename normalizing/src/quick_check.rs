use crate::data::PropertyStore;
use crate::{Form, QuickCheck};

/// быстрая проверка строки: NO - строка не нормализована, YES - нормализована,
/// MAYBE - требуется нормализация для ответа. кодпоинты вне области нормализации (in_scope)
/// считаются стартерами с положительной проверкой
pub fn quick_check<F>(store: &PropertyStore, text: &str, form: Form, in_scope: F) -> QuickCheck
where
    F: Fn(u32) -> bool,
{
    match form {
        Form::None => return QuickCheck::Yes,
        Form::Fcd => {
            return match is_fcd(store, text, in_scope) {
                true => QuickCheck::Yes,
                false => QuickCheck::No,
            }
        }
        _ => (),
    }

    let yes_below = store.yes_below(form);
    let mut result = QuickCheck::Yes;
    let mut last_ccc = 0;

    for c in text.chars() {
        let code = u32::from(c);

        if code < yes_below || !in_scope(code) {
            last_ccc = 0;
            continue;
        }

        let properties = store.properties(code);

        // нарушен канонический порядок
        if properties.ccc != 0 && last_ccc > properties.ccc {
            return QuickCheck::No;
        }

        // результат - наихудшее значение: NO > MAYBE > YES
        result = result.max(properties.quick_check(form));

        if result == QuickCheck::No {
            return result;
        }

        last_ccc = properties.ccc;
    }

    result
}

/// длина (в байтах) префикса строки, который точно нормализован: проверка даёт YES для всех его
/// символов, а сам префикс заканчивается на границе нормализации
pub fn normalized_prefix_len<F>(store: &PropertyStore, text: &str, form: Form, in_scope: F) -> usize
where
    F: Fn(u32) -> bool,
{
    if form == Form::None {
        return text.len();
    }

    let yes_below = store.yes_below(form);
    let mut last_ccc = 0;
    let mut boundary = 0;

    for (index, c) in text.char_indices() {
        let code = u32::from(c);

        if code < yes_below || !in_scope(code) {
            boundary = index;
            last_ccc = 0;
            continue;
        }

        let properties = store.properties(code);

        if properties.has_boundary_before(form) {
            boundary = index;
        }

        let unordered = match form {
            Form::Fcd => properties.lead != 0 && last_ccc > properties.lead,
            _ => properties.ccc != 0 && last_ccc > properties.ccc,
        };

        if unordered || properties.quick_check(form) != QuickCheck::Yes {
            return boundary;
        }

        last_ccc = match form {
            Form::Fcd => properties.trail,
            _ => properties.ccc,
        };
    }

    text.len()
}

/// находится ли строка в формате FCD: CCC первого кодпоинта канонической декомпозиции символа
/// не меньше CCC последнего кодпоинта декомпозиции предыдущего символа (если первый - не стартер)
pub fn is_fcd<F>(store: &PropertyStore, text: &str, in_scope: F) -> bool
where
    F: Fn(u32) -> bool,
{
    let yes_below = store.yes_below(Form::Fcd);
    let mut previous_trail = 0;

    for c in text.chars() {
        let code = u32::from(c);

        if code < yes_below || !in_scope(code) {
            previous_trail = 0;
            continue;
        }

        let properties = store.properties(code);

        if properties.lead != 0 && previous_trail > properties.lead {
            return false;
        }

        previous_trail = properties.trail;
    }

    true
}
