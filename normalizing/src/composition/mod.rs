use crate::codepoint::Codepoint;
use crate::data::PropertyStore;
use crate::Strategy;

pub mod hangul;
pub mod pairs;

/// стартер, с которым комбинируются следующие за ним кодпоинты
#[derive(Clone, Copy)]
struct Starter
{
    /// позиция в буфере
    position: usize,
    code: u32,
    /// сжатая информация о композициях (см. CodepointCombining)
    combining: u16,
}

/// каноническая композиция декомпозированного и упорядоченного буфера на месте.
///
/// кодпоинт комбинируется с последним стартером, если он не заблокирован: между ними нет
/// нескомбинированных кодпоинтов, или CCC последнего из них не равен 0 и строго меньше CCC кодпоинта.
/// при стратегии Contiguous любой нескомбинированный кодпоинт прекращает композицию для стартера
pub fn compose(store: &PropertyStore, buffer: &mut Vec<Codepoint>, strategy: Strategy)
{
    let mut starter: Option<Starter> = None;
    // CCC последнего нескомбинированного кодпоинта после стартера
    let mut last_ccc: Option<u8> = None;
    let mut write = 0;

    for read in 0 .. buffer.len() {
        let codepoint = buffer[read];
        let ccc = codepoint.ccc();

        if let Some(current) = starter {
            let blocked = match last_ccc {
                None => false,
                Some(last) => strategy == Strategy::Contiguous || last == 0 || last >= ccc,
            };

            if !blocked {
                if let Some((code, combining)) =
                    store.combine(current.code, current.combining, codepoint.code())
                {
                    buffer[current.position] = Codepoint::from_code_and_ccc(code, store.ccc(code));
                    starter = Some(Starter {
                        position: current.position,
                        code,
                        combining,
                    });

                    continue;
                }
            }
        }

        buffer[write] = codepoint;

        match ccc {
            0 => {
                starter = Some(Starter {
                    position: write,
                    code: codepoint.code(),
                    combining: store.properties(codepoint.code()).combining,
                });
                last_ccc = None;
            }
            _ => last_ccc = Some(ccc),
        }

        write += 1;
    }

    buffer.truncate(write);
}
