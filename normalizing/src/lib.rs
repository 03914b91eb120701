//! нормализация Unicode: формы NFC, NFD, NFKC, NFKD, а также FCD.
//!
//! все операции выполняются с явно созданным хранилищем свойств ([`PropertyStore`]),
//! которое строится один раз и передаётся нормализаторам по ссылке:
//!
//! ```
//! use unicode_normalizing::{Form, Options, PropertyStore};
//!
//! let store = PropertyStore::new();
//! let nfc = store.normalizer(Options::new(Form::Nfc));
//!
//! assert_eq!(nfc.normalize("A\u{0316}\u{0300}"), "\u{00C0}\u{0316}");
//! assert!(nfc.is_normalized("\u{00C0}"));
//! ```

pub use data::{CodepointRecord, CustomSource, DataSource, PropertyStore, UcdSource};
pub use error::NormalizationError;
pub use iter::NormalizingIter;
pub use normalizer::Normalizer;
pub use options::{Form, Mode, Options, QuickCheck, Strategy, UnicodeVersion};
pub use set::CodepointSet;

mod codepoint;
mod composition;
mod data;
mod decomposition;
mod error;
mod iter;
mod normalizer;
mod options;
mod quick_check;
mod set;

/// максимальная глубина рекурсивной декомпозиции данных источника
pub use data::build::MAX_DECOMPOSITION_DEPTH;
