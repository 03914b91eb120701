#[macro_use]
extern crate lazy_static;

use unicode_normalizing::{
    CodepointSet, CustomSource, Form, Mode, NormalizationError, Normalizer, Options,
    PropertyStore, QuickCheck, Strategy, UcdSource, UnicodeVersion,
};

lazy_static! {
    static ref STORE: PropertyStore = PropertyStore::new();

    /// частная форма: U+E000 = A + U+0301, U+E003 = U+E000 + U+0302,
    /// U+E001 <-> U+E002 - цикл, U+E004 удаляется
    static ref CUSTOM: PropertyStore = PropertyStore::from_source(
        &CustomSource::new()
            .with_ccc(0x0301, 230)
            .with_ccc(0x0302, 230)
            .with_ccc(0x0316, 220)
            .with_canonical(0xE000, &[0x41, 0x0301])
            .with_canonical(0xE001, &[0xE002])
            .with_canonical(0xE002, &[0xE001])
            .with_canonical(0xE003, &[0xE000, 0x0302])
            .with_canonical(0xE004, &[])
            .with_compatibility(0xE005, &[0xE000, 0x42])
            .with_canonical(0xE006, &[0x42, 0x0301])
            .with_exclusion(0xE006)
    )
    .unwrap();
}

#[test]
fn pluggable_data()
{
    let nfc = CUSTOM.normalizer(Options::new(Form::Nfc));
    let nfd = CUSTOM.normalizer(Options::new(Form::Nfd));
    let nfkd = CUSTOM.normalizer(Options::new(Form::Nfkd));

    assert_eq!(nfc.normalize("A\u{0301}"), "\u{E000}");
    assert_eq!(nfd.normalize("\u{E000}"), "A\u{0301}");

    // полная декомпозиция с последующим упорядочиванием
    assert_eq!(nfd.normalize("\u{E003}"), "A\u{0301}\u{0302}");
    assert_eq!(nfd.normalize("\u{E003}\u{0316}"), "A\u{0316}\u{0301}\u{0302}");
    assert_eq!(nfc.normalize("\u{E003}"), "\u{E003}");
    assert_eq!(nfc.normalize("A\u{0301}\u{0302}"), "\u{E003}");
    assert_eq!(nfc.normalize("A\u{0316}\u{0301}\u{0302}"), "\u{E003}\u{0316}");

    // U+0301 блокирован кодпоинтом U+0302 с тем же классом
    assert_eq!(nfc.normalize("A\u{0302}\u{0301}"), "A\u{0302}\u{0301}");

    // декомпозиция в пустую строку
    assert_eq!(nfd.normalize("a\u{E004}b"), "ab");

    // декомпозиция совместимости
    assert_eq!(nfkd.normalize("\u{E005}"), "A\u{0301}B");
    assert_eq!(nfd.normalize("\u{E005}"), "\u{E005}");

    // исключение не комбинируется
    assert_eq!(nfd.normalize("\u{E006}"), "B\u{0301}");
    assert_eq!(nfc.normalize("\u{E006}"), "B\u{0301}");
    assert!(CUSTOM.is_excluded(0xE006));

    // в собственных данных нет ни композиций, ни декомпозиций UCD
    assert_eq!(nfd.normalize("\u{00C0}"), "\u{00C0}");
    assert_eq!(CUSTOM.compose_pair(0x41, 0x0300), None);
    assert_eq!(CUSTOM.compose_pair(0x1100, 0x1161), Some(0xAC00));
}

#[test]
fn derived_quick_checks()
{
    assert_eq!(CUSTOM.quick_check(0xE000, Form::Nfd), QuickCheck::No);
    assert_eq!(CUSTOM.quick_check(0xE000, Form::Nfc), QuickCheck::Yes);
    assert_eq!(CUSTOM.quick_check(0x0301, Form::Nfc), QuickCheck::Maybe);
    assert_eq!(CUSTOM.quick_check(0xE006, Form::Nfc), QuickCheck::No);
    assert_eq!(CUSTOM.quick_check(0xE005, Form::Nfc), QuickCheck::Yes);
    assert_eq!(CUSTOM.quick_check(0xE005, Form::Nfkc), QuickCheck::No);
    assert_eq!(CUSTOM.quick_check(0x1161, Form::Nfc), QuickCheck::Maybe);
}

#[test]
fn cyclic_decompositions_are_ignored()
{
    let nfd = CUSTOM.normalizer(Options::new(Form::Nfd));

    assert_eq!(nfd.normalize("\u{E001}\u{E002}"), "\u{E001}\u{E002}");
    assert_eq!(CUSTOM.decomposition(0xE001, Mode::Canonical), None);
}

#[test]
fn cyclic_pairs_do_not_compose()
{
    let store = PropertyStore::from_source(
        &CustomSource::new()
            .with_ccc(0x0301, 230)
            .with_canonical(0xE001, &[0xE002, 0x0301])
            .with_canonical(0xE002, &[0xE001, 0x0301]),
    )
    .unwrap();

    let nfc = store.normalizer(Options::new(Form::Nfc));
    let nfd = store.normalizer(Options::new(Form::Nfd));

    assert_eq!(store.compose_pair(0xE001, 0x0301), None);
    assert_eq!(store.compose_pair(0xE002, 0x0301), None);
    assert_eq!(store.decomposition(0xE002, Mode::Canonical), None);

    assert_eq!(nfc.normalize("\u{E002}\u{0301}"), "\u{E002}\u{0301}");
    assert_eq!(nfd.normalize("\u{E001}"), "\u{E001}");
    assert!(nfc.is_normalized("\u{E001}\u{0301}"));
}

#[test]
fn builds_without_panicking()
{
    assert!(PropertyStore::from_source(&UcdSource).is_ok());

    // цикл из синглтонов поверх встроенных данных
    let store = PropertyStore::from_source(
        &CustomSource::overlay(UcdSource)
            .with_canonical(0xE001, &[0xE002])
            .with_canonical(0xE002, &[0xE001]),
    )
    .unwrap();

    for form in Form::PRIMARY {
        let normalizer = store.normalizer(Options::new(form));

        assert_eq!(normalizer.normalize("\u{E001}\u{E002}"), "\u{E001}\u{E002}", "{:?}", form);
    }

    assert_eq!(store.normalizer(Options::new(Form::Nfc)).normalize("A\u{0300}"), "\u{00C0}");
}

#[test]
fn long_mappings_only_decompose()
{
    let store = PropertyStore::from_source(
        &CustomSource::new()
            .with_ccc(0x0301, 230)
            .with_ccc(0x0302, 230)
            .with_canonical(0xE007, &[0x41, 0x0301, 0x0302]),
    )
    .unwrap();

    let nfc = store.normalizer(Options::new(Form::Nfc));
    let nfd = store.normalizer(Options::new(Form::Nfd));

    assert_eq!(nfd.normalize("\u{E007}"), "A\u{0301}\u{0302}");
    assert_eq!(nfc.normalize("\u{E007}"), "A\u{0301}\u{0302}");
    assert_eq!(nfc.normalize("A\u{0301}\u{0302}"), "A\u{0301}\u{0302}");
    assert_eq!(store.compose_pair(0x41, 0x0301), None);
    assert!(store.is_excluded(0xE007));
    assert_eq!(store.quick_check(0xE007, Form::Nfc), QuickCheck::No);
}

#[test]
fn invalid_data_is_rejected()
{
    let source = CustomSource::new().with_canonical(0xE000, &[0x41, 0x110000]);

    assert_eq!(
        PropertyStore::from_source(&source).err(),
        Some(NormalizationError::InvalidCodepoint(0x110000))
    );

    let source = CustomSource::new().with_compatibility(0xE000, &[0xD800]);

    assert_eq!(
        PropertyStore::from_source(&source).err(),
        Some(NormalizationError::InvalidCodepoint(0xD800))
    );
}

#[test]
fn overlay_on_builtin_data()
{
    let store = PropertyStore::from_source(
        &CustomSource::overlay(UcdSource).with_canonical(0xE000, &[0x41, 0x0301]),
    )
    .unwrap();

    let nfc = store.normalizer(Options::new(Form::Nfc));

    assert_eq!(nfc.normalize("A\u{0300}"), "\u{00C0}");
    assert_eq!(nfc.normalize("\u{E000}"), "\u{00C1}");
    assert_eq!(nfc.normalize("A\u{0301}"), "\u{00C1}");
}

#[test]
fn filtered_normalization()
{
    let without_grave = CodepointSet::from_iter([0x0300]).complement();
    let without_c0 = CodepointSet::from_iter([0xC0]).complement();

    let nfc = Normalizer::nfc(&STORE).filtered(&without_grave);
    let nfd = Normalizer::nfd(&STORE).filtered(&without_c0);

    assert_eq!(nfc.normalize("A\u{0300}"), "A\u{0300}");
    assert_eq!(nfc.normalize("A\u{0301}"), "\u{00C1}");
    assert_eq!(nfc.quick_check("A\u{0300}"), QuickCheck::Yes);

    assert_eq!(nfd.normalize("\u{00C0}\u{00C8}"), "\u{00C0}E\u{0300}");
    assert!(nfd.is_normalized("\u{00C0}"));
    assert!(!nfd.is_normalized("\u{00C8}"));

    let iterated: String = nfd.iter("\u{00C0}\u{00C8}\u{00C0}").collect();

    assert_eq!(iterated, "\u{00C0}E\u{0300}\u{00C0}");
    assert_eq!(nfd.concatenate("\u{00C0}", "\u{0316}"), "\u{00C0}\u{0316}");
}

#[test]
fn legacy_unicode_version()
{
    let legacy = STORE.normalizer(Options::new(Form::Nfd).with_version(UnicodeVersion::LegacyCompat));
    let current = STORE.normalizer(Options::new(Form::Nfd));

    // балийское письмо появилось в Unicode 5.0
    assert_eq!(current.normalize("\u{1B06}"), "\u{1B05}\u{1B35}");
    assert_eq!(legacy.normalize("\u{1B06}"), "\u{1B06}");
    assert_eq!(legacy.normalize("\u{00C0}\u{1B06}"), "A\u{0300}\u{1B06}");
    assert!(legacy.is_normalized("\u{1B06}"));

    // совместимый иероглиф U+FA70 добавлен в Unicode 4.1 внутри блока, существовавшего в 3.2
    assert_eq!(current.normalize("\u{FA70}"), "\u{4E26}");
    assert_eq!(legacy.normalize("\u{FA70}"), "\u{FA70}");
    assert_eq!(legacy.normalize("\u{FA30}"), "\u{4FAE}");

    assert!(STORE.legacy_set().contains(0x00C0));
    assert!(!STORE.legacy_set().contains(0x1B06));
    assert!(!STORE.legacy_set().contains(0xFA70));
}

#[test]
fn option_names()
{
    assert_eq!("NFKC".parse::<Form>(), Ok(Form::Nfkc));
    assert_eq!(" nfd ".parse::<Form>(), Ok(Form::Nfd));
    assert_eq!("fcd".parse::<Form>(), Ok(Form::Fcd));
    assert_eq!("none".parse::<Form>(), Ok(Form::None));
    assert_eq!(
        "nfx".parse::<Form>(),
        Err(NormalizationError::UnsupportedForm("nfx".to_owned()))
    );

    assert_eq!("fcc".parse::<Strategy>(), Ok(Strategy::Contiguous));
    assert_eq!("3.2".parse::<UnicodeVersion>(), Ok(UnicodeVersion::LegacyCompat));

    let options = Options::default();

    assert_eq!(options.form, Form::Nfc);
    assert_eq!(options.version, UnicodeVersion::Default);
    assert_eq!(options.strategy, Strategy::Standard);
}
