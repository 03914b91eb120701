use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_normalizing::{Form, Normalizer, PropertyStore};

/// для каждой формы: наш нормализатор и соответствующий нормализатор ICU
macro_rules! for_each_form {
    ($store: expr, |$form: ident, $my: ident, $icu: ident| $body: block) => {{
        let store: &PropertyStore = $store;

        {
            let $form = Form::Nfd;
            let $my = Normalizer::nfd(store);
            let $icu = DecomposingNormalizer::new_nfd();
            $body
        }
        {
            let $form = Form::Nfkd;
            let $my = Normalizer::nfkd(store);
            let $icu = DecomposingNormalizer::new_nfkd();
            $body
        }
        {
            let $form = Form::Nfc;
            let $my = Normalizer::nfc(store);
            let $icu = ComposingNormalizer::new_nfc();
            $body
        }
        {
            let $form = Form::Nfkc;
            let $my = Normalizer::nfkc(store);
            let $icu = ComposingNormalizer::new_nfkc();
            $body
        }
    }};
}

/// тексты на разных языках
#[test]
fn texts()
{
    let store = PropertyStore::new();
    let files = crate::data::files();

    assert!(!files.is_empty());

    for_each_form!(&store, |form, my, icu| {
        for (name, text) in files.iter() {
            let expected = icu.normalize(text);

            assert_eq!(my.normalize(text), expected, "{:?}, {}", form, name);
            assert_eq!(my.is_normalized(text), icu.is_normalized(text), "{:?}, {}", form, name);
            assert!(my.is_normalized(&expected), "{:?}, {}", form, name);

            let iterated: String = my.iter(text).collect();
            assert_eq!(iterated, expected, "{:?}, iter, {}", form, name);
        }
    });
}

/// каждый кодпоинт: отдельно, перед нестартером и после стартера
#[test]
fn codepoints()
{
    let store = PropertyStore::new();

    for_each_form!(&store, |form, my, icu| {
        for c in (0 ..= 0x10FFFF).filter_map(char::from_u32) {
            for text in [c.to_string(), format!("{}\u{0301}", c), format!("a{}", c)] {
                assert_eq!(
                    my.normalize(&text),
                    icu.normalize(&text),
                    "{:?}, U+{:04X}",
                    form,
                    u32::from(c)
                );
                assert_eq!(
                    my.is_normalized(&text),
                    icu.is_normalized(&text),
                    "{:?}, U+{:04X}",
                    form,
                    u32::from(c)
                );
            }
        }
    });
}

/// склейка нормализованных строк
#[test]
fn concatenation()
{
    let store = PropertyStore::new();
    let files = crate::data::files();

    for_each_form!(&store, |form, my, icu| {
        for (name, text) in files.iter() {
            let middle = text.char_indices().map(|(i, _)| i).nth(text.chars().count() / 2);
            let (left, right) = text.split_at(middle.unwrap_or(0));

            assert_eq!(my.concatenate(left, right), icu.normalize(text), "{:?}, {}", form, name);
        }
    });
}
