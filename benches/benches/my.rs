#[macro_use]
extern crate lazy_static;

use criterion::{criterion_group, criterion_main, Criterion};
use unicode_normalizing::{Form, Options, PropertyStore};

mod group;

lazy_static! {
    static ref STORE: PropertyStore = PropertyStore::new();
}

group!("./../test_data/texts", nfc, "nfc", "my", STORE.normalizer(Options::new(Form::Nfc)));
group!("./../test_data/texts", nfkc, "nfkc", "my", STORE.normalizer(Options::new(Form::Nfkc)));
group!("./../test_data/texts", nfd, "nfd", "my", STORE.normalizer(Options::new(Form::Nfd)));
group!("./../test_data/texts", nfkd, "nfkd", "my", STORE.normalizer(Options::new(Form::Nfkd)));

criterion_group!(benches, nfc, nfkc, nfd, nfkd);
criterion_main!(benches);
