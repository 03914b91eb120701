use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

mod group;

group!("./../test_data/texts", nfc, "nfc", "icu", ComposingNormalizer::new_nfc());
group!("./../test_data/texts", nfkc, "nfkc", "icu", ComposingNormalizer::new_nfkc());
group!("./../test_data/texts", nfd, "nfd", "icu", DecomposingNormalizer::new_nfd());
group!("./../test_data/texts", nfkd, "nfkd", "icu", DecomposingNormalizer::new_nfkd());

criterion_group!(benches, nfc, nfkc, nfd, nfkd);
criterion_main!(benches);
