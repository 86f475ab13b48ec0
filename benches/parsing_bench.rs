use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pkphonenumber::PHONE_NUMBER_UTIL;

use phonenumber::{self as rlp, country::Id};

/// A mix of the shapes seen in real input: national, international with
/// and without separators, IDD prefix, bare country code and Urdu digits.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        "0300 1234567",
        "+92 345 1234567",
        "+923111234567",
        "0092-333-123-4567",
        "923551234567",
        "(0339) 123.4567",
        "۰۳۰۰۱۲۳۴۵۶۷",
        "02001234567",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("pkphonenumber: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number_str));
            }
        })
    });

    group.bench_function("pkphonenumber: validate()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.validate(black_box(number_str));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(Id::PK)), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
