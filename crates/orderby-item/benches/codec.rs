use criterion::{criterion_group, criterion_main, Criterion};
use orderby_item::codec;
use std::hint::black_box;

fn bench_decode(c: &mut Criterion) {
    let samples = [
        ("number", r#"{"item": 1234.5}"#),
        ("string", r#"{"item": "2024-01-01T00:00:00Z"}"#),
        ("undefined", "{}"),
    ];
    let mut group = c.benchmark_group("decode");
    for (name, text) in samples {
        group.bench_function(name, |b| b.iter(|| codec::decode(black_box(text))));
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let item = codec::decode(r#"{"item": "partition-key-0042"}"#).unwrap();
    c.bench_function("encode/string", |b| b.iter(|| codec::encode(black_box(&item))));
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
