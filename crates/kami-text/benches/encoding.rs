//! Benchmarks for color-code encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kami_text::{encode, FormattedText};

/// Plain chat line, no escapes
const PLAIN: &str = "The quick brown fox jumps over the lazy dog";

/// Badge-prefixed chat line
const BADGE: &str = "&7[&aKAMI&7] &rPrefix set to &b.";

/// Dense formatting with unmatched ampersands mixed in
const DENSE: &str = "&a&l&o&m&k&s&r & &g &1&2&3&4&5&6&7&8&9&0&b&c&d&e&f text & more & &&&a";

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encoding");

    group.bench_function("plain", |b| b.iter(|| black_box(encode(black_box(PLAIN)))));

    group.bench_function("badge", |b| b.iter(|| black_box(encode(black_box(BADGE)))));

    group.bench_function("dense", |b| b.iter(|| black_box(encode(black_box(DENSE)))));

    group.bench_function("formatted_text_clone", |b| {
        let text = FormattedText::new(BADGE);
        b.iter(|| black_box(text.clone()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_encoding);
criterion_main!(benches);
