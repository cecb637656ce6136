//! Criterion benchmark for rendering large byte arrays

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use assetgen_core::embed::{render_definition, EmbedOptions};

fn bench_render_definition(c: &mut Criterion) {
    let data: Vec<u8> = (0..256 * 1024).map(|i| (i % 251) as u8).collect();
    let opts = EmbedOptions::new();

    c.bench_function("render_definition 256KiB", |b| {
        b.iter(|| render_definition(black_box(&data), &opts))
    });
}

criterion_group!(benches, bench_render_definition);
criterion_main!(benches);
