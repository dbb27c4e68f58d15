//! Benchmarks for the pmp export pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pmp::{decode, encode_png, illustration, rasterize, ColorSelection};

// -- Serialization benchmarks --

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let colors = ColorSelection::default();

    group.bench_function("build_scene", |b| {
        b.iter(|| illustration(black_box(&colors)))
    });

    let doc = illustration(&colors);
    group.bench_function("to_svg", |b| b.iter(|| black_box(&doc).to_svg()));

    group.finish();
}

// -- Decode benchmarks --

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let svg = illustration(&ColorSelection::default()).to_svg();

    group.bench_function("decode_document", |b| {
        b.iter(|| decode(black_box(&svg)).unwrap())
    });

    group.finish();
}

// -- Rasterization benchmarks --

fn bench_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterization");
    group.sample_size(10);

    let doc = illustration(&ColorSelection::default());

    group.bench_function("rasterize_1x", |b| {
        b.iter(|| rasterize(black_box(&doc), 1).unwrap())
    });

    group.bench_function("rasterize_2x", |b| {
        b.iter(|| rasterize(black_box(&doc), 2).unwrap())
    });

    let img = rasterize(&doc, 1).unwrap();
    group.bench_function("encode_png_1x", |b| {
        b.iter(|| encode_png(black_box(&img)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_serialization, bench_decode, bench_rasterization);
criterion_main!(benches);
