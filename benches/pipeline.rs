//! Benchmarks for the tones pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tones::{create_palette, ThemeFile};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

fn bench_theme(c: &mut Criterion) {
    let mut group = c.benchmark_group("theme");

    let source = load_fixture("theme.tones.yaml");
    let theme = ThemeFile::parse(&source).unwrap();
    let (input, options) = theme.compile().unwrap();

    group.bench_function("parse", |b| {
        b.iter(|| ThemeFile::parse(black_box(&source)).unwrap())
    });

    group.bench_function("compile", |b| b.iter(|| black_box(&theme).compile().unwrap()));

    group.bench_function("create_palette", |b| {
        b.iter(|| create_palette(black_box(&input), black_box(&options)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_theme);
criterion_main!(benches);
