//! Benchmarks for icon composition and grid layout.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use icongrid::extract::ShapeConfig;
use icongrid::{CollectionOptions, Colour, GridLayout, IconCollection, Scheme, Shape, ShapeExtractor};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A sheet of `count` shapes in a 16-wide block.
fn synthetic_source(count: usize) -> ShapeExtractor {
    ShapeExtractor::from_shapes((0..count).map(|i| {
        let (x, y) = ((i % 16) as i32, (i / 16) as i32);
        Shape::new(format!("s{}", i), format!("M {},{} l 4,4 -4,4 z", x * 16 + 2, y * 16 + 2), (x, y))
    }))
}

/// Layered rules: 4 bases, 6 middles and one top layer each.
fn synthetic_scheme(rules: usize) -> Scheme {
    let mut yaml = String::from("node_icons:\n  - group: Bench\n    tags:\n");
    for rule in 0..rules {
        let id = |k: usize| format!("s{}", (rule * 11 + k) % 256);
        let list = |range: std::ops::Range<usize>| range.map(id).collect::<Vec<_>>().join(", ");
        yaml.push_str(&format!(
            "      - tags: {{rule: \"{}\"}}\n        under_icon: [{}]\n        with_icon: [{}]\n        over_icon: [{}]\n",
            rule,
            list(0..4),
            list(4..10),
            id(10)
        ));
    }
    Scheme::parse(&yaml).unwrap()
}

fn bench_extraction(c: &mut Criterion) {
    let svg = load_fixture("icons.svg");
    let config = ShapeConfig::parse(&load_fixture("icons.json")).unwrap();

    c.bench_function("extract_fixture_sheet", |b| {
        b.iter(|| ShapeExtractor::from_svg(black_box(&svg), &config).unwrap())
    });
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    let source = synthetic_source(256);
    let options = CollectionOptions {
        add_unused: true,
        ..CollectionOptions::default()
    };

    for rules in [10, 50] {
        let scheme = synthetic_scheme(rules);
        group.bench_function(format!("from_scheme_{}_rules", rules), |b| {
            b.iter(|| IconCollection::from_scheme(black_box(&scheme), &source, &options))
        });
    }

    let collection = IconCollection::from_scheme(&synthetic_scheme(50), &source, &options);
    group.bench_function("sort", |b| {
        b.iter(|| {
            let mut sorted = collection.clone();
            sorted.sort();
            sorted
        })
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let layout = GridLayout::default();

    group.bench_function("place_2000", |b| b.iter(|| layout.place(black_box(2000))));

    let collection = IconCollection::from_scheme(
        &synthetic_scheme(50),
        &synthetic_source(256),
        &CollectionOptions::default(),
    );
    group.bench_function("grid_svg", |b| {
        b.iter(|| {
            let (document, _) = collection.grid_svg(&layout, Colour::WHITE).unwrap();
            document.to_svg_string()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_composition, bench_layout);
criterion_main!(benches);
