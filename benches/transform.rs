//! Benchmarks for the tokmap transform.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use tokmap::{map_dictionary_value, Dictionary, FieldPriority, Platform, RecognizedFields};

fn platform() -> Platform {
    Platform::new(RecognizedFields::new([
        "value",
        "value_darkMode",
        "value_hiContrast",
    ]))
}

/// Build a dictionary of `groups` groups with `tokens` tokens each, every
/// token carrying a base value, a dark mode alternate, and provenance.
fn build_dictionary(groups: usize, tokens: usize) -> Dictionary {
    let mut properties = serde_json::Map::new();
    let mut all = Vec::new();

    for g in 0..groups {
        let mut group = serde_json::Map::new();
        for t in 0..tokens {
            let token = json!({
                "name": format!("color-{}-{}", g, t),
                "value": "#222222",
                "value_darkMode": "#dddddd",
                "original": {"value": "#222222"},
            });
            all.push(token.clone());
            group.insert(format!("token{}", t), token);
        }
        properties.insert(format!("group{}", g), Value::Object(group));
    }

    Dictionary::from_value(json!({
        "allProperties": all,
        "properties": properties,
    }))
    .unwrap()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let small = build_dictionary(4, 8);
    let large = build_dictionary(32, 32);
    let platform = platform();

    let base = FieldPriority::from("value");
    let dark = FieldPriority::new(["value_darkMode", "value"]);
    let disabled = FieldPriority::default();

    group.bench_function("map_small_base", |b| {
        b.iter(|| map_dictionary_value(black_box(&small), &base, &platform).unwrap())
    });

    group.bench_function("map_small_dark", |b| {
        b.iter(|| map_dictionary_value(black_box(&small), &dark, &platform).unwrap())
    });

    group.bench_function("map_large_base", |b| {
        b.iter(|| map_dictionary_value(black_box(&large), &base, &platform).unwrap())
    });

    group.bench_function("identity_large", |b| {
        b.iter(|| map_dictionary_value(black_box(&large), &disabled, &platform).unwrap())
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let wire = build_dictionary(32, 32).to_value();
    let text = serde_json::to_string(&wire).unwrap();

    group.bench_function("dictionary_from_value", |b| {
        b.iter(|| Dictionary::from_value(black_box(wire.clone())).unwrap())
    });

    group.bench_function("dictionary_from_json_str", |b| {
        b.iter(|| Dictionary::from_json_str(black_box(&text)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_transform, bench_parsing);
criterion_main!(benches);
