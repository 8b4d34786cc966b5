// Performance benchmarks for repscore matrix scoring and aggregation
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use repscore::{Inclusivity, Item, Person, ScorerKind, ScorerRegistry, VectorBuilder};
use serde_json::json;

fn build_registry() -> ScorerRegistry {
    ScorerRegistry::builder()
        .attribute("gender", ScorerKind::ExactMatch)
        .attribute("skin", ScorerKind::Ratio { invert: false })
        .attribute("age", ScorerKind::DistanceNormalized { max_range: 100.0 })
        .build()
        .unwrap()
}

fn generate_items(count: usize) -> Vec<Item> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            Item::from_value(json!({
                "gender": if rng.random_bool(0.5) { 1.0 } else { 0.0 },
                "skin": rng.random_range(1..=10),
                "age": rng.random_range(18..=90),
            }))
            .unwrap()
        })
        .collect()
}

fn benchmark_score_matrix(c: &mut Criterion) {
    let registry = build_registry();
    let person = Person::from_value(json!({"gender": 1.0, "skin": 6, "age": 70})).unwrap();

    let mut group = c.benchmark_group("score_matrix");
    for size in [10, 100, 1000].iter() {
        let items = generate_items(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            let builder = VectorBuilder::new(&registry);
            b.iter(|| {
                builder
                    .score_matrix(black_box(items), black_box(&person))
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_aggregation(c: &mut Criterion) {
    let registry = build_registry();
    let person = Person::from_value(json!({"gender": 1.0, "skin": 6, "age": 70})).unwrap();
    let items = generate_items(1000);
    let matrix = VectorBuilder::new(&registry)
        .score_matrix(&items, &person)
        .unwrap();

    let mut group = c.benchmark_group("aggregate");
    for (name, strategy) in [
        ("utilitarian", Inclusivity::Utilitarian),
        ("nash", Inclusivity::Nash),
        ("egalitarian", Inclusivity::Egalitarian),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| strategy.aggregate_matrix(black_box(&matrix)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_score_matrix, benchmark_aggregation);
criterion_main!(benches);
