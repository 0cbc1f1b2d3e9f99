//! Benchmarks for decision tree training and prediction.

use arbol::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_dataset(n_samples: usize, n_features: usize) -> Vec<DataPoint> {
    let labels = ["low", "medium", "high"];
    (0..n_samples)
        .map(|i| {
            let features = (0..n_features)
                .map(|f| ((i * (f + 3) + f * 7) % 97) as f64 / 9.7)
                .collect();
            DataPoint::new(features, labels[(i * 31 / 7) % labels.len()])
        })
        .collect()
}

fn bench_decision_tree_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision_tree_fit");

    for size in [50, 200, 800].iter() {
        let data = make_dataset(*size, 4);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut tree = DecisionTree::new().with_max_depth(6);
                tree.fit(black_box(&data)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_decision_tree_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision_tree_predict");

    for size in [50, 200, 800].iter() {
        let data = make_dataset(*size, 4);
        let mut tree = DecisionTree::new().with_max_depth(6);
        tree.fit(&data).unwrap();
        let rows: Vec<Vec<f64>> = data.iter().map(|p| p.features.clone()).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| tree.predict_batch(black_box(&rows)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decision_tree_fit,
    bench_decision_tree_predict
);
criterion_main!(benches);
