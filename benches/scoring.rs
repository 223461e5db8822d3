//! Scoring benchmark: feature vector → isolation forest score.

use cot_processor::config::{BaselineConfig, ModelConfig};
use cot_processor::features::FeatureVector;
use cot_processor::model::AnomalyScorer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_score_single_vector(c: &mut Criterion) {
    let scorer = AnomalyScorer::fit(&ModelConfig::default(), &BaselineConfig::default());
    let fv = FeatureVector::new([10.0, 20.0, 0.0, 0.0]);

    c.bench_function("score_single_vector_100_trees", |b| {
        b.iter(|| scorer.score(black_box(&fv)))
    });
}

fn bench_score_by_ensemble_size(c: &mut Criterion) {
    let mut g = c.benchmark_group("score_by_ensemble_size");
    for trees in [10, 50, 100, 200] {
        let config = ModelConfig {
            num_trees: trees,
            ..ModelConfig::default()
        };
        let scorer = AnomalyScorer::fit(&config, &BaselineConfig::default());
        let fv = FeatureVector::new([10.0, 20.0, 0.0, 0.0]);
        g.bench_function(format!("trees_{}", trees).as_str(), |b| {
            b.iter(|| scorer.score(black_box(&fv)))
        });
    }
    g.finish();
}

fn bench_fit(c: &mut Criterion) {
    c.bench_function("fit_100_trees_1000_baseline", |b| {
        b.iter(|| AnomalyScorer::fit(&ModelConfig::default(), &BaselineConfig::default()))
    });
}

criterion_group!(
    benches,
    bench_score_single_vector,
    bench_score_by_ensemble_size,
    bench_fit
);
criterion_main!(benches);
