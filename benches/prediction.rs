//! Prediction benchmark: record → row → classifier → label, with a constant classifier so
//! only the service overhead is measured.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phish_detect::config::FeaturesConfig;
use phish_detect::error::InferenceError;
use phish_detect::features::{Column, FeatureExtractor};
use phish_detect::sentiment::VaderOracle;
use phish_detect::{Classifier, DetectionContext, PredictionService};
use std::sync::Arc;

struct Constant(i64);

impl Classifier for Constant {
    fn predict(&self, row: &[Column<'_>]) -> Result<i64, InferenceError> {
        let _ = black_box(row);
        Ok(self.0)
    }
}

fn bench_predict(c: &mut Criterion) {
    let oracle = VaderOracle::load().expect("vader lexicon");
    let extractor = FeatureExtractor::new(&FeaturesConfig::default(), Arc::new(oracle));
    let record = extractor.extract("Please verify your account now, click here", "alerts@mailinator.com");
    let service = PredictionService::with_classifier(Arc::new(Constant(1)));

    c.bench_function("predict_record", |b| b.iter(|| service.predict(black_box(&record))));

    let unavailable = PredictionService::unavailable("bench");
    c.bench_function("predict_unavailable", |b| {
        b.iter(|| unavailable.predict(black_box(&record)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let oracle = VaderOracle::load().expect("vader lexicon");
    let ctx = DetectionContext::new(
        FeatureExtractor::new(&FeaturesConfig::default(), Arc::new(oracle)),
        PredictionService::with_classifier(Arc::new(Constant(0))),
    );
    c.bench_function("classify_end_to_end", |b| {
        b.iter(|| ctx.classify(black_box("Hi, see you at lunch"), black_box("alice@gmail.com")))
    });
}

criterion_group!(benches, bench_predict, bench_classify);
criterion_main!(benches);
