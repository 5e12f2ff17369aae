// Criterion benchmarks for the Iris schema layer

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iris_serve::core::{CentroidClassifier, Classifier};
use iris_serve::models::{IrisFeatures, PredictionResponse};
use serde_json::json;

fn bench_typed_validation(c: &mut Criterion) {
    c.bench_function("iris_features_new", |b| {
        b.iter(|| {
            IrisFeatures::new(
                black_box(5.1),
                black_box(3.5),
                black_box(1.4),
                black_box(0.2),
            )
        });
    });
}

fn bench_untrusted_validation(c: &mut Criterion) {
    let body = json!({
        "sepal_length": "5.1",
        "sepal_width": 3.5,
        "petal_length": 1.4,
        "petal_width": "0.2"
    });

    c.bench_function("iris_features_from_value", |b| {
        b.iter(|| IrisFeatures::from_value(black_box(&body)));
    });
}

fn bench_predict(c: &mut Criterion) {
    let classifier = CentroidClassifier::iris();
    let features = IrisFeatures::new(5.9, 2.8, 4.3, 1.3).unwrap();

    c.bench_function("centroid_predict_and_wrap", |b| {
        b.iter(|| {
            let prediction = classifier.predict(black_box(&features)).unwrap();
            PredictionResponse::from_prediction(prediction, features)
        });
    });
}

criterion_group!(
    benches,
    bench_typed_validation,
    bench_untrusted_validation,
    bench_predict
);

criterion_main!(benches);
