//! Benchmark tests for the per-sample correction path.
//!
//! Run with: cargo bench --bench corrector_benchmarks

use axis_scaled::prelude::*;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

fn sample_sweep() -> Vec<i16> {
    (i16::MIN..=i16::MAX).step_by(64).collect()
}

fn bench_range_only(c: &mut Criterion) {
    let corrector = AxisCorrector::new(&AxisSettings::default());
    let inputs = sample_sweep();

    c.bench_function("correct_range_only", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(corrector.correct(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_all_stages(c: &mut Criterion) {
    let settings = AxisSettings {
        invert: true,
        linear: false,
        dead_zone: 5,
        anti_dead_zone: 10,
        sensitivity: 60,
        low_range: 0,
        high_range: 100,
    };
    let corrector = AxisCorrector::new(&settings);
    let inputs = sample_sweep();

    let mut group = c.benchmark_group("correct_all_stages");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("sweep", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(corrector.correct(std::hint::black_box(input)));
            }
        });
    });
    group.finish();
}

fn bench_coefficient_derivation(c: &mut Criterion) {
    let settings = AxisSettings {
        dead_zone: 5,
        anti_dead_zone: 10,
        sensitivity: 60,
        ..AxisSettings::default()
    };

    c.bench_function("coefficients_from_settings", |b| {
        b.iter(|| std::hint::black_box(Coefficients::from_settings(std::hint::black_box(&settings))));
    });
}

criterion_group!(
    benches,
    bench_range_only,
    bench_all_stages,
    bench_coefficient_derivation
);
criterion_main!(benches);
