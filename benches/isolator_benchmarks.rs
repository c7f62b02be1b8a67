use attitude_isolator::{AttitudeConverter, AttitudePipeline, MotionIsolator, OrientationState, RawAttitudeSample};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;

// Pre-generated attitude/accelerometer pairs to keep RNG out of the measurement
struct PreGeneratedData {
    samples: Vec<(RawAttitudeSample, Vector3<f64>)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let samples = (0..count)
            .map(|_| {
                let attitude = RawAttitudeSample::new(
                    rng.random_range(-9_000_000..=9_000_000),
                    rng.random_range(-9_000_000..=9_000_000),
                    rng.random_range(0..36_000_000),
                );
                let accel = Vector3::new(
                    rng.random_range(-0.5..0.5),
                    rng.random_range(-0.5..0.5),
                    9.80665 + rng.random_range(-0.5..0.5),
                );
                (attitude, accel)
            })
            .collect();

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (RawAttitudeSample, Vector3<f64>) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

fn bench_convert(c: &mut Criterion) {
    let converter = AttitudeConverter::new();
    let mut data = PreGeneratedData::new(1024, 1);

    c.bench_function("attitude_convert", |b| {
        b.iter(|| {
            let (attitude, _) = data.next();
            converter.convert(
                black_box(attitude.roll),
                black_box(attitude.pitch),
                black_box(attitude.heading),
            )
        })
    });
}

fn bench_isolate(c: &mut Criterion) {
    let converter = AttitudeConverter::new();
    let isolator = MotionIsolator::new();
    let q = converter.convert(210_000, 320_000, 4_300_000);
    let accel = Vector3::new(0.1, -0.2, 9.9);

    c.bench_function("motion_isolate", |b| {
        b.iter(|| isolator.isolate(black_box(&q), black_box(accel)))
    });
}

fn bench_pipeline_step(c: &mut Criterion) {
    let mut pipeline = AttitudePipeline::new();
    let mut data = PreGeneratedData::new(1024, 2);

    c.bench_function("pipeline_step", |b| {
        b.iter(|| {
            let (attitude, accel) = data.next();
            pipeline.process_attitude(black_box(&attitude));
            pipeline.process_acceleration(black_box(accel))
        })
    });
}

fn bench_state_publish_snapshot(c: &mut Criterion) {
    let state = OrientationState::new();
    let q = AttitudeConverter::new().convert(100, 200, 300);

    c.bench_function("state_publish", |b| b.iter(|| state.publish(black_box(q))));
    c.bench_function("state_snapshot", |b| b.iter(|| state.snapshot()));
}

criterion_group!(
    benches,
    bench_convert,
    bench_isolate,
    bench_pipeline_step,
    bench_state_publish_snapshot
);
criterion_main!(benches);
