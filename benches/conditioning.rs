use axis_conditioning::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sweep(conditioner: &AxisConditioner) {
    for value in -100..=100 {
        let value = value as f64 * 0.01;
        black_box(conditioner.condition(black_box(value)));
    }
}

fn uniform_condition(c: &mut Criterion) {
    let conditioner = AxisConditioner::from(UniformConditioner::new(0.1, 2.5, 0.0, 1.0));

    c.bench_function("uniform_condition", |b| b.iter(|| sweep(&conditioner)));
}

fn uniform_condition_high_exponent(c: &mut Criterion) {
    // Exercises the general loop path of the power function.
    let conditioner = AxisConditioner::from(UniformConditioner::new(0.1, 12.5, 0.0, 1.0));

    c.bench_function("uniform_condition_high_exponent", |b| {
        b.iter(|| sweep(&conditioner))
    });
}

fn nonuniform_condition(c: &mut Criterion) {
    let conditioner = AxisConditioner::from(NonUniformConditioner::new(
        UniformConditioner::new(0.05, 1.0, 0.0, 1.0),
        UniformConditioner::new(0.1, 3.0, 0.0, 1.0),
    ));

    c.bench_function("nonuniform_condition", |b| b.iter(|| sweep(&conditioner)));
}

fn pipeline_condition(c: &mut Criterion) {
    let conditioner = AxisConditioner::from_iter([
        AxisConditioner::Inverted,
        AxisConditioner::Sensitivity(0.8),
        AxisConditioner::Uniform(UniformConditioner::new(0.1, 2.0, 0.0, 1.0)),
    ]);

    c.bench_function("pipeline_condition", |b| b.iter(|| sweep(&conditioner)));
}

criterion_group!(
    benches,
    uniform_condition,
    uniform_condition_high_exponent,
    nonuniform_condition,
    pipeline_condition
);
criterion_main!(benches);
