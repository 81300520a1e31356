use calcore::{evaluate_expression, eval};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, DefaultNumericTypes};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("calcore_arithmetic", |b| {
        b.iter(|| eval::evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("calcore_complex_arithmetic", |b| {
        b.iter(|| eval::evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark the power-mode pre-pass against full evaluation
fn benchmark_power_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Power-mode Evaluation");

    group.bench_function("calcore_power", |b| {
        b.iter(|| evaluate_expression(black_box("2^10")).unwrap())
    });

    group.bench_function("native_rust_power", |b| {
        b.iter(|| black_box(2.0f64).powf(black_box(10.0)))
    });

    group.bench_function("meval_power", |b| {
        b.iter(|| meval::eval_str(black_box("2^10")).unwrap())
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_power_mode,
);
criterion_main!(benches);
