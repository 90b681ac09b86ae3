use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use microstrip_lines::sweep::{linspace, sweep_impedance_over_width};
use microstrip_lines::wheeler::z0;

fn bench_width_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("width_sweep");
    let widths = linspace(0.2, 5.0, 10_000);

    group.bench_function(BenchmarkId::new("fr4", widths.len()), |b| {
        b.iter(|| {
            let _ = sweep_impedance_over_width(4.4, 1.0, widths.iter().copied());
        })
    });
    group.finish();
}

fn bench_single_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");
    group.bench_function("z0_narrow", |b| b.iter(|| z0(4.4, 0.5, 1.0)));
    group.bench_function("z0_wide", |b| b.iter(|| z0(4.4, 2.0, 1.0)));
    group.finish();
}

criterion_group!(benches, bench_width_sweep, bench_single_evaluation);
criterion_main!(benches);
