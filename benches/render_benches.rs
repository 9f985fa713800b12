use SORplots::charts::Style;
use SORplots::datasets::ChartId;
use SORplots::datasets::serial_variants::{GRID_SIZES, SOR_ITERS, SOR_TIMES};
use SORplots::charts::derived::time_per_iteration;
use SORplots::render::ChartPlan;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_build_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("figures");
    for id in ChartId::all() {
        group.bench_function(format!("build {}", id), |b| {
            b.iter(|| black_box(id).build())
        });
        group.bench_function(format!("layout {}", id), |b| {
            let fig = id.build().unwrap();
            b.iter(|| ChartPlan::from_figure(black_box(&fig)))
        });
    }
    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    c.bench_function("time per iteration", |b| {
        b.iter(|| time_per_iteration(black_box(&SOR_TIMES), &SOR_ITERS, &GRID_SIZES))
    });
    c.bench_function("format shorthand", |b| {
        b.iter(|| Style::from_fmt(black_box("d-.")))
    });
}

criterion_group!(benches, bench_build_figures, bench_helpers);
criterion_main!(benches);
