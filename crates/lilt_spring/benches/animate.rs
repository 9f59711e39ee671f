//! Benchmarks for spring stepping

use criterion::{criterion_group, criterion_main, Criterion};
use lilt_spring::{Spring, SpringConfig, SpringScheduler};
use std::hint::black_box;

fn bench_animate(c: &mut Criterion) {
    let moving = Spring::from_config(SpringConfig::default()).set_target(100.0);

    c.bench_function("animate_16ms_frame", |b| {
        b.iter(|| black_box(black_box(moving).animate(black_box(16.0))));
    });

    c.bench_function("animate_frame_hitch", |b| {
        b.iter(|| black_box(black_box(moving).animate(black_box(5_000.0))));
    });

    c.bench_function("animate_until_rest", |b| {
        b.iter(|| {
            let mut spring = black_box(moving);
            while !spring.is_at_rest() {
                spring = spring.animate(16.0);
            }
            black_box(spring)
        });
    });
}

fn bench_scheduler(c: &mut Criterion) {
    c.bench_function("scheduler_tick_256_springs", |b| {
        let mut scheduler = SpringScheduler::new();
        let ids: Vec<_> = (0..256)
            .map(|_| scheduler.insert(Spring::from_config(SpringConfig::wobbly())))
            .collect();

        b.iter(|| {
            for (i, id) in ids.iter().enumerate() {
                scheduler.set_target(*id, (i % 7) as f32 * 50.0 + 10.0);
            }
            black_box(scheduler.tick(16.0))
        });
    });
}

criterion_group!(benches, bench_animate, bench_scheduler);
criterion_main!(benches);
