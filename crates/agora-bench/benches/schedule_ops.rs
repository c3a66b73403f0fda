//! Criterion benchmarks for whole scheduler ticks.

use agora_bench::Swarm;
use agora_space::GridConfig;
use agora_time::{BaseScheduler, RandomActivation, Schedule};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn config() -> GridConfig {
    GridConfig {
        width: 100,
        height: 100,
        torus: true,
    }
}

/// Benchmark: one BaseScheduler tick over 5K walkers.
fn bench_base_tick_5k(c: &mut Criterion) {
    let mut swarm = Swarm::new(BaseScheduler::new(), &config(), 5_000, 7).unwrap();

    c.bench_function("base_tick_5k", |b| {
        b.iter(|| {
            BaseScheduler::step(&mut swarm).unwrap();
            black_box(swarm.schedule.steps());
        });
    });
}

/// Benchmark: one RandomActivation tick over 5K walkers, shuffle included.
fn bench_random_tick_5k(c: &mut Criterion) {
    let mut swarm = Swarm::new(RandomActivation::new(), &config(), 5_000, 7).unwrap();

    c.bench_function("random_tick_5k", |b| {
        b.iter(|| {
            RandomActivation::step(&mut swarm).unwrap();
            black_box(swarm.schedule.steps());
        });
    });
}

/// Benchmark: add then remove 1K ids, exercising order-preserving removal.
fn bench_add_remove_1k(c: &mut Criterion) {
    c.bench_function("add_remove_1k", |b| {
        b.iter(|| {
            let mut s = RandomActivation::new();
            for i in 0..1000u64 {
                s.add(agora_core::AgentId(i)).unwrap();
            }
            for i in (0..1000u64).step_by(2) {
                s.remove(agora_core::AgentId(i)).unwrap();
            }
            black_box(s.get_agent_count());
        });
    });
}

criterion_group!(
    benches,
    bench_base_tick_5k,
    bench_random_tick_5k,
    bench_add_remove_1k
);
criterion_main!(benches);
