use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panspermia_core::prelude::*;

fn busy_config() -> SimulationConfig {
    SimulationConfig {
        num_stars: 30,
        asteroid_spawn_chance: 0.1,
        random_seed: Some(42),
        ..Default::default()
    }
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_default_world", |b| {
        let mut sim = Simulation::new(SimulationConfig {
            random_seed: Some(42),
            ..Default::default()
        })
        .expect("valid config");
        b.iter(|| {
            sim.tick();
            black_box(sim.grid().asteroids.len());
        });
    });

    c.bench_function("hundred_ticks_busy_world", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(busy_config()).expect("valid config");
            for _ in 0..100 {
                sim.tick();
            }
            black_box(sim.stats())
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
