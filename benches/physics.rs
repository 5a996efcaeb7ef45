//! Benchmarks for springnet simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use springnet::{GridConfig, NoOpStepObserver, System, SystemConfig, Vec2};

fn cloth(rows: usize, cols: usize) -> System<f32> {
    let mut system = System::new(SystemConfig::new());
    let grid = GridConfig {
        rows,
        cols,
        origin: Vec2::new(10.0, 10.0),
        cell_size: 10.0,
        mass: 1.0,
        stiffness: 1000.0,
        damping: 1.0,
    };
    system.build_grid(&grid).unwrap();
    system
}

fn bench_grid_build(c: &mut Criterion) {
    c.bench_function("build_40x60_grid", |b| {
        let mut system = System::new(SystemConfig::new());
        let grid = GridConfig {
            rows: 40,
            cols: 60,
            ..GridConfig::default()
        };
        b.iter(|| {
            system.build_grid(&grid).unwrap();
            system.mass_count()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_20x20_60_ticks", |b| {
        b.iter(|| {
            let mut system = cloth(20, 20);
            for _ in 0..60 {
                system.step(1.0 / 60.0, &mut NoOpStepObserver);
            }
            system.masses()[system.mass_count() - 1].position
        });
    });
}

fn bench_windy_tick(c: &mut Criterion) {
    c.bench_function("windy_tick_40x60", |b| {
        let mut system = cloth(40, 60);
        b.iter(|| {
            system.step(1.0 / 60.0, &mut NoOpStepObserver);
            system.apply_uniform_force(Vec2::new(75.0, 0.0)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_grid_build,
    bench_cloth_simulation,
    bench_windy_tick
);
criterion_main!(benches);
