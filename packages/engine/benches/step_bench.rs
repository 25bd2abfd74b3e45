//! Criterion benchmarks for the frame scheduler.
//!
//! - `falling_sand`: a 256x256 grid with a thick sand layer dropping
//! - `water_pool`: a wide basin of water still levelling out
//! - `sleeping_grid`: a settled world, where a step should cost almost nothing

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sandfall_engine::{Grid, Material};

const SIZE: u32 = 256;

fn sand_layer() -> Grid {
    let mut grid = Grid::with_seed(SIZE, SIZE, 1);
    for y in 0..64 {
        for x in 0..SIZE as i32 {
            if (x + y) % 3 != 0 {
                grid.spawn(x, y, Material::Sand);
            }
        }
    }
    grid
}

fn water_pool() -> Grid {
    let mut grid = Grid::with_seed(SIZE, SIZE, 2);
    for x in 0..SIZE as i32 {
        grid.spawn(x, 200, Material::Stone);
    }
    for y in 100..140 {
        for x in 64..192 {
            grid.spawn(x, y, Material::Water);
        }
    }
    // Let the block collapse so the bench measures spreading, not the first drop
    for _ in 0..30 {
        grid.step();
    }
    grid
}

fn settled_world() -> Grid {
    let mut grid = Grid::with_seed(SIZE, SIZE, 3);
    grid.spawn_brush(128, 240, 31, Material::Stone);
    for y in (SIZE - 16) as i32..SIZE as i32 {
        for x in 0..SIZE as i32 {
            grid.spawn(x, y, Material::Stone);
        }
    }
    grid.step();
    grid
}

fn bench_falling_sand(c: &mut Criterion) {
    c.bench_function("falling_sand", |b| {
        b.iter_batched(sand_layer, |mut grid| {
            for _ in 0..10 {
                grid.step();
            }
            grid
        }, BatchSize::LargeInput);
    });
}

fn bench_water_pool(c: &mut Criterion) {
    let mut grid = water_pool();
    c.bench_function("water_pool", |b| b.iter(|| grid.step()));
}

fn bench_sleeping_grid(c: &mut Criterion) {
    let mut grid = settled_world();
    c.bench_function("sleeping_grid", |b| b.iter(|| grid.step()));
}

criterion_group!(benches, bench_falling_sand, bench_water_pool, bench_sleeping_grid);
criterion_main!(benches);
