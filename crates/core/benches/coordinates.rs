use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ottomap::{Direction, GridCoordinate, MapCoordinate};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinates");

    group.bench_function("parse + format", |b| {
        b.iter(|| {
            GridCoordinate::parse(black_box("MN 1507"))
                .unwrap()
                .to_string()
        })
    });
    group.bench_function("grid -> map -> grid", |b| {
        let grid = GridCoordinate::parse("MN 1507").unwrap();
        b.iter(|| {
            GridCoordinate::from_map_coordinate(
                black_box(grid).to_map_coordinate(),
            )
        })
    });
    group.bench_function("walk 1000 moves", |b| {
        let moves: Vec<Direction> =
            Direction::ALL.iter().copied().cycle().take(1000).collect();
        b.iter(|| MapCoordinate::new(390, 273).walk(black_box(&moves).clone()))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
