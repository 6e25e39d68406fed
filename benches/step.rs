use agelife::{AutomatonGrid, DefaultGrid, Pattern};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_step_default(c: &mut Criterion) {
    let mut grid = DefaultGrid::empty();
    grid.randomize(Some(42));
    c.bench_function("step_80x64", |b| b.iter(|| grid.step()));
}

fn bench_step_large(c: &mut Criterion) {
    const N: usize = 1 << 10;
    let mut grid = AutomatonGrid::<N, N>::empty();
    grid.randomize(Some(42));
    c.bench_function("step_1024x1024", |b| b.iter(|| grid.step()));
}

fn bench_parse_rle(c: &mut Criterion) {
    let data = b"x = 36, y = 9, rule = B3/S23\n\
        24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$\
        2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!";
    c.bench_function("parse_rle", |b| b.iter(|| Pattern::from_rle(data)));
}

criterion_group!(
    benches,
    bench_step_default,
    bench_step_large,
    bench_parse_rle,
);
criterion_main!(benches);
