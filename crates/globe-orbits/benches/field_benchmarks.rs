use criterion::{Criterion, black_box, criterion_group, criterion_main};
use globe_orbits::*;
use glam::Vec3;

fn bench_advance(c: &mut Criterion) {
    let mut field = OrbitField::new(&FieldSettings::default()).unwrap();
    c.bench_function("advance_2000", |bencher| {
        bencher.iter(|| {
            field.advance();
            black_box(&field);
        })
    });
}

fn bench_advance_scaled(c: &mut Criterion) {
    let mut field = OrbitField::new(&FieldSettings::default()).unwrap();
    c.bench_function("advance_scaled_2000", |bencher| {
        bencher.iter(|| field.advance_scaled(black_box(PlaybackSpeed::Forward16.multiplier())))
    });
}

fn bench_pick_hit(c: &mut Criterion) {
    let field = OrbitField::new(&FieldSettings::default()).unwrap();
    let target = field.particles()[1000].position();
    let ray = PickRay::new(target * 3.0, -target);
    c.bench_function("pick_hit_2000", |bencher| {
        bencher.iter(|| black_box(field.pick(black_box(&ray))))
    });
}

fn bench_pick_miss(c: &mut Criterion) {
    let field = OrbitField::new(&FieldSettings::default()).unwrap();
    let ray = PickRay::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    c.bench_function("pick_miss_2000", |bencher| {
        bencher.iter(|| black_box(field.select_nearest(black_box(&ray))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let settings = FieldSettings::default();
    c.bench_function("generate_2000", |bencher| {
        bencher.iter(|| black_box(OrbitField::new(black_box(&settings))))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_scaled,
    bench_pick_hit,
    bench_pick_miss,
    bench_generate
);
criterion_main!(benches);
