use criterion::{criterion_group, criterion_main, Criterion};
use physics::{PhysicsWorld, Vec3};

fn bench_crowded_step(c: &mut Criterion) {
    let mut world = PhysicsWorld::new();
    for x in 0..16 {
        for z in 0..16 {
            world.add_dynamic_sphere(Vec3::new(x as f32 * 0.9, 0.5, z as f32 * 0.9), 0.0, 0.5);
        }
    }
    c.bench_function("crowded_step", |b| b.iter(|| world.step(0.02).unwrap()));
}

criterion_group!(benches, bench_crowded_step);
criterion_main!(benches);
