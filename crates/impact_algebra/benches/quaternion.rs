use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_algebra::{Quaternionf, random::SplitMix64};
use nalgebra::Vector3;
use rand::SeedableRng;

fn mul_quaternion(c: &mut Criterion) {
    let a = Quaternionf::rotation_x(0.3);
    let b = Quaternionf::rotation_y(1.2);
    c.bench_function("mul_quaternion", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b));
    });
}

fn rotate_vector(c: &mut Criterion) {
    let rotation = Quaternionf::from_euler_angles(&Vector3::new(0.1, 0.2, 0.3));
    let vector = Vector3::new(1.0, 2.0, 3.0);
    c.bench_function("rotate_vector", |bencher| {
        bencher.iter(|| black_box(rotation).rotate_vector(black_box(&vector)));
    });
}

fn to_rotation_matrix(c: &mut Criterion) {
    let rotation = Quaternionf::from_euler_angles(&Vector3::new(0.1, 0.2, 0.3));
    c.bench_function("to_rotation_matrix", |bencher| {
        bencher.iter(|| black_box(rotation).to_rotation_matrix());
    });
}

fn random_rotation(c: &mut Criterion) {
    let mut rng = SplitMix64::seed_from_u64(0);
    c.bench_function("random_rotation", |bencher| {
        bencher.iter(|| Quaternionf::random_rotation(&mut rng));
    });
}

criterion_group!(
    benches,
    mul_quaternion,
    rotate_vector,
    to_rotation_matrix,
    random_rotation
);
criterion_main!(benches);
