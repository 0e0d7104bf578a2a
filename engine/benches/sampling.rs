use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{enumerate_field_points, sample_affine, sweep_homogeneous, CancelToken, CurveSpec};

fn bench_real_sampling(c: &mut Criterion) {
    c.bench_function("weierstrass_real_300", |bencher| {
        let curve = CurveSpec::weierstrass(-1.0, 1.0);
        bencher.iter(|| black_box(sample_affine(black_box(&curve), -5.0, 5.0, 300, 1e-6)))
    });
}

fn bench_homogeneous_sweep(c: &mut Criterion) {
    c.bench_function("edwards_homogeneous_300", |bencher| {
        let curve = CurveSpec::edwards(4.0);
        bencher.iter(|| black_box(sweep_homogeneous(black_box(&curve), -5.0, 5.0, 300)))
    });
}

fn bench_field_enumeration(c: &mut Criterion) {
    c.bench_function("weierstrass_mod_197", |bencher| {
        let curve = CurveSpec::weierstrass(1.0, 1.0);
        let cancel = CancelToken::new();
        bencher.iter(|| black_box(enumerate_field_points(black_box(&curve), 197, &cancel)))
    });
}

criterion_group!(
    benches,
    bench_real_sampling,
    bench_homogeneous_sweep,
    bench_field_enumeration
);
criterion_main!(benches);
