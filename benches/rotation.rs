use bezier_spin::lowlevel::color_wheel;
use bezier_spin::{Algorithm, BinomialTable, CurveConfig, CurveSampler};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::sync::Arc;

fn bench_rotation(c: &mut Criterion) {
    let size = 150;
    let sprite = color_wheel(size, size).unwrap();
    let theta = 0.6f32;

    c.bench_function("naive_150_into_300", |b| {
        b.iter(|| {
            black_box(
                Algorithm::Naive
                    .rotate(sprite.view(), 2 * size, 2 * size, black_box(theta), size / 2)
                    .unwrap(),
            )
        });
    });

    c.bench_function("shear_150_into_300", |b| {
        b.iter(|| {
            black_box(
                Algorithm::Shear
                    .rotate(sprite.view(), 2 * size, 2 * size, black_box(theta), size / 2)
                    .unwrap(),
            )
        });
    });

    if cfg!(feature = "rayon") {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        c.bench_function("shear_150_into_300_single_thread", |b| {
            b.iter(|| {
                pool.install(|| {
                    black_box(
                        Algorithm::Shear
                            .rotate(sprite.view(), 2 * size, 2 * size, black_box(theta), size / 2)
                            .unwrap(),
                    )
                })
            });
        });
    }
}

fn bench_curve(c: &mut Criterion) {
    let table = Arc::new(BinomialTable::new(19).unwrap());
    let mut curve = CurveSampler::new(table, CurveConfig::default());
    let mut rng = StdRng::seed_from_u64(5);

    c.bench_function("generate_20_points", |b| {
        b.iter(|| curve.generate_with(&mut rng, black_box(20)).unwrap());
    });
}

criterion_group!(benches, bench_rotation, bench_curve);
criterion_main!(benches);
