#![cfg(feature = "rayon")]

use bezier_spin::{Algorithm, BinomialTable, CurveConfig, CurveSampler, PixelBuffer, Rgba};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn make_sprite(width: usize, height: usize) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 11) ^ (y * 3) ^ (x * y)) & 0xFF;
            let alpha = if (x + y) % 7 == 0 { 0 } else { 255 };
            pixels.push(Rgba::new(value as u8, (255 - value) as u8, (x * 5) as u8, alpha));
        }
    }
    PixelBuffer::from_pixels(pixels, width, height).unwrap()
}

fn single_threaded<T: Send>(op: impl FnOnce() -> T + Send) -> T {
    rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(op)
}

#[test]
fn parallel_rotation_matches_single_thread() {
    let sprite = make_sprite(48, 36);
    for algorithm in [Algorithm::Naive, Algorithm::Shear] {
        for theta in [0.4f32, 2.2, 5.1] {
            let parallel = algorithm.rotate(sprite.view(), 96, 72, theta, 18).unwrap();
            let sequential = single_threaded(|| {
                algorithm.rotate(sprite.view(), 96, 72, theta, 18).unwrap()
            });
            assert_eq!(parallel, sequential, "{algorithm:?} at {theta}");
        }
    }
}

#[test]
fn parallel_sampling_and_selection_match_single_thread() {
    let build = || {
        let table = Arc::new(BinomialTable::new(19).unwrap());
        let mut curve = CurveSampler::new(table, CurveConfig::default());
        let mut rng = StdRng::seed_from_u64(77);
        curve.generate_with(&mut rng, 12).unwrap();
        let first = curve.control_points()[0];
        let hit = curve.select(first.x, first.y);
        (curve.points().to_vec(), hit)
    };
    let parallel = build();
    let sequential = single_threaded(build);
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.1, Some(0));
}
