use bezier_spin::{AngleSequencer, SpinError};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn four_steps_cover_the_quadrants_in_order() {
    let mut circle = AngleSequencer::new(4).unwrap();
    let expected = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
    assert_eq!(circle.current(), 0.0);
    for k in 1..=8 {
        let angle = circle.next();
        assert!((angle - expected[k % 4]).abs() < 1e-6, "step {k}: {angle}");
    }
}

#[test]
fn sequence_is_cyclic_with_uniform_spacing() {
    for count in [1usize, 3, 7, 120] {
        let mut circle = AngleSequencer::new(count).unwrap();
        let start = circle.current();
        for _ in 0..count {
            circle.next();
        }
        assert_eq!(circle.current(), start);
        assert_eq!(circle.index(), 0);

        let step = TAU / count as f32;
        for pair in circle.angles().windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-4);
        }
        assert!(circle.angles().iter().all(|&a| (0.0..TAU).contains(&a)));
    }
}

#[test]
fn zero_count_is_rejected() {
    assert!(matches!(AngleSequencer::new(0), Err(SpinError::InvalidInput(_))));
    assert_eq!(AngleSequencer::default().len(), 120);
}
