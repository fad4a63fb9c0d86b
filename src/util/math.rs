//! Angle helpers shared by the curve and rotation code.

use std::f32::consts::TAU;

/// Tangent vectors shorter than this have no usable direction.
pub(crate) const MIN_TANGENT_NORM: f64 = 1e-6;

/// Wraps an angle in radians to the range [0, 2π).
pub(crate) fn wrap_tau(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Counter-clockwise angle of the vector `(x, y)` in [0, 2π).
///
/// Returns `None` when the vector is too short to normalize.
pub(crate) fn heading(x: f64, y: f64) -> Option<f32> {
    let norm = x.hypot(y);
    if !norm.is_finite() || norm < MIN_TANGENT_NORM {
        return None;
    }
    let cos = (x / norm).clamp(-1.0, 1.0);
    let angle = if y >= 0.0 {
        cos.acos()
    } else {
        std::f64::consts::TAU - cos.acos()
    };
    Some(wrap_tau(angle as f32))
}

#[cfg(test)]
mod tests {
    use super::{heading, wrap_tau};
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn wrap_tau_maps_to_expected_range() {
        assert!((wrap_tau(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_tau(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert_eq!(wrap_tau(0.0), 0.0);
        assert!(wrap_tau(-1e-9) < TAU);
    }

    #[test]
    fn heading_matches_quadrants() {
        assert!(heading(1.0, 0.0).unwrap().abs() < 1e-6);
        assert!((heading(0.0, 2.0).unwrap() - FRAC_PI_2).abs() < 1e-6);
        assert!((heading(-3.0, 0.0).unwrap() - PI).abs() < 1e-6);
        assert!((heading(0.0, -1.0).unwrap() - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn heading_rejects_zero_vector() {
        assert!(heading(0.0, 0.0).is_none());
        assert!(heading(1e-9, -1e-9).is_none());
    }
}
