//! Rotation by three interpolating shears.
//!
//! An angle in [0, 2π) is split into an exact quarter turn plus a residual
//! `phi` in [0, π/2). The residual is applied as shear-X by `tan(-phi/2)`,
//! shear-Y by `sin(phi)` and shear-X by `tan(-phi/2)` again.
//!
//! A shear moves line `i` by `lambda * (i - len / 2)` pixels. The integer
//! part `d` shifts the line; the fractional part `f` blends each source
//! pixel with its successor using weights `(1 - f, f)`. The last pixel of a
//! line is copied without blending.

use crate::image::{ImageView, PixelBuffer, Rgba};
use crate::rotate::{embed, turn, QuarterTurn};
use crate::trace::{trace_debug, trace_span};
use crate::util::math::wrap_tau;
use crate::util::{par, SpinResult};
use std::f32::consts::{FRAC_PI_2, PI};

/// Rotates `src` counter-clockwise by `theta` radians using shears.
///
/// The source is embedded with [`embed`] first; see the module docs for the
/// pass structure.
pub fn rotate_shear(
    src: ImageView<'_>,
    width: usize,
    height: usize,
    theta: f32,
    offset: usize,
) -> SpinResult<PixelBuffer> {
    let _span = trace_span!("rotate_shear", theta = theta).entered();
    let canvas = embed(width, height, src, offset)?;

    let (quarter, phi) = split_quadrant(theta);
    let canvas = match quarter {
        Some(quarter) => turn(canvas.view(), quarter)?,
        None => canvas,
    };
    trace_debug!("shear_residual", phi = phi);

    let tan = (-phi / 2.0).tan();
    let sin = phi.sin();
    let first = shear_x(canvas.view(), tan)?;
    let second = shear_y(first.view(), sin)?;
    shear_x(second.view(), tan)
}

/// Splits an angle into a quarter turn and a residual in [0, π/2).
pub(crate) fn split_quadrant(theta: f32) -> (Option<QuarterTurn>, f32) {
    let theta = wrap_tau(theta);
    let three_quarters = 3.0 * FRAC_PI_2;
    if theta >= three_quarters {
        (Some(QuarterTurn::Deg270), theta - three_quarters)
    } else if theta >= PI {
        (Some(QuarterTurn::Deg180), theta - PI)
    } else if theta >= FRAC_PI_2 {
        (Some(QuarterTurn::Deg90), theta - FRAC_PI_2)
    } else {
        (None, theta)
    }
}

/// Shifts every row horizontally by `lambda * (y - height / 2)`.
pub fn shear_x(src: ImageView<'_>, lambda: f32) -> SpinResult<PixelBuffer> {
    let (width, height) = (src.width(), src.height());
    let mut out = PixelBuffer::new(width, height)?;
    let pivot = (height / 2) as f32;

    par::for_each_row(out.pixels_mut(), width, |y, row| {
        let Some(src_row) = src.row(y) else {
            return;
        };
        let (d, f) = split_shift(lambda * (y as f32 - pivot));
        for (x, px) in row.iter_mut().enumerate() {
            *px = shifted_sample(x as i64 - d, width, f, |i| src_row[i]);
        }
    });

    Ok(out)
}

/// Shifts every column vertically by `lambda * (x - width / 2)`.
///
/// Computed one destination row at a time from per-column shifts, which is
/// equivalent to shifting each column.
pub fn shear_y(src: ImageView<'_>, lambda: f32) -> SpinResult<PixelBuffer> {
    let (width, height) = (src.width(), src.height());
    let mut out = PixelBuffer::new(width, height)?;
    let pivot = (width / 2) as f32;
    let shifts: Vec<(i64, f32)> = (0..width)
        .map(|x| split_shift(lambda * (x as f32 - pivot)))
        .collect();
    let pixels = src.as_slice();

    par::for_each_row(out.pixels_mut(), width, |y, row| {
        for (x, px) in row.iter_mut().enumerate() {
            let (d, f) = shifts[x];
            *px = shifted_sample(y as i64 - d, height, f, |i| pixels[i * width + x]);
        }
    });

    Ok(out)
}

/// Integer part (floor) and fractional part of a shift.
fn split_shift(shift: f32) -> (i64, f32) {
    let d = shift.floor();
    (d as i64, shift - d)
}

/// Value at destination position `i + d` of a line shifted by `d`.
///
/// `at` reads source position `i` of a line of `len` pixels.
#[inline]
fn shifted_sample(i: i64, len: usize, f: f32, at: impl Fn(usize) -> Rgba) -> Rgba {
    if i < 0 {
        return Rgba::TRANSPARENT;
    }
    let i = i as usize;
    if i + 1 < len {
        blend(at(i), at(i + 1), f)
    } else if i + 1 == len {
        at(i)
    } else {
        Rgba::TRANSPARENT
    }
}

/// Alpha-aware linear blend of two neighbours with weights `(1 - f, f)`.
///
/// A transparent neighbour carries no meaningful colour, so it is never
/// mixed in: if one side is transparent the other is returned as is, unless
/// its weight is zero.
pub(crate) fn blend(cur: Rgba, next: Rgba, f: f32) -> Rgba {
    match (cur.is_transparent(), next.is_transparent()) {
        (true, true) => Rgba::TRANSPARENT,
        (false, true) => cur,
        (true, false) if f > 0.0 => next,
        (true, false) => Rgba::TRANSPARENT,
        (false, false) if f <= 0.0 => cur,
        (false, false) => {
            let mix = |a: u8, b: u8| {
                (f32::from(a) * (1.0 - f) + f32::from(b) * f)
                    .round()
                    .clamp(0.0, 255.0) as u8
            };
            Rgba::new(
                mix(cur.r, next.r),
                mix(cur.g, next.g),
                mix(cur.b, next.b),
                mix(cur.a, next.a),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{blend, split_quadrant, split_shift};
    use crate::image::Rgba;
    use crate::rotate::QuarterTurn;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn split_quadrant_reduces_to_first_quadrant() {
        assert_eq!(split_quadrant(0.25), (None, 0.25));
        let (q, phi) = split_quadrant(FRAC_PI_2 + 0.25);
        assert_eq!(q, Some(QuarterTurn::Deg90));
        assert!((phi - 0.25).abs() < 1e-6);
        let (q, phi) = split_quadrant(PI + 0.25);
        assert_eq!(q, Some(QuarterTurn::Deg180));
        assert!((phi - 0.25).abs() < 1e-6);
        let (q, phi) = split_quadrant(-0.25);
        assert_eq!(q, Some(QuarterTurn::Deg270));
        assert!((phi - (FRAC_PI_2 - 0.25)).abs() < 1e-5);
    }

    #[test]
    fn split_shift_floors_negative_shifts() {
        assert_eq!(split_shift(2.25), (2, 0.25));
        assert_eq!(split_shift(-1.75), (-2, 0.25));
        assert_eq!(split_shift(-0.0), (0, 0.0));
    }

    #[test]
    fn blend_ignores_transparent_neighbours() {
        let red = Rgba::opaque(200, 0, 0);
        let blue = Rgba::opaque(0, 0, 100);
        assert_eq!(blend(Rgba::TRANSPARENT, Rgba::TRANSPARENT, 0.5), Rgba::TRANSPARENT);
        assert_eq!(blend(red, Rgba::TRANSPARENT, 0.9), red);
        assert_eq!(blend(Rgba::TRANSPARENT, blue, 0.1), blue);
        assert_eq!(blend(Rgba::TRANSPARENT, blue, 0.0), Rgba::TRANSPARENT);
        assert_eq!(blend(red, blue, 0.0), red);
        assert_eq!(blend(red, blue, 0.25), Rgba::opaque(150, 0, 25));
    }
}
