//! Direct rotation by inverse mapping with nearest-neighbour sampling.

use crate::image::{ImageView, PixelBuffer, Rgba};
use crate::rotate::embed;
use crate::trace::trace_span;
use crate::util::{par, SpinResult};

/// Rotates `src` counter-clockwise by `theta` radians into a padded canvas.
///
/// The source is first embedded with [`embed`]. Rotation is about the
/// canvas centre `cx = (w - 1) / 2`, `cy = (h - 1) / 2`; each destination
/// pixel `(x, y)` is mapped back through the inverse rotation and rounded to
/// the nearest source pixel. Samples that land outside the canvas are
/// transparent.
pub fn rotate_naive(
    src: ImageView<'_>,
    width: usize,
    height: usize,
    theta: f32,
    offset: usize,
) -> SpinResult<PixelBuffer> {
    let _span = trace_span!("rotate_naive", theta = theta).entered();
    let canvas = embed(width, height, src, offset)?;
    let canvas = canvas.view();
    let mut out = PixelBuffer::new(width, height)?;

    let (sin, cos) = theta.sin_cos();
    let cx = (width as f32 - 1.0) * 0.5;
    let cy = (height as f32 - 1.0) * 0.5;

    par::for_each_row(out.pixels_mut(), width, |y, row| {
        let dy = y as f32 - cy;
        for (x, px) in row.iter_mut().enumerate() {
            let dx = x as f32 - cx;
            let sx = (cos * dx + sin * dy + cx).round();
            let sy = (cos * dy - sin * dx + cy).round();
            *px = if sx.is_finite() && sy.is_finite() {
                canvas.sample(sx as i64, sy as i64)
            } else {
                Rgba::TRANSPARENT
            };
        }
    });

    Ok(out)
}
