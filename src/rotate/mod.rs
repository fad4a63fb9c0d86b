//! Sprite rotation into a padded canvas.
//!
//! Both algorithms first [`embed`] the source into a transparent canvas of
//! the requested size, then rotate that canvas about its own centre by a
//! counter-clockwise angle in radians. Every output pixel is either a
//! copied or blended source colour or fully transparent.
//!
//! All passes are row-partitioned gathers: each worker owns one destination
//! row and reads from an immutable source view, so passes need no locking.

mod naive;
mod shear;
mod turn;

pub use naive::rotate_naive;
pub use shear::{rotate_shear, shear_x, shear_y};
pub use turn::{turn, QuarterTurn};

use crate::image::{ImageView, PixelBuffer};
use crate::trace::trace_span;
use crate::util::SpinResult;

/// Rotation algorithm, chosen per call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Inverse-mapped nearest-neighbour sampling.
    #[default]
    Naive,
    /// Quadrant turn plus three interpolating shears.
    Shear,
}

impl Algorithm {
    /// Rotates `src` by `theta` into a `width` x `height` canvas.
    pub fn rotate(
        self,
        src: ImageView<'_>,
        width: usize,
        height: usize,
        theta: f32,
        offset: usize,
    ) -> SpinResult<PixelBuffer> {
        match self {
            Algorithm::Naive => rotate_naive(src, width, height, theta, offset),
            Algorithm::Shear => rotate_shear(src, width, height, theta, offset),
        }
    }
}

/// Places `src` on a transparent `width` x `height` canvas.
///
/// The drawing area is the canvas inset by `offset` on every side. The
/// source is copied unscaled, centred in that area and clipped to it; with a
/// canvas twice the source size and `offset = size / 2` the area matches the
/// source exactly.
pub fn embed(
    width: usize,
    height: usize,
    src: ImageView<'_>,
    offset: usize,
) -> SpinResult<PixelBuffer> {
    let _span = trace_span!("embed", width = width, height = height, offset = offset).entered();
    let mut canvas = PixelBuffer::new(width, height)?;
    let (Some(area_w), Some(area_h)) = (
        width.checked_sub(offset.saturating_mul(2)),
        height.checked_sub(offset.saturating_mul(2)),
    ) else {
        return Ok(canvas);
    };

    let (dst_x0, src_x0, copy_w) = center_span(offset, area_w, src.width());
    let (dst_y0, src_y0, copy_h) = center_span(offset, area_h, src.height());
    if copy_w == 0 || copy_h == 0 {
        return Ok(canvas);
    }

    let pixels = canvas.pixels_mut();
    for y in 0..copy_h {
        let Some(row) = src.row(src_y0 + y) else {
            break;
        };
        let start = (dst_y0 + y) * width + dst_x0;
        pixels[start..start + copy_w].copy_from_slice(&row[src_x0..src_x0 + copy_w]);
    }
    Ok(canvas)
}

/// Centres a source span of `len` inside an area `[start, start + area)`.
///
/// Returns the destination start, the source start and the copied length.
fn center_span(start: usize, area: usize, len: usize) -> (usize, usize, usize) {
    if len <= area {
        (start + (area - len) / 2, 0, len)
    } else {
        (start, (len - area) / 2, area)
    }
}

#[cfg(test)]
mod tests {
    use super::center_span;

    #[test]
    fn center_span_pads_and_clips() {
        assert_eq!(center_span(0, 10, 4), (3, 0, 4));
        assert_eq!(center_span(2, 6, 6), (2, 0, 6));
        assert_eq!(center_span(1, 4, 8), (1, 2, 4));
        assert_eq!(center_span(0, 0, 3), (0, 1, 0));
    }
}
