//! Exact quarter-turn permutations.

use crate::image::{ImageView, PixelBuffer};
use crate::trace::trace_span;
use crate::util::{par, SpinResult};

/// Counter-clockwise rotation by a multiple of 90 degrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    Deg90,
    Deg180,
    Deg270,
}

/// Rotates a canvas about its centre without resampling.
///
/// The output keeps the input size. On square canvases (the only ones the
/// scene produces) this is a pure pixel permutation:
/// 90° reads `src(y, h-1-x)`, 180° reads `src(w-1-x, h-1-y)` and 270° reads
/// `src(h-1-y, x)`. On rectangular canvases the same mapping about the centre
/// is used and uncovered pixels are transparent.
pub fn turn(src: ImageView<'_>, quarter: QuarterTurn) -> SpinResult<PixelBuffer> {
    let _span = trace_span!("quarter_turn", turn = ?quarter).entered();
    let (width, height) = (src.width(), src.height());
    let mut out = PixelBuffer::new(width, height)?;

    let w = width as i64;
    let h = height as i64;
    // (w - 1) + (h - 1): twice the centre sum, kept integral.
    let edge_sum = w + h - 2;

    par::for_each_row(out.pixels_mut(), width, |y, row| {
        let y = y as i64;
        for (x, px) in row.iter_mut().enumerate() {
            let x = x as i64;
            let (sx, sy) = match quarter {
                QuarterTurn::Deg90 => (
                    (2 * y + w - h).div_euclid(2),
                    (edge_sum - 2 * x).div_euclid(2),
                ),
                QuarterTurn::Deg180 => (w - 1 - x, h - 1 - y),
                QuarterTurn::Deg270 => (
                    (edge_sum - 2 * y).div_euclid(2),
                    (2 * x + h - w).div_euclid(2),
                ),
            };
            *px = src.sample(sx, sy);
        }
    });

    Ok(out)
}
