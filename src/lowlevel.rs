//! Individual passes and helpers behind the high-level API.
//!
//! These expose the embedding step, single shear passes, quarter turns and
//! the Bernstein evaluator for callers composing their own pipelines. Most
//! users should prefer `Algorithm::rotate` and `CurveSampler`.

pub use crate::curve::{bezier_point, sample_count, validate_point_count};
pub use crate::image::wheel::{color_wheel, hsv_to_rgb};
pub use crate::rotate::{
    embed, rotate_naive, rotate_shear, shear_x, shear_y, turn, QuarterTurn,
};
pub use crate::scene::{parse_point_count, Painter, Rect, SpriteSink};
