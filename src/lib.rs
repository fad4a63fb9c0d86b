//! bezier-spin animates a sprite spinning along a Bézier curve.
//!
//! The crate has two numerical cores: a curve engine that samples Bézier
//! curves from cached binomial rows and reports tangent angles, and a
//! rotation engine that turns an RGBA sprite by any angle, either by direct
//! nearest-neighbour mapping or by three interpolating shears. Passes run
//! row-parallel via the `rayon` feature (on by default). A small scene layer
//! composites the rotated sprite onto a canvas and drives frames.

pub mod curve;
pub mod image;
pub mod lowlevel;
pub mod rotate;
pub mod scene;
mod trace;
pub mod util;

pub use crate::curve::{
    AngleSequencer, BinomialTable, CurveConfig, CurveSampler, Point, MAX_CONTROL_POINTS,
    MIN_CONTROL_POINTS,
};
pub use crate::image::{ImageView, PixelBuffer, Rgba};
pub use crate::rotate::Algorithm;
pub use crate::scene::{Animation, Player, Scene, SceneConfig, StopHandle};
pub use crate::util::{SpinError, SpinResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
