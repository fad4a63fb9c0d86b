//! Bézier curve sampling with a ping-pong playback cursor.
//!
//! A `CurveSampler` owns the control points, evaluates the curve in the
//! Bernstein basis at evenly spaced parameters and walks the resulting
//! samples back and forth. Binomial weights come from a shared
//! [`BinomialTable`]; the tangent at the cursor is evaluated from the
//! derivative curve built on forward differences of the control points.

mod angles;
mod binomial;

pub use angles::{AngleSequencer, DEFAULT_ANGLE_STEPS};
pub use binomial::BinomialTable;

use crate::trace::{trace_event, trace_span};
use crate::util::math::heading;
use crate::util::{par, SpinError, SpinResult};
use rand::Rng;
use std::sync::Arc;

/// Smallest control polygon the sampler accepts (a tangent needs degree >= 1).
pub const MIN_CONTROL_POINTS: usize = 3;
/// Largest control polygon the scene lets users request.
pub const MAX_CONTROL_POINTS: usize = 20;

/// Integer point in scene coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Configuration for control point generation and picking.
#[derive(Clone, Debug)]
pub struct CurveConfig {
    /// Random control points are drawn from `0..extent_width`.
    pub extent_width: u32,
    /// Random control points are drawn from `0..extent_height`.
    pub extent_height: u32,
    /// Max per-axis distance in pixels for `select` to hit a control point.
    pub select_margin: i32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            extent_width: 800,
            extent_height: 800,
            select_margin: 10,
        }
    }
}

/// Checks a requested control point count against `[3, max]`.
pub fn validate_point_count(count: usize, max: usize) -> SpinResult<usize> {
    if !(MIN_CONTROL_POINTS..=max).contains(&count) {
        return Err(SpinError::InvalidPointCount {
            count,
            min: MIN_CONTROL_POINTS,
            max,
        });
    }
    Ok(count)
}

/// Number of parameter steps for a control polygon.
///
/// Half the larger bounding-box span, so wide curves get denser sampling;
/// never less than one step.
pub fn sample_count(points: &[Point]) -> usize {
    let Some(first) = points.first() else {
        return 1;
    };
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let span_x = i64::from(max_x) - i64::from(min_x);
    let span_y = i64::from(max_y) - i64::from(min_y);
    (span_x.max(span_y) / 2).max(1) as usize
}

/// Evaluates a Bézier curve of degree `row.len() - 1` at `t`.
pub fn bezier_point(row: &[u64], points: &[Point], t: f64) -> Point {
    let (x, y) = weighted_sum(row, t, points.iter().map(|p| (p.x as f64, p.y as f64)));
    Point::new(x.round() as i32, y.round() as i32)
}

fn weighted_sum<I>(row: &[u64], t: f64, coords: I) -> (f64, f64)
where
    I: Iterator<Item = (f64, f64)>,
{
    let n = row.len() - 1;
    let s = 1.0 - t;
    row.iter()
        .zip(coords)
        .enumerate()
        .fold((0.0, 0.0), |(x, y), (j, (&c, (px, py)))| {
            let w = c as f64 * t.powi(j as i32) * s.powi((n - j) as i32);
            (x + w * px, y + w * py)
        })
}

/// Samples a Bézier curve and replays it back and forth.
pub struct CurveSampler {
    table: Arc<BinomialTable>,
    cfg: CurveConfig,
    control_points: Vec<Point>,
    points: Vec<Point>,
    selected: Option<usize>,
    idx: usize,
    step: isize,
}

impl CurveSampler {
    /// Creates an empty sampler; call `generate` or `set_control_points` next.
    pub fn new(table: Arc<BinomialTable>, cfg: CurveConfig) -> Self {
        Self {
            table,
            cfg,
            control_points: Vec::new(),
            points: Vec::new(),
            selected: None,
            idx: 0,
            step: 1,
        }
    }

    /// Replaces the control points with `count` random ones.
    pub fn generate(&mut self, count: usize) -> SpinResult<()> {
        self.generate_with(&mut rand::rng(), count)
    }

    /// Like `generate`, drawing coordinates from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> SpinResult<()> {
        self.check_degree(count)?;
        if self.cfg.extent_width == 0 || self.cfg.extent_height == 0 {
            return Err(SpinError::InvalidDimensions {
                width: self.cfg.extent_width as usize,
                height: self.cfg.extent_height as usize,
            });
        }
        let (w, h) = (self.cfg.extent_width, self.cfg.extent_height);
        let points = (0..count)
            .map(|_| Point::new(rng.random_range(0..w) as i32, rng.random_range(0..h) as i32))
            .collect();
        self.set_control_points(points)
    }

    /// Replaces the control points, resamples and clears the selection.
    pub fn set_control_points(&mut self, points: Vec<Point>) -> SpinResult<()> {
        self.check_degree(points.len())?;
        self.control_points = points;
        self.selected = None;
        self.resample()
    }

    /// Marks the first control point within the margin of `(x, y)`.
    ///
    /// Returns the selected index; ties resolve to the lowest index.
    pub fn select(&mut self, x: i32, y: i32) -> Option<usize> {
        let margin = i64::from(self.cfg.select_margin);
        self.selected = par::position_first(&self.control_points, |p| {
            (i64::from(x) - i64::from(p.x)).abs() <= margin
                && (i64::from(y) - i64::from(p.y)).abs() <= margin
        });
        self.selected
    }

    /// Moves the selected control point and resamples; no-op without one.
    pub fn drag(&mut self, x: i32, y: i32) -> SpinResult<()> {
        let Some(idx) = self.selected else {
            return Ok(());
        };
        self.control_points[idx] = Point::new(x, y);
        self.resample()
    }

    /// Point under the cursor, `None` before the first `generate`.
    pub fn current(&self) -> Option<Point> {
        self.points.get(self.idx).copied()
    }

    /// Steps the cursor, bouncing off both ends, and returns the new point.
    pub fn next(&mut self) -> Option<Point> {
        let last = self.points.len().checked_sub(1)?;
        if last == 0 {
            return self.current();
        }
        if (self.idx == 0 && self.step < 0) || (self.idx == last && self.step > 0) {
            self.step = -self.step;
        }
        self.idx = self.idx.saturating_add_signed(self.step);
        self.current()
    }

    /// Tangent direction at the cursor, counter-clockwise in [0, 2π).
    ///
    /// Evaluates the derivative curve at `t = cursor / len`. Returns `None`
    /// when no curve exists or the tangent vanishes (coincident points).
    pub fn current_angle(&self) -> Option<f32> {
        if self.points.is_empty() || self.control_points.len() < MIN_CONTROL_POINTS {
            return None;
        }
        let row = self.table.row(self.control_points.len() - 2).ok()?;
        let t = self.idx as f64 / self.points.len() as f64;
        let diffs = self.control_points.windows(2).map(|pair| {
            (
                f64::from(pair[1].x) - f64::from(pair[0].x),
                f64::from(pair[1].y) - f64::from(pair[0].y),
            )
        });
        let (dx, dy) = weighted_sum(row, t, diffs);
        heading(dx, dy)
    }

    pub fn first(&self) -> Option<Point> {
        self.control_points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.control_points.last().copied()
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Sampled curve points in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cursor index into `points()`.
    pub fn cursor(&self) -> usize {
        self.idx
    }

    /// Current travel direction, `1` or `-1`.
    pub fn direction(&self) -> isize {
        self.step
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn table(&self) -> &Arc<BinomialTable> {
        &self.table
    }

    pub fn config(&self) -> &CurveConfig {
        &self.cfg
    }

    fn check_degree(&self, count: usize) -> SpinResult<()> {
        if count < MIN_CONTROL_POINTS {
            return Err(SpinError::InvalidPointCount {
                count,
                min: MIN_CONTROL_POINTS,
                max: self.table.levels() + 1,
            });
        }
        self.table.row(count - 1).map(|_| ())
    }

    fn resample(&mut self) -> SpinResult<()> {
        let _span = trace_span!("curve_resample", controls = self.control_points.len()).entered();
        let row = self.table.row(self.control_points.len() - 1)?;
        let steps = sample_count(&self.control_points);
        let controls = &self.control_points;
        self.points = par::map_indices(steps + 1, |i| {
            bezier_point(row, controls, i as f64 / steps as f64)
        });
        if self.idx >= self.points.len() {
            self.idx = self.points.len() - 1;
        }
        trace_event!("curve_sampled", samples = self.points.len());
        Ok(())
    }
}
