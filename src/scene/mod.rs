//! Scene orchestration: curve, sprite and canvas.
//!
//! A `Scene` owns the white canvas, the sprite image and the curve. Each
//! `paint` redraws the curve and, when a sprite is loaded, rotates it with
//! the configured [`Algorithm`] and composites it centred on the current
//! curve point. The angle comes from the [`AngleSequencer`] in
//! [`Animation::Rotation`] mode and from the curve tangent in
//! [`Animation::Moving`] mode.

mod painter;
mod player;

pub use painter::{Painter, Rect, SpriteSink};
pub use player::{Player, StopHandle};

use crate::curve::{
    validate_point_count, AngleSequencer, BinomialTable, CurveConfig, CurveSampler, Point,
    MAX_CONTROL_POINTS, MIN_CONTROL_POINTS,
};
use crate::image::wheel::color_wheel;
use crate::image::{PixelBuffer, Rgba};
use crate::rotate::Algorithm;
use crate::trace::trace_event;
use crate::util::{SpinError, SpinResult};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

const CURVE_COLOR: Rgba = Rgba::BLACK;
const POINT_COLOR: Rgba = Rgba::opaque(0, 0, 255);
const SELECT_COLOR: Rgba = Rgba::opaque(255, 0, 0);
const POINT_SIZE: usize = 7;

/// What drives the sprite between frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Sprite stays on the curve cursor and spins through fixed angles.
    #[default]
    Rotation,
    /// Sprite travels along the curve, aligned with its tangent.
    Moving,
}

/// Scene geometry and behaviour.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub scene_width: usize,
    pub scene_height: usize,
    /// Sprite size; loaded images must already be scaled to it.
    pub image_width: usize,
    pub image_height: usize,
    /// Upper bound for `generate`; the binomial table is sized from it.
    pub max_points: usize,
    /// Control points of the curve created with the scene.
    pub initial_points: usize,
    /// Steps per revolution in rotation mode.
    pub angle_steps: usize,
    pub select_margin: i32,
    pub algorithm: Algorithm,
    pub animation: Animation,
    pub show_polyline: bool,
    /// Target time per frame for the player.
    pub frame_interval: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene_width: 800,
            scene_height: 800,
            image_width: 150,
            image_height: 150,
            max_points: MAX_CONTROL_POINTS,
            initial_points: MIN_CONTROL_POINTS,
            angle_steps: crate::curve::DEFAULT_ANGLE_STEPS,
            select_margin: 10,
            algorithm: Algorithm::Naive,
            animation: Animation::Rotation,
            show_polyline: true,
            frame_interval: Duration::from_millis(30),
        }
    }
}

/// Parses a user-entered control point count and checks it against `[3, max]`.
pub fn parse_point_count(text: &str, max: usize) -> SpinResult<usize> {
    let count = text
        .trim()
        .parse::<usize>()
        .map_err(|_| SpinError::InvalidInput("point count must be a positive integer"))?;
    validate_point_count(count, max)
}

/// Canvas, sprite and curve state for the spinning-sprite animation.
pub struct Scene {
    cfg: SceneConfig,
    canvas: PixelBuffer,
    image: PixelBuffer,
    loaded: bool,
    curve: CurveSampler,
    circle: AngleSequencer,
    last_angle: f32,
    dragging: bool,
}

impl Scene {
    /// Creates a scene with a random initial curve and no sprite.
    pub fn new(cfg: SceneConfig) -> SpinResult<Self> {
        Self::new_with_rng(cfg, &mut rand::rng())
    }

    /// Like `new`, drawing the initial control points from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(cfg: SceneConfig, rng: &mut R) -> SpinResult<Self> {
        validate_point_count(cfg.initial_points, cfg.max_points)?;
        let table = Arc::new(BinomialTable::new(cfg.max_points - 1)?);
        let extent = |v: usize| {
            u32::try_from(v).map_err(|_| SpinError::InvalidDimensions {
                width: cfg.scene_width,
                height: cfg.scene_height,
            })
        };
        let mut curve = CurveSampler::new(
            table,
            CurveConfig {
                extent_width: extent(cfg.scene_width)?,
                extent_height: extent(cfg.scene_height)?,
                select_margin: cfg.select_margin,
            },
        );
        curve.generate_with(rng, cfg.initial_points)?;

        let mut scene = Self {
            canvas: PixelBuffer::filled(cfg.scene_width, cfg.scene_height, Rgba::WHITE)?,
            image: PixelBuffer::filled(cfg.image_width, cfg.image_height, Rgba::WHITE)?,
            loaded: false,
            curve,
            circle: AngleSequencer::new(cfg.angle_steps)?,
            last_angle: 0.0,
            dragging: false,
            cfg,
        };
        scene.paint(false)?;
        Ok(scene)
    }

    /// Redraws the canvas; with `playing` the animation advances one step.
    pub fn paint(&mut self, playing: bool) -> SpinResult<()> {
        let sprite = match self.pose(playing) {
            Some((point, angle)) => Some(self.render_sprite(point, angle)?),
            None => None,
        };

        let mut painter = Painter::begin(&mut self.canvas);
        painter.fill(Rgba::WHITE);
        painter.polyline(self.curve.points(), CURVE_COLOR);
        if self.cfg.show_polyline {
            let controls = self.curve.control_points();
            painter.polyline(controls, CURVE_COLOR);
            for (idx, &p) in controls.iter().enumerate() {
                let color = if self.curve.selected() == Some(idx) {
                    SELECT_COLOR
                } else {
                    POINT_COLOR
                };
                painter.dot(p, POINT_SIZE, color);
            }
        }
        if let Some((sprite, rect)) = sprite {
            painter.place(&sprite, rect);
        }
        Ok(())
    }

    /// Current sprite position and angle, stepping the animation if playing.
    fn pose(&mut self, playing: bool) -> Option<(Point, f32)> {
        if !self.loaded {
            return None;
        }
        let (point, angle) = match self.cfg.animation {
            Animation::Rotation => {
                let point = self.curve.current()?;
                let angle = if playing {
                    self.circle.next()
                } else {
                    self.circle.current()
                };
                (point, angle)
            }
            Animation::Moving => {
                let point = if playing {
                    self.curve.next()?
                } else {
                    self.curve.current()?
                };
                // Coincident control points have no tangent; keep the last heading.
                let angle = self.curve.current_angle().unwrap_or(self.last_angle);
                (point, angle)
            }
        };
        self.last_angle = angle;
        Some((point, angle))
    }

    fn render_sprite(&self, point: Point, angle: f32) -> SpinResult<(PixelBuffer, Rect)> {
        let (w, h) = (self.image.width(), self.image.height());
        let sprite = self
            .cfg
            .algorithm
            .rotate(self.image.view(), 2 * w, 2 * h, angle, w / 2)?;
        Ok((sprite, Rect::centered(point, w, h)))
    }

    /// Selects the control point under `(x, y)` and repaints.
    pub fn select(&mut self, x: i32, y: i32) -> SpinResult<Option<usize>> {
        let hit = self.curve.select(x, y);
        self.paint(false)?;
        Ok(hit)
    }

    /// Drags the selected control point to `(x, y)` and repaints.
    pub fn drag(&mut self, x: i32, y: i32) -> SpinResult<()> {
        self.curve.drag(x, y)?;
        self.paint(false)
    }

    /// Regenerates the curve with `count` random control points.
    pub fn generate(&mut self, count: usize) -> SpinResult<()> {
        self.generate_with(&mut rand::rng(), count)
    }

    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> SpinResult<()> {
        let count = validate_point_count(count, self.cfg.max_points)?;
        self.curve.generate_with(rng, count)?;
        trace_event!("curve_generated", count = count);
        self.paint(false)
    }

    /// Regenerates from user text such as `"7"`; invalid input changes nothing.
    pub fn generate_from_str(&mut self, text: &str) -> SpinResult<()> {
        let count = parse_point_count(text, self.cfg.max_points)?;
        self.generate(count)
    }

    /// Installs a sprite of exactly the configured image size.
    pub fn load_image(&mut self, image: PixelBuffer) -> SpinResult<()> {
        if image.width() != self.cfg.image_width || image.height() != self.cfg.image_height {
            return Err(SpinError::InvalidDimensions {
                width: image.width(),
                height: image.height(),
            });
        }
        self.image = image;
        self.loaded = true;
        self.paint(false)
    }

    /// Loads a sprite from disk, scaled to the configured image size.
    #[cfg(feature = "image-io")]
    pub fn load_image_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> SpinResult<()> {
        let image =
            crate::image::io::load_rgba_image(path, self.cfg.image_width, self.cfg.image_height)?;
        self.load_image(image)
    }

    /// Replaces the sprite with the procedural colour wheel.
    pub fn create_color_wheel(&mut self) -> SpinResult<()> {
        let wheel = color_wheel(self.cfg.image_width, self.cfg.image_height)?;
        self.load_image(wheel)
    }

    /// Drops the sprite; the scene shows only the curve afterwards.
    pub fn clear_image(&mut self) -> SpinResult<()> {
        self.image.fill(Rgba::WHITE);
        self.loaded = false;
        self.paint(false)
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.cfg.algorithm = algorithm;
    }

    pub fn set_animation(&mut self, animation: Animation) {
        self.cfg.animation = animation;
    }

    pub fn set_polyline_visible(&mut self, visible: bool) -> SpinResult<()> {
        if self.cfg.show_polyline == visible {
            return Ok(());
        }
        self.cfg.show_polyline = visible;
        self.paint(false)
    }

    pub fn start_dragging(&mut self) {
        self.dragging = true;
    }

    pub fn stop_dragging(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn algorithm(&self) -> Algorithm {
        self.cfg.algorithm
    }

    pub fn animation(&self) -> Animation {
        self.cfg.animation
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn curve(&self) -> &CurveSampler {
        &self.curve
    }

    pub fn angles(&self) -> &AngleSequencer {
        &self.circle
    }

    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }
}
