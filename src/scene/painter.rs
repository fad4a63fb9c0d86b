//! Software drawing onto a scene canvas.

use crate::curve::Point;
use crate::image::{PixelBuffer, Rgba};

/// Axis-aligned placement rectangle in canvas coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Rectangle spanning `[center - half, center + half)` on both axes.
    pub fn centered(center: Point, half_width: usize, half_height: usize) -> Self {
        Self {
            x: i64::from(center.x) - half_width as i64,
            y: i64::from(center.y) - half_height as i64,
            width: half_width * 2,
            height: half_height * 2,
        }
    }
}

/// Receiver of rotated sprites.
pub trait SpriteSink {
    /// Composites `sprite` into `rect`, scaling with nearest-neighbour
    /// sampling when the sizes differ. Parts outside the sink are clipped.
    fn place(&mut self, sprite: &PixelBuffer, rect: Rect);
}

/// Drawing context bound to one canvas.
///
/// The painter mutably borrows the canvas, so it is always released before
/// the canvas can be read, replaced or dropped.
pub struct Painter<'a> {
    canvas: &'a mut PixelBuffer,
}

impl<'a> Painter<'a> {
    pub fn begin(canvas: &'a mut PixelBuffer) -> Self {
        Self { canvas }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.canvas.fill(color);
    }

    /// Blends one pixel over the canvas; off-canvas pixels are dropped.
    pub fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if let Some(dst) = self.canvas.get(x, y) {
            self.canvas.set(x, y, color.over(dst));
        }
    }

    /// Square dot of side `size` centred on `center`.
    pub fn dot(&mut self, center: Point, size: usize, color: Rgba) {
        let half = (size / 2) as i64;
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        for y in cy - half..cy - half + size as i64 {
            for x in cx - half..cx - half + size as i64 {
                self.plot(x, y, color);
            }
        }
    }

    /// One-pixel Bresenham line, both endpoints included.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba) {
        let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn polyline(&mut self, points: &[Point], color: Rgba) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }
}

impl SpriteSink for Painter<'_> {
    fn place(&mut self, sprite: &PixelBuffer, rect: Rect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let sprite_view = sprite.view();
        for ry in 0..rect.height {
            let sy = ry * sprite.height() / rect.height;
            for rx in 0..rect.width {
                let sx = rx * sprite.width() / rect.width;
                if let Some(px) = sprite_view.get(sx, sy) {
                    if !px.is_transparent() {
                        self.plot(rect.x + rx as i64, rect.y + ry as i64, px);
                    }
                }
            }
        }
    }
}

impl SpriteSink for PixelBuffer {
    fn place(&mut self, sprite: &PixelBuffer, rect: Rect) {
        Painter::begin(self).place(sprite, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::{Painter, Rect, SpriteSink};
    use crate::curve::Point;
    use crate::image::{PixelBuffer, Rgba};

    #[test]
    fn centered_rect_is_twice_the_half_extent() {
        let rect = Rect::centered(Point::new(10, 4), 3, 5);
        assert_eq!(
            rect,
            Rect {
                x: 7,
                y: -1,
                width: 6,
                height: 10
            }
        );
    }

    #[test]
    fn line_includes_both_endpoints_and_clips() {
        let mut canvas = PixelBuffer::filled(8, 8, Rgba::WHITE).unwrap();
        let mut painter = Painter::begin(&mut canvas);
        painter.line(Point::new(1, 1), Point::new(6, 3), Rgba::BLACK);
        painter.line(Point::new(-5, 7), Point::new(20, 7), Rgba::BLACK);
        assert_eq!(canvas.get(1, 1), Some(Rgba::BLACK));
        assert_eq!(canvas.get(6, 3), Some(Rgba::BLACK));
        assert!((0..8).all(|x| canvas.get(x, 7) == Some(Rgba::BLACK)));
    }

    #[test]
    fn place_scales_and_skips_transparent_pixels() {
        let mut sprite = PixelBuffer::filled(2, 2, Rgba::BLACK).unwrap();
        sprite.set(1, 1, Rgba::TRANSPARENT);
        let mut canvas = PixelBuffer::filled(6, 6, Rgba::WHITE).unwrap();
        canvas.place(
            &sprite,
            Rect {
                x: 1,
                y: 1,
                width: 4,
                height: 4,
            },
        );
        assert_eq!(canvas.get(1, 1), Some(Rgba::BLACK));
        assert_eq!(canvas.get(4, 2), Some(Rgba::BLACK));
        assert_eq!(canvas.get(3, 3), Some(Rgba::WHITE));
        assert_eq!(canvas.get(4, 4), Some(Rgba::WHITE));
        assert_eq!(canvas.get(0, 0), Some(Rgba::WHITE));
    }
}
