//! RGBA pixel buffers and borrowed views.
//!
//! `PixelBuffer` owns a contiguous row-major grid of [`Rgba`] pixels.
//! `ImageView` borrows one read-only; rotation passes read from a view and
//! write into a fresh buffer, so a pass never aliases its own output.

use crate::util::{SpinError, SpinResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod wheel;

/// One 8-bit-per-channel pixel with straight (non-premultiplied) alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True when the pixel carries no coverage at all.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composites `self` over `dst` (source-over, straight alpha).
    pub fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let sa = f32::from(a) / 255.0;
                let da = f32::from(dst.a) / 255.0;
                let out_a = sa + da * (1.0 - sa);
                let mix = |s: u8, d: u8| {
                    let v = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
                    v.round().clamp(0.0, 255.0) as u8
                };
                Rgba::new(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
                )
            }
        }
    }
}

/// Borrowed read-only view of a contiguous RGBA grid.
#[derive(Copy, Clone)]
pub struct ImageView<'a> {
    data: &'a [Rgba],
    width: usize,
    height: usize,
}

impl<'a> ImageView<'a> {
    /// Wraps a row-major slice of exactly `width * height` pixels.
    pub fn from_slice(data: &'a [Rgba], width: usize, height: usize) -> SpinResult<Self> {
        let needed = pixel_count(width, height)?;
        if data.len() < needed {
            return Err(SpinError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data: &data[..needed],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing pixels in row-major order.
    pub fn as_slice(&self) -> &'a [Rgba] {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns the pixel at signed coordinates, transparent outside the grid.
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> Rgba {
        if x < 0 || y < 0 {
            return Rgba::TRANSPARENT;
        }
        self.get(x as usize, y as usize).unwrap_or(Rgba::TRANSPARENT)
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Copies the view into an owned buffer.
    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            data: self.data.to_vec(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned, fixed-size RGBA pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer.
    pub fn new(width: usize, height: usize) -> SpinResult<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Creates a buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> SpinResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            data: vec![color; len],
            width,
            height,
        })
    }

    /// Takes ownership of row-major pixels; the length must match exactly.
    pub fn from_pixels(data: Vec<Rgba>, width: usize, height: usize) -> SpinResult<Self> {
        let needed = pixel_count(width, height)?;
        if data.len() < needed {
            return Err(SpinError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(SpinError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a buffer from interleaved `r, g, b, a` bytes.
    pub fn from_rgba_bytes(bytes: &[u8], width: usize, height: usize) -> SpinResult<Self> {
        if bytes.len() % 4 != 0 {
            return Err(SpinError::InvalidInput(
                "rgba byte buffer length must be a multiple of 4",
            ));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::from_pixels(data, width, height)
    }

    /// Returns the pixels as interleaved `r, g, b, a` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| [px.r, px.g, px.b, px.a]).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        self.view().get(x, y)
    }

    /// Writes a pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = color;
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.data.fill(color);
    }

    /// Returns a borrowed view of the buffer.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

fn pixel_count(width: usize, height: usize) -> SpinResult<usize> {
    if width == 0 || height == 0 {
        return Err(SpinError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(SpinError::InvalidDimensions { width, height })
}
