//! Loading and saving sprites via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::PixelBuffer;
use crate::util::{SpinError, SpinResult};
use image::imageops::FilterType;
use std::path::Path;

/// Converts an `image` RGBA buffer into a pixel buffer.
pub fn buffer_from_rgba_image(img: &image::RgbaImage) -> SpinResult<PixelBuffer> {
    PixelBuffer::from_rgba_bytes(img.as_raw(), img.width() as usize, img.height() as usize)
}

/// Converts a pixel buffer into an `image` RGBA buffer.
pub fn rgba_image_from_buffer(buffer: &PixelBuffer) -> SpinResult<image::RgbaImage> {
    let width = u32::try_from(buffer.width()).map_err(|_| SpinError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    })?;
    let height = u32::try_from(buffer.height()).map_err(|_| SpinError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    })?;
    image::RgbaImage::from_raw(width, height, buffer.to_rgba_bytes()).ok_or(
        SpinError::BufferTooSmall {
            needed: buffer.width() * buffer.height() * 4,
            got: 0,
        },
    )
}

/// Loads a PNG/JPEG from disk and scales it to exactly `width` x `height`.
///
/// The aspect ratio is not preserved; scaling uses a Lanczos3 filter.
pub fn load_rgba_image<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
) -> SpinResult<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(SpinError::InvalidDimensions { width, height });
    }
    let img = image::open(path).map_err(|err| SpinError::ImageIo {
        reason: err.to_string(),
    })?;
    let scaled = img.resize_exact(width as u32, height as u32, FilterType::Lanczos3);
    buffer_from_rgba_image(&scaled.to_rgba8())
}

/// Writes a buffer to disk; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> SpinResult<()> {
    let img = rgba_image_from_buffer(buffer)?;
    img.save(path).map_err(|err| SpinError::ImageIo {
        reason: err.to_string(),
    })
}
