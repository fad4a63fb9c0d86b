//! Procedural colour-wheel sprite used when no image has been loaded.
//!
//! Hue sweeps 0..360 degrees across the width. The height is split into four
//! bands of decreasing value (1.0, 0.7, 0.5, 0.3); within each band the
//! saturation falls from 1 towards 0 and resets at the next band.

use crate::image::{PixelBuffer, Rgba};
use crate::util::SpinResult;

const BAND_VALUES: [f32; 4] = [1.0, 0.7, 0.5, 0.3];

/// Renders an opaque colour wheel of the given size.
pub fn color_wheel(width: usize, height: usize) -> SpinResult<PixelBuffer> {
    let mut out = PixelBuffer::new(width, height)?;
    let hue_step = 360.0 / width as f32;
    let sat_step = BAND_VALUES.len() as f32 / height as f32;
    let band_rows = height as f32 / BAND_VALUES.len() as f32;

    let mut band = 0usize;
    let mut band_row = 0usize;
    let mut saturation = 1.0f32;
    for y in 0..height {
        if band_row as f32 > band_rows {
            band_row = 0;
            saturation = 1.0;
            band = (band + 1).min(BAND_VALUES.len() - 1);
        }
        let value = BAND_VALUES[band];
        for x in 0..width {
            out.set(x, y, hsv_to_rgb(x as f32 * hue_step, saturation, value));
        }
        saturation = (saturation - sat_step).max(0.0);
        band_row += 1;
    }
    Ok(out)
}

/// Converts hue in degrees, saturation and value in [0, 1] to opaque RGB.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgba {
    let (r, g, b) = if saturation <= 0.0 {
        (value, value, value)
    } else {
        let sector = hue / 60.0;
        let f = sector - sector.floor();
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        match (sector.floor() as i64).rem_euclid(6) {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        }
    };
    let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba::opaque(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::{color_wheel, hsv_to_rgb};
    use crate::image::Rgba;

    #[test]
    fn primary_hues_map_to_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgba::opaque(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgba::opaque(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgba::opaque(0, 0, 255));
        assert_eq!(hsv_to_rgb(77.0, 0.0, 0.5), Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn wheel_is_opaque_and_darkens_by_band() {
        let wheel = color_wheel(40, 40).unwrap();
        assert!(wheel.pixels().iter().all(|px| px.a == 255));
        assert_eq!(wheel.get(0, 0), Some(Rgba::opaque(255, 0, 0)));
        let top = wheel.get(0, 0).unwrap();
        let bottom = wheel.get(0, 39).unwrap();
        assert!(bottom.r < top.r);
    }
}
