// Color compositing and gradient merge.
// Both functions read their inputs and return a fresh frame; the caller's
// original frame is never written to, so untouched pixels stay byte-identical.

use image::{GrayImage, RgbImage};

use crate::blur::{GaussianKernel, gaussian_blur_mask, gaussian_blur_rgb};
use crate::config::BlurParams;
use crate::error::{Error, Result};
use crate::mask::RegionMask;
use crate::types::Color;

fn check_dims(what: &'static str, expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Add `color * intensity` to every pixel under `mask`, saturating at 255.
///
/// Pixels outside the mask are copied unchanged. `intensity` is not
/// validated: 0 is a no-op and values above 1 oversaturate.
pub fn composite(
    frame: &RgbImage,
    mask: &GrayImage,
    color: Color,
    intensity: f32,
) -> Result<RgbImage> {
    check_dims("composite: mask vs frame", frame.dimensions(), mask.dimensions())?;

    let layer = color.to_pixel();
    let mut out = frame.clone();
    for (px, m) in out.pixels_mut().zip(mask.pixels()) {
        if m[0] == 0 {
            continue;
        }
        for c in 0..3 {
            let v = px[c] as f32 + layer[c] as f32 * intensity;
            px[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

/// Feather `blended` back into `original` across the region edge.
///
/// The blended frame is softened with `blur`, the boundary mask with
/// `feather`; the latter becomes the per-pixel weight of the blurred
/// recolor. Pixels outside the hard mask are copied from `original`.
pub fn merge_with_gradient(
    blended: &RgbImage,
    original: &RgbImage,
    mask: &RegionMask,
    blur: &BlurParams,
    feather: &BlurParams,
) -> Result<RgbImage> {
    let dims = original.dimensions();
    check_dims("merge: blended vs original", dims, blended.dimensions())?;
    check_dims("merge: hard mask vs original", dims, mask.hard.dimensions())?;
    check_dims("merge: boundary mask vs original", dims, mask.boundary.dimensions())?;

    let softened = gaussian_blur_rgb(blended, &GaussianKernel::from_params(blur));
    let gradient = gaussian_blur_mask(&mask.boundary, &GaussianKernel::from_params(feather));

    let mut out = original.clone();
    for (x, y, px) in out.enumerate_pixels_mut() {
        if !mask.in_hard(x, y) {
            continue; // hard cutoff: keep the original exactly
        }
        let a = gradient.weight(x, y).clamp(0.0, 1.0);
        let inv = 1.0 - a;
        let s = softened.get_pixel(x, y);
        for c in 0..3 {
            let v = s[c] as f32 * a + px[c] as f32 * inv;
            px[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}
