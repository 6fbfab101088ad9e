// Separable Gaussian blur for frames and masks.
// Two passes (horizontal into a scratch buffer, then vertical into the output),
// mirroring edges as reflect-101 so borders do not darken.

use image::{GrayImage, RgbImage};

use crate::config::BlurParams;
use crate::types::GradientMask;

/// Normalized 1-D Gaussian weights; applied along x then y.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    pub radius: usize,
    pub weights: Vec<f32>, // 2*radius+1 entries, summing to 1.0
}

impl GaussianKernel {
    /// Build a `size`-tap kernel. Even sizes are bumped to the next odd size.
    /// A non-positive `sigma` is derived from the size:
    /// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    pub fn new(size: u32, sigma: f32) -> Self {
        let size = (size.max(1) | 1) as usize;
        let radius = size / 2;
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
        };
        let s2 = 2.0 * sigma * sigma;

        let mut weights: Vec<f32> = (0..size)
            .map(|i| {
                let d = i as f32 - radius as f32;
                (-(d * d) / s2).exp()
            })
            .collect();
        let sum: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }

        Self { radius, weights }
    }

    pub fn from_params(params: &BlurParams) -> Self {
        Self::new(params.kernel_size, params.sigma)
    }
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge sample.
#[inline]
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = i;
    while i < 0 || i > last {
        i = if i < 0 { -i } else { 2 * last - i };
    }
    i as usize
}

/// Blur an interleaved buffer of `channels` planes.
fn blur_interleaved(
    src: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &GaussianKernel,
) -> Vec<f32> {
    let r = kernel.radius as isize;
    let mut tmp = vec![0.0f32; src.len()];
    let mut dst = vec![0.0f32; src.len()];

    // Pass 1: horizontal, src -> tmp
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0;
                for (k, w) in kernel.weights.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - r, width);
                    acc += w * src[(row + sx) * channels + c];
                }
                tmp[(row + x) * channels + c] = acc;
            }
        }
    }

    // Pass 2: vertical, tmp -> dst
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0;
                for (k, w) in kernel.weights.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - r, height);
                    acc += w * tmp[(sy * width + x) * channels + c];
                }
                dst[(y * width + x) * channels + c] = acc;
            }
        }
    }

    dst
}

/// Blur an RGB frame; channels are rounded and saturated back to u8.
pub fn gaussian_blur_rgb(src: &RgbImage, kernel: &GaussianKernel) -> RgbImage {
    let (w, h) = src.dimensions();
    let planes: Vec<f32> = src.as_raw().iter().map(|&v| v as f32).collect();
    let out = blur_interleaved(&planes, w as usize, h as usize, 3, kernel);
    let raw = out
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    // Length is w*h*3 by construction.
    RgbImage::from_raw(w, h, raw).unwrap_or_else(|| RgbImage::new(w, h))
}

/// Blur a 0/255 mask into continuous blend weights in [0,1].
pub fn gaussian_blur_mask(mask: &GrayImage, kernel: &GaussianKernel) -> GradientMask {
    let (w, h) = mask.dimensions();
    let planes: Vec<f32> = mask.as_raw().iter().map(|&v| v as f32).collect();
    let alpha = blur_interleaved(&planes, w as usize, h as usize, 1, kernel)
        .into_iter()
        .map(|v| (v / 255.0).clamp(0.0, 1.0))
        .collect();
    GradientMask {
        width: w,
        height: h,
        alpha,
    }
}
