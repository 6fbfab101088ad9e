// Core value types shared by the mask builder, compositor and pipeline.

use image::Rgb;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// Overlay tint, stored as RGB to match `image::RgbImage` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from an OpenCV-style BGR triple, e.g. `(0, 0, 255)` is red.
    pub const fn from_bgr(b: u8, g: u8, r: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

/// One landmark in normalized [0,1] image coordinates, as a detector emits it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale to pixel coordinates; truncates toward zero like an integer cast.
    pub fn to_pixel(self, width: u32, height: u32) -> Point<i32> {
        Point::new(
            (self.x * width as f32) as i32,
            (self.y * height as f32) as i32,
        )
    }
}

/// Landmarks of one detected face, indexed by the mesh topology numbering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub points: Vec<LandmarkPoint>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pixel coordinates for `indices`, in the order given.
    /// Indices this face does not have are skipped.
    pub fn pixel_points(&self, indices: &[usize], width: u32, height: u32) -> Vec<Point<i32>> {
        indices
            .iter()
            .filter_map(|&i| self.points.get(i))
            .map(|p| p.to_pixel(width, height))
            .collect()
    }
}

/// Per-pixel blend weight in [0,1]; 1 = take the recolored pixel, 0 = keep the original.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMask {
    pub width: u32,
    pub height: u32,
    pub alpha: Vec<f32>, // length = width * height, clamped to [0.0, 1.0]
}

impl GradientMask {
    #[inline]
    pub fn weight(&self, x: u32, y: u32) -> f32 {
        self.alpha[(y * self.width + x) as usize]
    }
}
