//! # lip-tint
//!
//! Soft-edged recoloring of facial regions (lips by default) from face-mesh
//! landmarks.
//!
//! For each face a detector reports, and each configured region:
//!
//! 1. Take the region's landmark indices from the [`RegionIndexRegistry`]
//!    and scale the normalized points to pixels.
//! 2. Fill their convex hull into a hard mask and dilate it into a boundary
//!    mask ([`build_mask`]).
//! 3. Add the region color under the boundary mask ([`composite`]).
//! 4. Blur the result, blur the boundary mask into a weight map and mix the
//!    two back into the original, inside the hard mask only
//!    ([`merge_with_gradient`]).
//!
//! Landmark detection is not part of this crate; implement
//! [`LandmarkDetector`] for whatever model produces the points.
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use lip_tint::{FramePipeline, StaticDetector};
//!
//! let pipeline = FramePipeline::with_defaults().unwrap();
//! let frame = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
//!
//! // No faces: the frame comes back unchanged.
//! let out = pipeline.process_frame(&frame, &StaticDetector::new(vec![])).unwrap();
//! assert_eq!(out, frame);
//! ```

mod blur;
mod composite;
mod config;
mod detector;
mod error;
mod mask;
mod pipeline;
pub mod topology;
mod types;

pub use blur::{GaussianKernel, gaussian_blur_mask, gaussian_blur_rgb};
pub use composite::{composite, merge_with_gradient};
pub use config::{BlurParams, PipelineConfig, RegionStyle};
pub use detector::{LandmarkDetector, StaticDetector};
pub use error::{DetectorError, Error, Result};
pub use mask::{MASK_ON, RegionMask, build_mask, coverage};
pub use pipeline::FramePipeline;
pub use topology::{Region, RegionIndexRegistry, build_region_indices};
pub use types::{Color, FaceLandmarks, GradientMask, LandmarkPoint};
