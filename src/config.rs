//! Per-region styling and pipeline configuration.
//!
//! Defaults reproduce the stock lipstick look: red at 40% intensity, a 7-tap
//! content blur with sigma 10 and a 15-tap feather with size-derived sigma.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::topology::Region;
use crate::types::Color;

/// Gaussian blur settings. `sigma <= 0` derives sigma from `kernel_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurParams {
    pub kernel_size: u32,
    pub sigma: f32,
}

impl BlurParams {
    pub const fn new(kernel_size: u32, sigma: f32) -> Self {
        Self { kernel_size, sigma }
    }
}

/// How one region is recolored on every face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionStyle {
    pub region: Region,
    pub color: Color,
    /// Weight of the color layer; 0 is a no-op, above 1 oversaturates.
    pub intensity: f32,
    /// Softens the recolored content.
    pub blur: BlurParams,
    /// Softens the mask edge used for the final mix.
    pub feather: BlurParams,
    /// Chebyshev radius of the boundary dilation (1 = 3x3 square).
    pub dilate_radius: u8,
}

impl RegionStyle {
    pub fn lips(color: Color) -> Self {
        Self {
            region: Region::Lips,
            color,
            ..Self::default()
        }
    }
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            region: Region::Lips,
            color: Color::rgb(255, 0, 0),
            intensity: 0.4,
            blur: BlurParams::new(7, 10.0),
            feather: BlurParams::new(15, 0.0),
            dilate_radius: 1,
        }
    }
}

/// Regions to composite, applied in order so later ones land on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub regions: Vec<RegionStyle>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            regions: vec![RegionStyle::default()],
        }
    }
}

impl PipelineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(format!("parse pipeline config: {e}")))
    }
}
