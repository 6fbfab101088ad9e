// The landmark detector seam. Detection itself lives outside this crate;
// anything that turns a frame into per-face normalized points plugs in here.

use image::RgbImage;

use crate::error::{DetectorError, Error, Result};
use crate::types::FaceLandmarks;

pub trait LandmarkDetector {
    /// Zero or more faces, each with points normalized to the frame size.
    /// An empty result means "no face", which is not an error.
    fn detect(&self, frame: &RgbImage) -> std::result::Result<Vec<FaceLandmarks>, DetectorError>;
}

/// Returns the same faces for every frame. Used for fixtures and replaying
/// landmarks captured elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    faces: Vec<FaceLandmarks>,
}

impl StaticDetector {
    pub fn new(faces: Vec<FaceLandmarks>) -> Self {
        Self { faces }
    }

    /// Parse a JSON array of faces, each `{ "points": [{ "x": .., "y": .. }, ..] }`.
    pub fn from_json(text: &str) -> Result<Self> {
        let faces = serde_json::from_str(text)
            .map_err(|e| Error::Config(format!("parse landmark fixture: {e}")))?;
        Ok(Self { faces })
    }
}

impl LandmarkDetector for StaticDetector {
    fn detect(&self, _frame: &RgbImage) -> std::result::Result<Vec<FaceLandmarks>, DetectorError> {
        Ok(self.faces.clone())
    }
}
