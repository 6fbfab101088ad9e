//! Per-frame orchestration: detect, then mask, composite and merge each
//! configured region on each face.

use std::sync::Arc;

use image::RgbImage;
use log::{debug, warn};

use crate::composite::{composite, merge_with_gradient};
use crate::config::{PipelineConfig, RegionStyle};
use crate::detector::LandmarkDetector;
use crate::error::{Error, Result};
use crate::mask::build_mask;
use crate::topology::RegionIndexRegistry;
use crate::types::FaceLandmarks;

/// Stateless across calls; the registry is shared read-only, so one pipeline
/// can serve concurrent requests from several threads.
#[derive(Debug, Clone)]
pub struct FramePipeline {
    registry: Arc<RegionIndexRegistry>,
    config: PipelineConfig,
}

impl FramePipeline {
    pub fn new(registry: Arc<RegionIndexRegistry>, config: PipelineConfig) -> Self {
        Self { registry, config }
    }

    /// Registry from the built-in face-mesh tables with the default lips style.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            Arc::new(RegionIndexRegistry::new()?),
            PipelineConfig::default(),
        ))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &RegionIndexRegistry {
        &self.registry
    }

    /// Recolor every configured region on every detected face.
    ///
    /// No faces returns a copy of `frame`. Detector failures propagate as
    /// `Error::Detector`; a face/region with too few points is skipped.
    pub fn process_frame<D>(&self, frame: &RgbImage, detector: &D) -> Result<RgbImage>
    where
        D: LandmarkDetector + ?Sized,
    {
        let faces = detector.detect(frame).map_err(Error::Detector)?;
        if faces.is_empty() {
            debug!("no face detected, frame passed through");
            return Ok(frame.clone());
        }

        let mut current = frame.clone();
        for (face_no, face) in faces.iter().enumerate() {
            debug!("face {face_no}: {} landmarks", face.len());
            current = self.process_face(&current, face)?;
        }
        Ok(current)
    }

    /// Apply all configured regions to one face, in configuration order.
    pub fn process_face(&self, frame: &RgbImage, face: &FaceLandmarks) -> Result<RgbImage> {
        let mut current = frame.clone();
        for style in &self.config.regions {
            match self.apply_region(&current, face, style) {
                Ok(next) => current = next,
                Err(e) if e.is_recoverable() => warn!("skipping region: {e}"),
                Err(e) => return Err(e),
            }
        }
        Ok(current)
    }

    /// Recolor one region of one face, returning a new frame.
    pub fn apply_region(
        &self,
        frame: &RgbImage,
        face: &FaceLandmarks,
        style: &RegionStyle,
    ) -> Result<RgbImage> {
        let (w, h) = frame.dimensions();
        let indices = self.registry.indices(style.region);
        let points = face.pixel_points(indices, w, h);
        let mask = build_mask(style.region, &points, w, h, style.dilate_radius)?;

        let blended = composite(frame, &mask.boundary, style.color, style.intensity)?;
        merge_with_gradient(&blended, frame, &mask, &style.blur, &style.feather)
    }
}
