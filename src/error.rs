// Crate-wide error type. Every variant states *where* things went wrong.
use thiserror::Error;

use crate::topology::Region;

/// Failure reported by an external landmark detector.
pub type DetectorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    /// A region's topology table yielded no indices. Fatal at startup.
    #[error("region {region:?} has no landmark indices")]
    EmptyRegion { region: Region },

    /// Fewer than three usable points for a region on one face.
    #[error("region {region:?} needs at least 3 points for a hull, found {found}")]
    InsufficientPoints { region: Region, found: usize },

    #[error("landmark detector failed: {0}")]
    Detector(#[source] DetectorError),

    #[error("{what}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        what: &'static str,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures that only cost one face/region and never the frame.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InsufficientPoints { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
