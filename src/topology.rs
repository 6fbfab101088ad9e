//! Face-mesh region topology and the per-session landmark index registry.
//!
//! The edge tables below are the connectivity of the 468-point face mesh
//! (478 with refined irises). Each region is outlined by a list of index
//! pairs; only the set of indices matters for masking, so the registry
//! flattens and deduplicates them once at startup.

use std::collections::BTreeSet;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of landmarks in the base face mesh.
pub const FACE_MESH_LANDMARKS: usize = 468;

pub const LIPS_EDGES: &[(usize, usize)] = &[
    (61, 146), (146, 91), (91, 181), (181, 84), (84, 17),
    (17, 314), (314, 405), (405, 321), (321, 375), (375, 291),
    (61, 185), (185, 40), (40, 39), (39, 37), (37, 0),
    (0, 267), (267, 269), (269, 270), (270, 409), (409, 291),
    (78, 95), (95, 88), (88, 178), (178, 87), (87, 14),
    (14, 317), (317, 402), (402, 318), (318, 324), (324, 308),
    (78, 191), (191, 80), (80, 81), (81, 82), (82, 13),
    (13, 312), (312, 311), (311, 310), (310, 415), (415, 308),
];

pub const LEFT_EYE_EDGES: &[(usize, usize)] = &[
    (263, 249), (249, 390), (390, 373), (373, 374), (374, 380),
    (380, 381), (381, 382), (382, 362), (263, 466), (466, 388),
    (388, 387), (387, 386), (386, 385), (385, 384), (384, 398),
    (398, 362),
];

pub const RIGHT_EYE_EDGES: &[(usize, usize)] = &[
    (33, 7), (7, 163), (163, 144), (144, 145), (145, 153),
    (153, 154), (154, 155), (155, 133), (33, 246), (246, 161),
    (161, 160), (160, 159), (159, 158), (158, 157), (157, 173),
    (173, 133),
];

pub const LEFT_EYEBROW_EDGES: &[(usize, usize)] = &[
    (276, 283), (283, 282), (282, 295), (295, 285),
    (300, 293), (293, 334), (334, 296), (296, 336),
];

pub const RIGHT_EYEBROW_EDGES: &[(usize, usize)] = &[
    (46, 53), (53, 52), (52, 65), (65, 55),
    (70, 63), (63, 105), (105, 66), (66, 107),
];

const REGION_COUNT: usize = 5;

/// Facial regions the registry knows how to outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Lips,
    LeftEye,
    RightEye,
    LeftEyebrow,
    RightEyebrow,
}

impl Region {
    pub const ALL: [Region; REGION_COUNT] = [
        Region::Lips,
        Region::LeftEye,
        Region::RightEye,
        Region::LeftEyebrow,
        Region::RightEyebrow,
    ];

    pub fn edges(self) -> &'static [(usize, usize)] {
        match self {
            Region::Lips => LIPS_EDGES,
            Region::LeftEye => LEFT_EYE_EDGES,
            Region::RightEye => RIGHT_EYE_EDGES,
            Region::LeftEyebrow => LEFT_EYEBROW_EDGES,
            Region::RightEyebrow => RIGHT_EYEBROW_EDGES,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Every index appearing in any edge pair, deduplicated and sorted ascending.
///
/// The sort gives downstream hull construction a reproducible point order.
/// An empty table is left to the caller to reject (see [`RegionIndexRegistry`]).
pub fn build_region_indices(edges: &[(usize, usize)]) -> Vec<usize> {
    edges
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Read-only index sets for all regions, built once per session.
///
/// Share it by reference (or `Arc`) across workers; it is never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct RegionIndexRegistry {
    indices: [Vec<usize>; REGION_COUNT],
}

impl RegionIndexRegistry {
    /// Build from the embedded face-mesh tables.
    pub fn new() -> Result<Self> {
        Self::from_tables(|region| region.edges())
    }

    /// Build from caller-supplied tables. Fails with `EmptyRegion` if any
    /// table yields no indices.
    pub fn from_tables<'a, F>(mut table: F) -> Result<Self>
    where
        F: FnMut(Region) -> &'a [(usize, usize)],
    {
        let mut indices: [Vec<usize>; REGION_COUNT] = Default::default();
        for region in Region::ALL {
            let set = build_region_indices(table(region));
            if set.is_empty() {
                return Err(Error::EmptyRegion { region });
            }
            info!("registered {:?}: {} landmark indices", region, set.len());
            indices[region.slot()] = set;
        }
        Ok(Self { indices })
    }

    pub fn indices(&self, region: Region) -> &[usize] {
        &self.indices[region.slot()]
    }
}
