// Region masks: convex hull of a landmark set, filled, then dilated.

use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometry::convex_hull;
use imageproc::morphology::dilate;
use imageproc::point::Point;

use crate::error::{Error, Result};
use crate::topology::Region;

pub const MASK_ON: u8 = 255;

/// Hard and dilated masks for one region on one face, both frame-sized.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMask {
    /// Filled convex hull (0 or 255).
    pub hard: GrayImage,
    /// `hard` grown outward by the dilation radius (still 0 or 255).
    pub boundary: GrayImage,
}

impl RegionMask {
    pub fn dimensions(&self) -> (u32, u32) {
        self.hard.dimensions()
    }

    #[inline]
    pub fn in_hard(&self, x: u32, y: u32) -> bool {
        self.hard.get_pixel(x, y)[0] != 0
    }
}

/// Number of non-zero pixels in a mask.
pub fn coverage(mask: &GrayImage) -> usize {
    mask.as_raw().iter().filter(|&&v| v != 0).count()
}

/// Build the hard and boundary masks for `points` on a `width`x`height` frame.
///
/// The hull is taken over the distinct points; fewer than three distinct
/// points, or a hull that collapses below three vertices, yields
/// `InsufficientPoints` for `region`.
pub fn build_mask(
    region: Region,
    points: &[Point<i32>],
    width: u32,
    height: u32,
    dilate_radius: u8,
) -> Result<RegionMask> {
    let mut distinct = points.to_vec();
    distinct.sort_by_key(|p| (p.x, p.y));
    distinct.dedup();
    if distinct.len() < 3 {
        return Err(Error::InsufficientPoints {
            region,
            found: distinct.len(),
        });
    }

    let hull = convex_hull(&distinct[..]);
    if hull.len() < 3 {
        return Err(Error::InsufficientPoints {
            region,
            found: hull.len(),
        });
    }

    let mut hard = GrayImage::new(width, height);
    draw_polygon_mut(&mut hard, &hull, Luma([MASK_ON]));

    let boundary = dilate(&hard, Norm::LInf, dilate_radius);

    Ok(RegionMask { hard, boundary })
}
