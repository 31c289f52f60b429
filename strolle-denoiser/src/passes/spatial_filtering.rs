use glam::Vec3;

use crate::kernels::{SpatialFilter, SpatialFilterParams, SPATIAL_FILTER_RADIUS};
use crate::{utils, Buffer2D, Frame};

#[derive(Debug)]
pub struct SpatialFilteringPass {
    radius: u32,
}

impl SpatialFilteringPass {
    pub fn new() -> Self {
        log::debug!("Initializing pass: spatial-filtering");

        Self {
            radius: SPATIAL_FILTER_RADIUS,
        }
    }

    /// Returns `frame`'s beauty buffer, filtered.
    pub fn run(
        &self,
        frame: &Frame,
        params: SpatialFilterParams,
    ) -> Buffer2D<Vec3> {
        let filter = SpatialFilter {
            viewport: frame.viewport(),
            params,
            radius: self.radius,
        };

        utils::measure("pass.spatial-filtering", || {
            Buffer2D::par_from_fn(frame.size(), |pos| {
                filter.run(pos, |pos| frame.surface(pos))
            })
        })
    }
}
