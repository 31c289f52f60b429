mod reprojection;
mod spatial_filtering;
mod temporal_accumulation;

pub use self::reprojection::*;
pub use self::spatial_filtering::*;
pub use self::temporal_accumulation::*;

#[derive(Debug)]
pub struct Passes {
    pub spatial_filtering: SpatialFilteringPass,
    pub reprojection: ReprojectionPass,
    pub temporal_accumulation: TemporalAccumulationPass,
}

impl Passes {
    pub fn new() -> Self {
        Self {
            spatial_filtering: SpatialFilteringPass::new(),
            reprojection: ReprojectionPass::new(),
            temporal_accumulation: TemporalAccumulationPass::new(),
        }
    }
}
