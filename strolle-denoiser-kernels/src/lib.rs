//! Per-pixel algorithms used by Strolle's denoiser.
//!
//! Everything here works on a single pixel at a time and reads its inputs
//! through closures, so it's up to the caller to decide how buffers are laid
//! out and how the work gets dispatched.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]

mod object;
mod reprojection;
mod spatial_filter;
mod temporal_accumulator;
mod utils;
mod viewport;

pub use self::object::*;
pub use self::reprojection::*;
pub use self::spatial_filter::*;
pub use self::temporal_accumulator::*;
pub use self::utils::*;
pub use self::viewport::*;

/// Radius of the joint-bilateral filter's window (so 33x33 pixels).
pub const SPATIAL_FILTER_RADIUS: u32 = 16;

/// Radius of the neighbourhood used to estimate color statistics when
/// clamping history (so 7x7 pixels).
pub const COLOR_BOX_RADIUS: u32 = 3;
