//! Spatio-temporal denoiser for path-traced frames.
//!
//! Frames are filtered with a joint-bilateral filter guided by the G-buffer
//! and then blended with the history reprojected from the previous frame:
//!
//! ```no_run
//! use strolle_denoiser::{Denoiser, Frame, Result};
//!
//! fn render(denoiser: &mut Denoiser, frame: Frame) -> Result<()> {
//!     let colors = denoiser.process_frame(frame)?;
//!     let _rgb: &[f32] = colors.as_floats();
//!
//!     Ok(())
//! }
//! ```

mod buffer;
mod config;
mod denoiser;
mod double_buffered;
mod error;
mod frame;
mod passes;
mod transforms;
mod utils;

pub use strolle_denoiser_kernels as kernels;

pub use self::buffer::*;
pub use self::config::*;
pub use self::denoiser::*;
pub(crate) use self::double_buffered::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::transforms::*;
