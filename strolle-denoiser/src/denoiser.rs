use derivative::Derivative;
use glam::{UVec2, Vec3};
use log::{debug, info, warn};

use crate::passes::Passes;
use crate::{Buffer2D, DenoiserConfig, DoubleBuffered, Error, Frame, Result};

/// Spatio-temporal denoiser of a sequence of frames.
///
/// Each frame gets filtered spatially, after which (starting from the second
/// frame) it's blended with the history reprojected from the previous frame.
#[derive(Debug)]
pub struct Denoiser {
    config: DenoiserConfig,
    passes: Passes,

    /// `None` until the first frame gets processed; see [`Lifecycle`].
    history: Option<Box<History>>,

    frame: u32,
    stats: Option<FrameStats>,
}

impl Denoiser {
    pub fn new(config: DenoiserConfig) -> Result<Self> {
        config.validate()?;

        info!("Creating denoiser: {config}");

        Ok(Self {
            config,
            passes: Passes::new(),
            history: None,
            frame: 0,
            stats: None,
        })
    }

    pub fn config(&self) -> &DenoiserConfig {
        &self.config
    }

    /// Changes configuration used for the upcoming frames.
    ///
    /// Invalid configurations get rejected, keeping the current one.
    pub fn set_config(&mut self, config: DenoiserConfig) -> Result<()> {
        config.validate()?;

        debug!("Reconfiguring denoiser: {config}");

        self.config = config;

        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.history.is_some() {
            Lifecycle::Warm
        } else {
            Lifecycle::Cold
        }
    }

    /// Returns the number of frames processed so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the most recently accumulated colors.
    pub fn accumulated(&self) -> Option<&Buffer2D<Vec3>> {
        self.history.as_ref().map(|history| history.colors.curr())
    }

    /// Returns which pixels of the most recent frame got their history
    /// reprojected.
    pub fn validity(&self) -> Option<&Buffer2D<bool>> {
        self.history.as_ref().map(|history| &history.validity)
    }

    /// Returns statistics of the most recently processed frame.
    pub fn stats(&self) -> Option<FrameStats> {
        self.stats
    }

    /// Filters given frame spatially, without touching the history.
    pub fn filter(&self, frame: &Frame) -> Buffer2D<Vec3> {
        self.passes
            .spatial_filtering
            .run(frame, self.config.spatial_filter_params())
    }

    /// Denoises given frame and returns the accumulated colors.
    ///
    /// All frames must have the same size as the first one - when they don't,
    /// [`Error::ResolutionChanged`] is returned and the denoiser is left as it
    /// was.
    pub fn process_frame(&mut self, frame: Frame) -> Result<&Buffer2D<Vec3>> {
        if let Some(history) = &self.history {
            if frame.size() != history.size {
                warn!(
                    "Rejecting frame #{}: expected size {}, got {}",
                    self.frame,
                    history.size,
                    frame.size()
                );

                return Err(Error::ResolutionChanged {
                    expected: history.size,
                    actual: frame.size(),
                });
            }
        }

        let pixels = frame.viewport().len();

        let filtered = self
            .passes
            .spatial_filtering
            .run(&frame, self.config.spatial_filter_params());

        let (history, reprojected) = match self.history.take() {
            None => {
                debug!("Warming up denoiser (size = {})", frame.size());

                (History::new(frame, filtered), None)
            }

            Some(mut history) => {
                let reprojected = self.passes.reprojection.run(
                    &frame,
                    &history.prev_frame,
                    &mut history.colors,
                    &mut history.validity,
                );

                self.passes.temporal_accumulation.run(
                    &filtered,
                    &history.validity,
                    &mut history.colors,
                    &self.config,
                );

                history.prev_frame = frame;

                (history, Some(reprojected))
            }
        };

        let stats = FrameStats {
            frame: self.frame,
            pixels,
            reprojected,
        };

        debug!("Processed frame: {stats}");

        self.frame += 1;
        self.stats = Some(stats);

        Ok(self.history.insert(history).colors.curr())
    }
}

impl Drop for Denoiser {
    fn drop(&mut self) {
        info!("Deleting denoiser (after {} frame(s))", self.frame);
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
struct History {
    size: UVec2,

    #[derivative(Debug = "ignore")]
    colors: DoubleBuffered<Buffer2D<Vec3>>,

    #[derivative(Debug = "ignore")]
    validity: Buffer2D<bool>,

    #[derivative(Debug = "ignore")]
    prev_frame: Frame,
}

impl History {
    fn new(frame: Frame, filtered: Buffer2D<Vec3>) -> Box<Self> {
        let size = frame.size();

        Box::new(Self {
            size,
            colors: DoubleBuffered::new(filtered, Buffer2D::new(size)),
            validity: Buffer2D::new(size),
            prev_frame: frame,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// No frame has been processed yet.
    Cold,

    /// History is available.
    Warm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame, counting from zero.
    pub frame: u32,

    /// Number of pixels in the frame.
    pub pixels: usize,

    /// Number of pixels that got their history reprojected; `None` for the
    /// first frame, which has no history to reproject.
    pub reprojected: Option<usize>,
}

impl FrameStats {
    pub fn reprojected_ratio(&self) -> Option<f32> {
        self.reprojected
            .map(|reprojected| reprojected as f32 / self.pixels as f32)
    }
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({} pixels", self.frame, self.pixels)?;

        if let Some(ratio) = self.reprojected_ratio() {
            write!(f, ", {:.1}% reprojected", ratio * 100.0)?;
        }

        write!(f, ")")
    }
}
