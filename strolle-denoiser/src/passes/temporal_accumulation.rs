use glam::{uvec2, Vec3};
use rayon::prelude::*;

use crate::kernels::{TemporalAccumulator, COLOR_BOX_RADIUS};
use crate::{utils, Buffer2D, DenoiserConfig, DoubleBuffered};

#[derive(Debug)]
pub struct TemporalAccumulationPass {
    color_box_radius: u32,
}

impl TemporalAccumulationPass {
    pub fn new() -> Self {
        log::debug!("Initializing pass: temporal-accumulation");

        Self {
            color_box_radius: COLOR_BOX_RADIUS,
        }
    }

    /// Blends reprojected history (`colors.curr()`) with `filtered`, storing
    /// the result as the new `colors.curr()`.
    pub fn run(
        &self,
        filtered: &Buffer2D<Vec3>,
        validity: &Buffer2D<bool>,
        colors: &mut DoubleBuffered<Buffer2D<Vec3>>,
        config: &DenoiserConfig,
    ) {
        let accumulator = TemporalAccumulator {
            viewport: filtered.viewport(),
            alpha: config.alpha,
            color_box_k: config.color_box_k,
            color_box_radius: self.color_box_radius,
        };

        let (history, scratch) = colors.split_mut();

        utils::measure("pass.temporal-accumulation", || {
            scratch.par_rows_mut().for_each(|(y, colors)| {
                for (x, color) in colors.iter_mut().enumerate() {
                    let pos = uvec2(x as u32, y);
                    let history = validity[pos].then(|| history[pos]);

                    *color =
                        accumulator.run(pos, history, |pos| filtered[pos]);
                }
            });
        });

        colors.swap();
    }
}
