use glam::{uvec2, Vec3};
use rayon::prelude::*;

use crate::kernels::Reprojector;
use crate::{utils, Buffer2D, DoubleBuffered, Frame};

#[derive(Debug)]
pub struct ReprojectionPass;

impl ReprojectionPass {
    pub fn new() -> Self {
        log::debug!("Initializing pass: reprojection");

        Self
    }

    /// Moves accumulated colors from `prev`'s screen-space into `curr`'s.
    ///
    /// After this pass, `colors.curr()` contains the reprojected history
    /// (zeroed where there's none) and `validity` says which pixels got
    /// reprojected; returns the number of such pixels.
    pub fn run(
        &self,
        curr: &Frame,
        prev: &Frame,
        colors: &mut DoubleBuffered<Buffer2D<Vec3>>,
        validity: &mut Buffer2D<bool>,
    ) -> usize {
        let reprojector = Reprojector {
            viewport: curr.viewport(),
            prev_world_to_screen: prev.transforms().world_to_screen(),
        };

        let (history, scratch) = colors.split_mut();

        let reprojected = utils::measure("pass.reprojection", || {
            scratch
                .par_rows_mut()
                .zip(validity.par_rows_mut())
                .map(|((y, colors), (_, validity))| {
                    let mut reprojected = 0usize;

                    for (x, (color, valid)) in
                        colors.iter_mut().zip(validity).enumerate()
                    {
                        let pos = uvec2(x as u32, y);

                        let reprojection = reprojector.run(
                            curr.object(pos),
                            curr.positions()[pos],
                            |id| {
                                Some((
                                    curr.transforms().object(id)?,
                                    prev.transforms().object(id)?,
                                ))
                            },
                            |pos| prev.object(pos),
                        );

                        if let Some(prev_pos) = reprojection.prev_pos() {
                            *color = history[prev_pos];
                            *valid = true;
                            reprojected += 1;
                        } else {
                            *color = Vec3::ZERO;
                            *valid = false;
                        }
                    }

                    reprojected
                })
                .sum::<usize>()
        });

        colors.swap();

        reprojected
    }
}
