use std::fmt;

use crate::kernels::SpatialFilterParams;
use crate::{Error, Result};

/// Denoiser's tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DenoiserConfig {
    /// Bandwidth of the world-space distance term of the spatial filter.
    pub sigma_coord: f32,

    /// Bandwidth of the color-difference term of the spatial filter.
    pub sigma_color: f32,

    /// Bandwidth of the normal-angle term of the spatial filter.
    pub sigma_normal: f32,

    /// Bandwidth of the tangent-plane term of the spatial filter.
    pub sigma_plane: f32,

    /// How much the current frame contributes to the accumulated color, in
    /// range `(0.0, 1.0]`; `1.0` disables temporal accumulation.
    pub alpha: f32,

    /// Half-size of the box (in standard deviations) reprojected history gets
    /// clamped to.
    pub color_box_k: f32,
}

impl DenoiserConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("sigma_coord", self.sigma_coord),
            ("sigma_color", self.sigma_color),
            ("sigma_normal", self.sigma_normal),
            ("sigma_plane", self.sigma_plane),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    value,
                    reason: "must be a positive, finite number",
                });
            }
        }

        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: self.alpha,
                reason: "must be in range (0.0, 1.0]",
            });
        }

        if !self.color_box_k.is_finite() || self.color_box_k < 0.0 {
            return Err(Error::InvalidParameter {
                name: "color_box_k",
                value: self.color_box_k,
                reason: "must be a non-negative, finite number",
            });
        }

        Ok(())
    }

    pub fn spatial_filter_params(&self) -> SpatialFilterParams {
        SpatialFilterParams {
            sigma_coord: self.sigma_coord,
            sigma_color: self.sigma_color,
            sigma_normal: self.sigma_normal,
            sigma_plane: self.sigma_plane,
        }
    }
}

impl Default for DenoiserConfig {
    fn default() -> Self {
        Self {
            sigma_coord: 32.0,
            sigma_color: 0.6,
            sigma_normal: 0.1,
            sigma_plane: 0.1,
            alpha: 0.2,
            color_box_k: 1.0,
        }
    }
}

impl fmt::Display for DenoiserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sigma-coord={}, sigma-color={}, sigma-normal={}, sigma-plane={}, \
             alpha={}, color-box-k={}",
            self.sigma_coord,
            self.sigma_color,
            self.sigma_normal,
            self.sigma_plane,
            self.alpha,
            self.color_box_k,
        )
    }
}
