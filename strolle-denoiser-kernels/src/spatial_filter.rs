use glam::{UVec2, Vec3};

use crate::{F32Ext, Viewport};

/// Bandwidths of the joint-bilateral filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialFilterParams {
    /// Bandwidth of the world-space distance between surfaces.
    pub sigma_coord: f32,

    /// Bandwidth of the difference between (noisy) colors.
    pub sigma_color: f32,

    /// Bandwidth of the angle between surface normals.
    pub sigma_normal: f32,

    /// Bandwidth of how far a neighbour lays off the center's tangent plane.
    pub sigma_plane: f32,
}

impl SpatialFilterParams {
    /// Returns how much `sample` contributes to the filtered color of
    /// `center`, in range `0.0..=1.0`.
    pub fn weight(
        &self,
        center: &SurfaceSample,
        sample: &SurfaceSample,
    ) -> f32 {
        let d_coord = center.position.distance_squared(sample.position)
            / (2.0 * self.sigma_coord.sqr());

        let d_color = center.color.distance_squared(sample.color)
            / (2.0 * self.sigma_color.sqr());

        let d_normal = center.normal.dot(sample.normal).safe_acos().sqr()
            / (2.0 * self.sigma_normal.sqr());

        // Coinciding surfaces (including the center itself) yield a zero
        // direction here and so don't get penalized.
        let d_plane = center
            .normal
            .dot((sample.position - center.position).normalize_or_zero())
            .sqr()
            / (2.0 * self.sigma_plane.sqr());

        (-(d_coord + d_color + d_normal + d_plane)).exp()
    }
}

/// Everything the joint-bilateral filter knows about a single pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSample {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

/// Joint-bilateral filter, guided by positions, normals and colors.
pub struct SpatialFilter {
    pub viewport: Viewport,
    pub params: SpatialFilterParams,
    pub radius: u32,
}

impl SpatialFilter {
    /// Returns the filtered color of pixel at `screen_pos`.
    ///
    /// If none of the neighbours (including the center pixel) end up with a
    /// non-zero weight, the center's color is returned as-is.
    pub fn run(
        &self,
        screen_pos: UVec2,
        sample: impl Fn(UVec2) -> SurfaceSample,
    ) -> Vec3 {
        let center = sample(screen_pos);
        let mut sum_color = Vec3::ZERO;
        let mut sum_weights = 0.0;

        for sample_pos in self.viewport.window(screen_pos, self.radius).iter()
        {
            let sample = sample(sample_pos);
            let sample_weight = self.params.weight(&center, &sample);

            sum_color += sample.color * sample_weight;
            sum_weights += sample_weight;
        }

        if sum_weights == 0.0 {
            center.color
        } else {
            sum_color / sum_weights
        }
    }
}
