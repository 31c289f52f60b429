use glam::{UVec2, Vec3};

use crate::{lerp, Vec3Ext, Viewport};

/// Statistics of colors around a pixel, used to reject stale history.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorBox {
    /// Mean color of the neighbourhood.
    pub mu: Vec3,

    /// Root-mean-square deviation of the neighbourhood from the center pixel.
    ///
    /// Note that this is measured against the center's color, not against
    /// `mu`.
    pub sigma: Vec3,
}

impl ColorBox {
    /// Gathers statistics over a square, border-clamped neighbourhood of given
    /// radius.
    ///
    /// Both `mu` and `sigma` are averaged over the pixels that actually lay
    /// inside the viewport, so near borders they cover fewer than
    /// `(2 * radius + 1)^2` samples.
    pub fn from_neighbourhood(
        viewport: Viewport,
        screen_pos: UVec2,
        radius: u32,
        sample: impl Fn(UVec2) -> Vec3,
    ) -> Self {
        let center = sample(screen_pos);
        let mut sum = Vec3::ZERO;
        let mut sum_deviations = Vec3::ZERO;
        let mut count = 0;

        for sample_pos in viewport.window(screen_pos, radius).iter() {
            let sample = sample(sample_pos);

            sum += sample;
            sum_deviations += (center - sample).sqr();
            count += 1;
        }

        let count = count as f32;

        Self {
            mu: sum / count,
            sigma: (sum_deviations / count).safe_sqrt(),
        }
    }

    /// Returns the `mu ± k * sigma` box.
    pub fn bounds(&self, k: f32) -> (Vec3, Vec3) {
        (self.mu - self.sigma * k, self.mu + self.sigma * k)
    }

    /// Clamps color componentwise into [`Self::bounds()`].
    pub fn clamp(&self, color: Vec3, k: f32) -> Vec3 {
        let (min, max) = self.bounds(k);

        color.clamp_box(min, max)
    }
}

/// Blends history with the current frame's estimate.
pub struct TemporalAccumulator {
    pub viewport: Viewport,

    /// Weight of the current frame's estimate; `1.0` discards history.
    pub alpha: f32,

    /// Half-size of the color box (in standard deviations) history gets
    /// clamped to.
    pub color_box_k: f32,

    /// See: [`crate::COLOR_BOX_RADIUS`].
    pub color_box_radius: u32,
}

impl TemporalAccumulator {
    /// Returns the new accumulated color of pixel at `screen_pos`.
    ///
    /// `history` is the pixel's reprojected color (`None` if it couldn't be
    /// reprojected) and `filtered` returns current frame's estimates.
    pub fn run(
        &self,
        screen_pos: UVec2,
        history: Option<Vec3>,
        filtered: impl Fn(UVec2) -> Vec3,
    ) -> Vec3 {
        let curr = filtered(screen_pos);

        let Some(history) = history else {
            return curr;
        };

        let history = ColorBox::from_neighbourhood(
            self.viewport,
            screen_pos,
            self.color_box_radius,
            filtered,
        )
        .clamp(history, self.color_box_k);

        lerp(history, curr, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{uvec2, vec3};

    use super::*;

    fn checkerboard(pos: UVec2) -> Vec3 {
        if (pos.x + pos.y) % 2 == 0 {
            vec3(1.0, 0.5, 0.0)
        } else {
            vec3(0.0, 0.5, 1.0)
        }
    }

    #[test]
    fn color_box_of_uniform_neighbourhood() {
        let target = ColorBox::from_neighbourhood(
            Viewport::new(uvec2(8, 8)),
            uvec2(4, 4),
            3,
            |_| vec3(0.25, 0.5, 0.75),
        );

        assert_eq!(vec3(0.25, 0.5, 0.75), target.mu);
        assert_eq!(Vec3::ZERO, target.sigma);
    }

    #[test]
    fn color_box_measures_deviation_from_center() {
        // 3x1 neighbourhood: [0.0, 1.0, 0.0], centered at the bright pixel
        let target = ColorBox::from_neighbourhood(
            Viewport::new(uvec2(3, 1)),
            uvec2(1, 0),
            1,
            |pos| Vec3::splat(if pos.x == 1 { 1.0 } else { 0.0 }),
        );

        assert_relative_eq!(target.mu.x, 1.0 / 3.0);

        // Deviation from the mean would be sqrt(2/9); from the center it's
        // sqrt(2/3)
        assert_relative_eq!(target.sigma.x, (2.0f32 / 3.0).sqrt());
    }

    #[test]
    fn color_box_is_clamped_at_borders() {
        // Corner pixel sees just a 2x2 neighbourhood
        let target = ColorBox::from_neighbourhood(
            Viewport::new(uvec2(8, 8)),
            uvec2(0, 0),
            1,
            checkerboard,
        );

        assert_relative_eq!(target.mu.x, 0.5);
        assert_relative_eq!(target.mu.y, 0.5);
        assert_relative_eq!(target.mu.z, 0.5);
    }

    #[test]
    fn clamp() {
        let target = ColorBox {
            mu: vec3(0.5, 0.5, 0.5),
            sigma: vec3(0.1, 0.2, 0.0),
        };

        let actual = target.clamp(vec3(1.0, 0.0, 0.7), 1.0);

        assert_relative_eq!(actual.x, 0.6);
        assert_relative_eq!(actual.y, 0.3);
        assert_relative_eq!(actual.z, 0.5);

        let (min, max) = target.bounds(2.0);

        assert_relative_eq!(min.x, 0.3);
        assert_relative_eq!(max.y, 0.9);
    }

    #[test]
    fn missing_history_is_replaced() {
        let target = TemporalAccumulator {
            viewport: Viewport::new(uvec2(8, 8)),
            alpha: 0.2,
            color_box_k: 1.0,
            color_box_radius: 3,
        };

        assert_eq!(
            checkerboard(uvec2(2, 3)),
            target.run(uvec2(2, 3), None, checkerboard)
        );
    }

    #[test]
    fn history_is_clamped_and_blended() {
        let viewport = Viewport::new(uvec2(8, 8));
        let screen_pos = uvec2(3, 4);
        let history = vec3(5.0, 0.5, -5.0);

        let target = TemporalAccumulator {
            viewport,
            alpha: 0.25,
            color_box_k: 1.0,
            color_box_radius: 3,
        };

        let actual = target.run(screen_pos, Some(history), checkerboard);

        let color_box =
            ColorBox::from_neighbourhood(viewport, screen_pos, 3, checkerboard);

        let (min, max) = color_box.bounds(1.0);
        let clamped = color_box.clamp(history, 1.0);

        assert!(clamped.cmpge(min).all());
        assert!(clamped.cmple(max).all());

        let expected = clamped * 0.75 + checkerboard(screen_pos) * 0.25;

        assert_relative_eq!(actual.x, expected.x);
        assert_relative_eq!(actual.y, expected.y);
        assert_relative_eq!(actual.z, expected.z);

        // Result must lay between the clamped history and the current estimate
        for i in 0..3 {
            let lo = clamped[i].min(checkerboard(screen_pos)[i]);
            let hi = clamped[i].max(checkerboard(screen_pos)[i]);

            assert!(actual[i] >= lo - 1e-6 && actual[i] <= hi + 1e-6);
        }
    }

    #[test]
    fn alpha_of_one_discards_history() {
        let target = TemporalAccumulator {
            viewport: Viewport::new(uvec2(8, 8)),
            alpha: 1.0,
            color_box_k: 1.0,
            color_box_radius: 3,
        };

        assert_eq!(
            checkerboard(uvec2(5, 5)),
            target.run(uvec2(5, 5), Some(Vec3::splat(123.0)), checkerboard)
        );
    }
}
