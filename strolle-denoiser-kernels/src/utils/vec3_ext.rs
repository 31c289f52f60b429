use glam::{vec3, Vec3};

use crate::F32Ext;

pub trait Vec3Ext
where
    Self: Sized,
{
    /// Squares each component of this vector.
    fn sqr(self) -> Self;

    /// See: [`F32Ext::safe_sqrt()`].
    fn safe_sqrt(self) -> Self;

    /// Clamps this color-vector componentwise into given bounding box.
    ///
    /// Unlike [`Vec3::clamp()`], this doesn't assert that `aabb_min <=
    /// aabb_max`; if the box happens to be inverted, `aabb_max` wins.
    fn clamp_box(self, aabb_min: Self, aabb_max: Self) -> Self;
}

impl Vec3Ext for Vec3 {
    fn sqr(self) -> Self {
        self * self
    }

    fn safe_sqrt(self) -> Self {
        vec3(self.x.safe_sqrt(), self.y.safe_sqrt(), self.z.safe_sqrt())
    }

    fn clamp_box(self, aabb_min: Self, aabb_max: Self) -> Self {
        self.max(aabb_min).min(aabb_max)
    }
}
