mod f32_ext;
mod vec3_ext;

use core::ops;

pub use self::f32_ext::*;
pub use self::vec3_ext::*;

/// Linearly interpolates between `a` and `b`.
///
/// Evaluated as `a * (1 - t) + b * t`, so that `t = 0` returns exactly `a` and
/// `t = 1` returns exactly `b`.
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: ops::Add<Output = T>,
    T: ops::Mul<f32, Output = T>,
    T: Copy,
{
    let t = t.saturate();

    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = vec3(0.1, 0.7, 1.3);
        let b = vec3(0.3, 0.2, 0.9);

        assert_eq!(a, lerp(a, b, 0.0));
        assert_eq!(b, lerp(a, b, 1.0));
        assert_eq!(b, lerp(a, b, 2.0));
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(1.5, lerp(1.0, 2.0, 0.5));
    }
}
