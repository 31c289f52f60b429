use glam::{Mat4, UVec2, Vec3, Vec3Swizzles};

use crate::{ObjectId, ObjectTransform, Viewport};

/// Outcome of looking for a pixel's surface in the previous frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reprojection {
    /// Pixel doesn't show any surface.
    Background,

    /// Pixel's object has no transform in one of the frames (e.g. because it
    /// has just appeared).
    UnknownObject,

    /// Surface was outside of the screen in the previous frame.
    OffScreen,

    /// Previous frame showed a different object at surface's location (e.g.
    /// because the surface was occluded).
    Disoccluded,

    /// Surface was visible in the previous frame at given pixel.
    Valid { prev_pos: UVec2 },
}

impl Reprojection {
    pub fn prev_pos(&self) -> Option<UVec2> {
        if let Self::Valid { prev_pos } = *self {
            Some(prev_pos)
        } else {
            None
        }
    }
}

/// Maps surfaces visible in the current frame back into the previous frame's
/// screen-space.
pub struct Reprojector {
    pub viewport: Viewport,
    pub prev_world_to_screen: Mat4,
}

impl Reprojector {
    /// Reprojects a surface point.
    ///
    /// - `object` and `world_pos` describe the surface in the current frame,
    /// - `transforms` returns object's transforms in the current and the
    ///   previous frame,
    /// - `prev_object` returns the object visible at given pixel of the
    ///   previous frame.
    pub fn run<'a, T, P>(
        &self,
        object: Option<ObjectId>,
        world_pos: Vec3,
        transforms: T,
        prev_object: P,
    ) -> Reprojection
    where
        T: Fn(ObjectId) -> Option<(&'a ObjectTransform, &'a ObjectTransform)>,
        P: Fn(UVec2) -> Option<ObjectId>,
    {
        let Some(object) = object else {
            return Reprojection::Background;
        };

        let Some((curr_xform, prev_xform)) = transforms(object) else {
            return Reprojection::UnknownObject;
        };

        let local_pos = curr_xform.project_to_local(world_pos);
        let prev_world_pos = prev_xform.project_to_world(local_pos);

        let prev_screen_pos =
            self.prev_world_to_screen.project_point3(prev_world_pos);

        let Some(prev_pos) = self.viewport.pixel_at(prev_screen_pos.xy())
        else {
            return Reprojection::OffScreen;
        };

        if prev_object(prev_pos) == Some(object) {
            Reprojection::Valid { prev_pos }
        } else {
            Reprojection::Disoccluded
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, vec3};

    use super::*;

    const SIZE: UVec2 = UVec2::new(8, 4);

    fn target() -> Reprojector {
        // Screen-space is the world-space's XY plane, one unit per pixel
        Reprojector {
            viewport: Viewport::new(SIZE),
            prev_world_to_screen: Mat4::IDENTITY,
        }
    }

    fn object(id: u32) -> Option<ObjectId> {
        Some(ObjectId::new(id))
    }

    #[test]
    fn background() {
        let xform = ObjectTransform::default();

        let actual = target().run(
            None,
            Vec3::ZERO,
            |_| Some((&xform, &xform)),
            |_| object(0),
        );

        assert_eq!(Reprojection::Background, actual);
        assert_eq!(None, actual.prev_pos());
    }

    #[test]
    fn static_surface() {
        let xform = ObjectTransform::default();

        let actual = target().run(
            object(1),
            vec3(3.5, 2.5, 0.0),
            |_| Some((&xform, &xform)),
            |_| object(1),
        );

        assert_eq!(
            Reprojection::Valid {
                prev_pos: uvec2(3, 2)
            },
            actual
        );

        assert_eq!(Some(uvec2(3, 2)), actual.prev_pos());
    }

    #[test]
    fn moving_surface() {
        // Object has moved by two pixels to the right since previous frame
        let curr_xform =
            ObjectTransform::new(Mat4::from_translation(vec3(2.0, 0.0, 0.0)));

        let prev_xform = ObjectTransform::default();

        let run = |world_pos| {
            target().run(
                object(1),
                world_pos,
                |_| Some((&curr_xform, &prev_xform)),
                |_| object(1),
            )
        };

        assert_eq!(
            Reprojection::Valid {
                prev_pos: uvec2(3, 1)
            },
            run(vec3(5.5, 1.5, 0.0))
        );

        assert_eq!(Reprojection::OffScreen, run(vec3(1.5, 1.5, 0.0)));
    }

    #[test]
    fn unknown_object() {
        let actual = target().run(
            object(1),
            Vec3::ZERO,
            |_| None,
            |_| object(1),
        );

        assert_eq!(Reprojection::UnknownObject, actual);
    }

    #[test]
    fn disoccluded_surface() {
        let xform = ObjectTransform::default();

        let actual = target().run(
            object(1),
            vec3(3.5, 2.5, 0.0),
            |_| Some((&xform, &xform)),
            |pos| if pos == uvec2(3, 2) { object(2) } else { object(1) },
        );

        assert_eq!(Reprojection::Disoccluded, actual);

        let actual = target().run(
            object(1),
            vec3(3.5, 2.5, 0.0),
            |_| Some((&xform, &xform)),
            |_| None,
        );

        assert_eq!(Reprojection::Disoccluded, actual);
    }

    #[test]
    fn degenerate_transform() {
        let curr_xform = ObjectTransform::new(Mat4::ZERO);
        let prev_xform = ObjectTransform::default();

        let actual = target().run(
            object(1),
            vec3(3.5, 2.5, 0.0),
            |_| Some((&curr_xform, &prev_xform)),
            |_| object(1),
        );

        assert_eq!(Reprojection::OffScreen, actual);
    }
}
