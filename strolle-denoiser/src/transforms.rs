use fxhash::FxHashMap;
use glam::Mat4;

use crate::kernels::{ObjectId, ObjectTransform};
use crate::{Error, Result};

/// Transforms describing a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameTransforms {
    objects: FxHashMap<ObjectId, ObjectTransform>,
    world_to_camera: Mat4,
    world_to_screen: Mat4,
}

impl FrameTransforms {
    pub fn new(world_to_camera: Mat4, world_to_screen: Mat4) -> Self {
        Self {
            objects: Default::default(),
            world_to_camera,
            world_to_screen,
        }
    }

    /// Converts transforms coming from a renderer that passes them as a flat
    /// list, where the `n`-th matrix is the local-to-world transform of object
    /// `n` and the last two matrices are world-to-camera and world-to-screen.
    pub fn from_trailing_reserved(matrices: &[Mat4]) -> Result<Self> {
        let [objects @ .., world_to_camera, world_to_screen] = matrices else {
            return Err(Error::MissingReservedTransforms(matrices.len()));
        };

        let mut this = Self::new(*world_to_camera, *world_to_screen);

        for (id, local_to_world) in objects.iter().enumerate() {
            this.insert(ObjectId::new(id as u32), *local_to_world);
        }

        Ok(this)
    }

    pub fn with_object(mut self, id: ObjectId, local_to_world: Mat4) -> Self {
        self.insert(id, local_to_world);
        self
    }

    pub fn insert(&mut self, id: ObjectId, local_to_world: Mat4) {
        self.objects.insert(id, ObjectTransform::new(local_to_world));
    }

    pub fn object(&self, id: ObjectId) -> Option<&ObjectTransform> {
        self.objects.get(&id)
    }

    pub fn objects(
        &self,
    ) -> impl Iterator<Item = (ObjectId, &ObjectTransform)> + '_ {
        self.objects.iter().map(|(id, xform)| (*id, xform))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn world_to_camera(&self) -> Mat4 {
        self.world_to_camera
    }

    pub fn world_to_screen(&self) -> Mat4 {
        self.world_to_screen
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn from_trailing_reserved() {
        let object0 = Mat4::from_translation(vec3(1.0, 0.0, 0.0));
        let object1 = Mat4::from_translation(vec3(0.0, 2.0, 0.0));
        let world_to_camera = Mat4::from_translation(vec3(0.0, 0.0, -5.0));
        let world_to_screen = Mat4::from_scale(vec3(10.0, 10.0, 1.0));

        let target = FrameTransforms::from_trailing_reserved(&[
            object0,
            object1,
            world_to_camera,
            world_to_screen,
        ])
        .unwrap();

        assert_eq!(2, target.len());
        assert_eq!(world_to_camera, target.world_to_camera());
        assert_eq!(world_to_screen, target.world_to_screen());

        assert_eq!(
            object0,
            target.object(ObjectId::new(0)).unwrap().local_to_world()
        );

        assert_eq!(
            object1,
            target.object(ObjectId::new(1)).unwrap().local_to_world()
        );

        assert!(target.object(ObjectId::new(2)).is_none());
    }

    #[test]
    fn from_trailing_reserved_without_objects() {
        let target = FrameTransforms::from_trailing_reserved(&[
            Mat4::IDENTITY,
            Mat4::IDENTITY,
        ])
        .unwrap();

        assert!(target.is_empty());
    }

    #[test]
    fn from_trailing_reserved_too_short() {
        assert_eq!(
            Err(Error::MissingReservedTransforms(1)),
            FrameTransforms::from_trailing_reserved(&[Mat4::IDENTITY]),
        );

        assert_eq!(
            Err(Error::MissingReservedTransforms(0)),
            FrameTransforms::from_trailing_reserved(&[]),
        );
    }

    #[test]
    fn with_object() {
        let target = FrameTransforms::default().with_object(
            ObjectId::new(7),
            Mat4::from_scale(vec3(2.0, 2.0, 2.0)),
        );

        let xform = target.object(ObjectId::new(7)).unwrap();

        assert_eq!(
            Mat4::from_scale(vec3(0.5, 0.5, 0.5)),
            xform.world_to_local()
        );

        assert_eq!(Mat4::IDENTITY, target.world_to_screen());
    }
}
