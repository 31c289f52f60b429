use core::fmt;

use glam::{Mat4, Vec3};

/// Identifier of an object (instance) visible in a frame.
///
/// Pixels that don't show any surface are represented as `None` instead of a
/// sentinel id - see [`ObjectId::from_raw()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Converts id coming from a renderer that marks empty pixels with
    /// negative ids (usually `-1`).
    pub fn from_raw(id: i32) -> Option<Self> {
        u32::try_from(id).ok().map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object's local-to-world transform, together with its inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    local_to_world: Mat4,
    world_to_local: Mat4,
}

impl ObjectTransform {
    pub fn new(local_to_world: Mat4) -> Self {
        Self {
            local_to_world,
            world_to_local: local_to_world.inverse(),
        }
    }

    pub fn local_to_world(&self) -> Mat4 {
        self.local_to_world
    }

    pub fn world_to_local(&self) -> Mat4 {
        self.world_to_local
    }

    /// Transforms a point from object's local-space into world-space.
    pub fn project_to_world(&self, pos: Vec3) -> Vec3 {
        self.local_to_world.project_point3(pos)
    }

    /// Transforms a point from world-space into object's local-space.
    pub fn project_to_local(&self, pos: Vec3) -> Vec3 {
        self.world_to_local.project_point3(pos)
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
