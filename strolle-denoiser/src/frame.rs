use glam::{UVec2, Vec3};

use crate::kernels::{ObjectId, SurfaceSample, Viewport};
use crate::{Buffer2D, Error, FrameTransforms, Result};

/// Everything the renderer knows about a single frame.
///
/// Frames are validated upon creation, so a [`Frame`] always has all of its
/// buffers sized equally and a transform for every object it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    beauty: Buffer2D<Vec3>,
    positions: Buffer2D<Vec3>,
    normals: Buffer2D<Vec3>,
    objects: Buffer2D<Option<ObjectId>>,
    transforms: FrameTransforms,
}

impl Frame {
    /// Creates a new frame.
    ///
    /// - `beauty` contains noisy colors,
    /// - `positions` contains world-space positions of visible surfaces,
    /// - `normals` contains (normalized) world-space normals,
    /// - `objects` says which object is visible at each pixel (if any).
    pub fn new(
        beauty: Buffer2D<Vec3>,
        positions: Buffer2D<Vec3>,
        normals: Buffer2D<Vec3>,
        objects: Buffer2D<Option<ObjectId>>,
        transforms: FrameTransforms,
    ) -> Result<Self> {
        let size = beauty.size();

        if size.x == 0 || size.y == 0 {
            return Err(Error::EmptyFrame);
        }

        for (name, actual) in [
            ("positions", positions.size()),
            ("normals", normals.size()),
            ("objects", objects.size()),
        ] {
            if actual != size {
                return Err(Error::BufferSizeMismatch {
                    name,
                    expected: size,
                    actual,
                });
            }
        }

        for (idx, id) in objects.iter().enumerate() {
            if let Some(id) = *id {
                if transforms.object(id).is_none() {
                    return Err(Error::MissingTransform {
                        id,
                        pos: objects.viewport().idx_to_screen(idx),
                    });
                }
            }
        }

        Ok(Self {
            beauty,
            positions,
            normals,
            objects,
            transforms,
        })
    }

    pub fn size(&self) -> UVec2 {
        self.beauty.size()
    }

    pub fn viewport(&self) -> Viewport {
        self.beauty.viewport()
    }

    pub fn beauty(&self) -> &Buffer2D<Vec3> {
        &self.beauty
    }

    pub fn positions(&self) -> &Buffer2D<Vec3> {
        &self.positions
    }

    pub fn normals(&self) -> &Buffer2D<Vec3> {
        &self.normals
    }

    pub fn objects(&self) -> &Buffer2D<Option<ObjectId>> {
        &self.objects
    }

    pub fn transforms(&self) -> &FrameTransforms {
        &self.transforms
    }

    pub fn object(&self, pos: UVec2) -> Option<ObjectId> {
        self.objects[pos]
    }

    pub fn surface(&self, pos: UVec2) -> SurfaceSample {
        SurfaceSample {
            position: self.positions[pos],
            normal: self.normals[pos],
            color: self.beauty[pos],
        }
    }
}
