use glam::UVec2;
use thiserror::Error;

use crate::kernels::ObjectId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error(
        "buffer of size {size} needs {expected} elements, but got {actual}"
    )]
    BufferLength {
        size: UVec2,
        expected: usize,
        actual: usize,
    },

    #[error("frame is empty")]
    EmptyFrame,

    #[error("`{name}` buffer has size {actual}, but expected {expected}")]
    BufferSizeMismatch {
        name: &'static str,
        expected: UVec2,
        actual: UVec2,
    },

    #[error("object {id} (visible at {pos}) has no transform")]
    MissingTransform { id: ObjectId, pos: UVec2 },

    #[error(
        "expected at least two transforms (world-to-camera and \
         world-to-screen), but got {0}"
    )]
    MissingReservedTransforms(usize),

    #[error(
        "frame has size {actual}, but the denoiser's history has size \
         {expected}"
    )]
    ResolutionChanged { expected: UVec2, actual: UVec2 },

    #[error("invalid `{name}` ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}
