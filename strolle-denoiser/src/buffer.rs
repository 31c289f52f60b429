use std::ops::{Index, IndexMut};

use bytemuck::Pod;
use glam::{UVec2, Vec3};
use rayon::prelude::*;

use crate::kernels::Viewport;
use crate::{Error, Result};

/// Dense, row-major grid of per-pixel values.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer2D<T> {
    viewport: Viewport,
    data: Vec<T>,
}

impl<T> Buffer2D<T> {
    /// Wraps given row-major data.
    pub fn from_vec(size: UVec2, data: Vec<T>) -> Result<Self> {
        let viewport = Viewport::new(size);

        if data.len() != viewport.len() {
            return Err(Error::BufferLength {
                size,
                expected: viewport.len(),
                actual: data.len(),
            });
        }

        Ok(Self { viewport, data })
    }

    /// Creates a buffer by evaluating `f` for each pixel.
    pub fn from_fn(size: UVec2, mut f: impl FnMut(UVec2) -> T) -> Self {
        let viewport = Viewport::new(size);

        let data = (0..viewport.len())
            .map(|idx| f(viewport.idx_to_screen(idx)))
            .collect();

        Self { viewport, data }
    }

    pub fn size(&self) -> UVec2 {
        self.viewport.size()
    }

    pub fn width(&self) -> u32 {
        self.size().x
    }

    pub fn height(&self) -> u32 {
        self.size().y
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, pos: UVec2) -> Option<&T> {
        if pos.x < self.width() && pos.y < self.height() {
            Some(&self.data[self.viewport.screen_to_idx(pos)])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Buffer2D<U> {
        Buffer2D {
            viewport: self.viewport,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Buffer2D<T>
where
    T: Clone + Default,
{
    /// Creates a buffer filled with `T::default()`.
    pub fn new(size: UVec2) -> Self {
        let viewport = Viewport::new(size);

        Self {
            viewport,
            data: vec![T::default(); viewport.len()],
        }
    }
}

impl<T> Buffer2D<T>
where
    T: Send,
{
    /// Creates a buffer by evaluating `f` for each pixel, in parallel.
    pub fn par_from_fn(
        size: UVec2,
        f: impl Fn(UVec2) -> T + Sync + Send,
    ) -> Self {
        let viewport = Viewport::new(size);

        let data = (0..viewport.len())
            .into_par_iter()
            .map(|idx| f(viewport.idx_to_screen(idx)))
            .collect();

        Self { viewport, data }
    }

    /// Returns a parallel iterator over `(y, row)` pairs.
    pub fn par_rows_mut(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = (u32, &mut [T])> + '_ {
        // Chunk size must be non-zero even for empty buffers, for which the
        // iterator simply yields nothing
        let width = self.width().max(1) as usize;

        self.data
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }
}

impl<T> Buffer2D<T>
where
    T: Pod,
{
    /// Returns raw bytes of this buffer, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl Buffer2D<Vec3> {
    /// Returns this buffer as a flat list of RGB (or XYZ) triples.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T> Index<UVec2> for Buffer2D<T> {
    type Output = T;

    fn index(&self, pos: UVec2) -> &Self::Output {
        &self.data[self.viewport.screen_to_idx(pos)]
    }
}

impl<T> IndexMut<UVec2> for Buffer2D<T> {
    fn index_mut(&mut self, pos: UVec2) -> &mut Self::Output {
        &mut self.data[self.viewport.screen_to_idx(pos)]
    }
}
