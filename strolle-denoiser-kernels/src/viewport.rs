use glam::{uvec2, UVec2, Vec2};

/// Extent of the frames processed by the denoiser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    size: UVec2,
}

impl Viewport {
    pub fn new(size: UVec2) -> Self {
        Self { size }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Returns the number of pixels in this viewport.
    pub fn len(&self) -> usize {
        (self.size.x as usize) * (self.size.y as usize)
    }

    /// Given a point in screen-coordinates, returns a unique index for it; used
    /// to index screen-space structures.
    pub fn screen_to_idx(&self, pos: UVec2) -> usize {
        (pos.y as usize) * (self.size.x as usize) + (pos.x as usize)
    }

    /// See: [`Self::screen_to_idx()`].
    pub fn idx_to_screen(&self, idx: usize) -> UVec2 {
        let width = self.size.x as usize;

        uvec2((idx % width) as u32, (idx / width) as u32)
    }

    /// Returns the pixel given continuous screen-coordinates fall into, or
    /// `None` if they lay outside of the viewport (or aren't finite).
    pub fn pixel_at(&self, pos: Vec2) -> Option<UVec2> {
        if !pos.is_finite() {
            return None;
        }

        let size = self.size.as_vec2();

        if pos.x >= 0.0 && pos.y >= 0.0 && pos.x < size.x && pos.y < size.y {
            Some(pos.as_uvec2())
        } else {
            None
        }
    }

    /// Returns a square window of given radius centered at `center`, clamped
    /// to the viewport's borders.
    pub fn window(&self, center: UVec2, radius: u32) -> Window {
        let span = |center: u32, len: u32| {
            let min = center.saturating_sub(radius);
            let max = center.saturating_add(radius).min(len.saturating_sub(1));

            (min, max)
        };

        let (min_x, max_x) = span(center.x, self.size.x);
        let (min_y, max_y) = span(center.y, self.size.y);

        Window {
            min: uvec2(min_x, min_y),
            max: uvec2(max_x, max_y),
        }
    }
}

/// Rectangle of pixels; both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub min: UVec2,
    pub max: UVec2,
}

impl Window {
    pub fn len(&self) -> usize {
        let size = self.max - self.min + UVec2::ONE;

        (size.x as usize) * (size.y as usize)
    }

    /// Iterates over pixels of this window, row by row.
    pub fn iter(self) -> impl Iterator<Item = UVec2> {
        (self.min.y..=self.max.y).flat_map(move |y| {
            (self.min.x..=self.max.x).map(move |x| uvec2(x, y))
        })
    }
}
