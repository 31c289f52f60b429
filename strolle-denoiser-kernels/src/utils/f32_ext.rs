pub trait F32Ext
where
    Self: Sized,
{
    fn sqr(self) -> Self;
    fn saturate(self) -> Self;

    /// Square root that treats negative inputs (coming from floating-point
    /// drift) as zero.
    fn safe_sqrt(self) -> Self;

    /// Arccosine that clamps its input into `-1..=1` first, so that cosines
    /// that drifted slightly out of range don't produce NaNs.
    fn safe_acos(self) -> Self;
}

impl F32Ext for f32 {
    fn sqr(self) -> Self {
        self * self
    }

    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    fn safe_sqrt(self) -> Self {
        self.max(0.0).sqrt()
    }

    fn safe_acos(self) -> Self {
        self.clamp(-1.0, 1.0).acos()
    }
}
