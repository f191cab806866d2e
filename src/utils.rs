/// Linear interpolation between `self` and `b`, used by the geometry types'
/// `lerp` helpers (barycentric blends reuse the same arithmetic via `+`/`*`
/// directly, but this is the generic form the teacher's geometry module
/// expects to find here).
pub trait Lerp<F = Self> {
    fn lerp(&self, b: &Self, t: F) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, b: &f32, t: f32) -> f32 {
        self * (1.0 - t) + b * t
    }
}

pub trait Clamp : Copy+PartialOrd {
    fn clamp(self, a: Self, b: Self) -> Self {
        if self.lt(&a) { a } else if self.gt(&b) { b } else { self }
    }
}

impl Clamp for f32 { }
