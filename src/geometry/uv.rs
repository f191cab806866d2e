use utils::Lerp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uv {
    pub u: f32,
    pub v: f32
}

impl Uv {
    pub fn new() -> Uv { Uv { u: 0f32, v: 0f32 } }
    pub fn new_with(u: f32, v: f32) -> Uv { Uv { u, v } }
}

impl<'a, 'b> ::std::ops::Add<&'b Uv> for &'a Uv {
    type Output = Uv;
    fn add(self, rhs: &'b Uv) -> Uv { Uv::new_with(self.u + rhs.u, self.v + rhs.v) }
}

impl ::std::ops::Add for Uv {
    type Output = Uv;
    fn add(self, rhs: Uv) -> Uv { &self + &rhs }
}

impl<'a> ::std::ops::Mul<f32> for &'a Uv {
    type Output = Uv;
    fn mul(self, f: f32) -> Uv { Uv::new_with(self.u * f, self.v * f) }
}

impl ::std::ops::Mul<f32> for Uv {
    type Output = Uv;
    fn mul(self, f: f32) -> Uv { &self * f }
}

impl Lerp<f32> for Uv {
    fn lerp(&self, b: &Uv, t: f32) -> Uv {
        Uv::new_with(self.u.lerp(&b.u, t), self.v.lerp(&b.v, t))
    }
}

/// Barycentric blend over the three vertex UVs of a triangle: a*(1-u-v) + b*u + c*v.
pub fn barycentric(a: &Uv, b: &Uv, c: &Uv, u: f32, v: f32) -> Uv {
    Uv::new_with(
        a.u * (1.0 - u - v) + b.u * u + c.u * v,
        a.v * (1.0 - u - v) + b.v * u + c.v * v)
}
