use geometry::point::Point;
use geometry::vector::Vector;
use std::f32;

/// A ray restricted to the parametric interval [mint, maxt]. Motion blur and
/// ray differentials are out of scope, so unlike the teacher's `Ray` this
/// carries no `time` or `depth` field — recursion depth is tracked by the
/// renderer's call stack instead.
#[derive(Debug, Clone)]
pub struct Ray {
    pub o: Point,
    pub d: Vector,
    pub mint: f32,
    pub maxt: f32
}

impl Ray {
    pub fn new() -> Ray {
        Ray { o: Point::new(), d: Vector::new(), mint: 0f32, maxt: f32::MAX }
    }

    pub fn new_with(origin: &Point, dir: &Vector, start: f32) -> Ray {
        Ray { o: origin.clone(), d: dir.clone(), mint: start, maxt: f32::MAX }
    }

    pub fn point_at(&self, t: f32) -> Point {
        &self.o + &self.d * t
    }

    pub fn set_mint(&mut self, t: f32) { self.mint = t }
    pub fn set_maxt(&mut self, t: f32) { self.maxt = t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_can_be_created() {
        let r = Ray::new();
        assert_eq!(r.o, Point::new());
        assert_eq!(r.d, Vector::new());
        assert_eq!(r.mint, 0f32);
        assert_eq!(r.maxt, f32::MAX);
    }

    #[test]
    fn it_finds_points_along_its_parametric_line() {
        let r = Ray::new_with(
            &Point::new_with(1.0, 0.0, 0.0), &Vector::new_with(0.0, 1.0, 0.0), 0.0);
        assert_eq!(r.point_at(0.0), Point::new_with(1.0, 0.0, 0.0));
        assert_eq!(r.point_at(2.0), Point::new_with(1.0, 2.0, 0.0));
    }
}
