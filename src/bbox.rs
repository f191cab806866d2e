use geometry::point::Point;
use ray::Ray;
use std::f32;

/// Axis-aligned bounding box. `BBox::new()` is the empty box (an identity
/// element for `unioned_with`): p_min holds +infinity, p_max holds -infinity
/// on every axis, so unioning it with anything yields that thing back.
#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    pub p_min: Point,
    pub p_max: Point
}

impl BBox {
    pub fn new() -> BBox {
        BBox {
            p_min: Point::new_with(f32::MAX, f32::MAX, f32::MAX),
            p_max: Point::new_with(f32::MIN, f32::MIN, f32::MIN)
        }
    }

    pub fn new_with(p1: Point, p2: Point) -> BBox {
        BBox {
            p_min: Point::new_with(p1.x.min(p2.x), p1.y.min(p2.y), p1.z.min(p2.z)),
            p_max: Point::new_with(p1.x.max(p2.x), p1.y.max(p2.y), p1.z.max(p2.z))
        }
    }

    pub fn extent(&self, axis: usize) -> f32 {
        self.p_max[axis as i32] - self.p_min[axis as i32]
    }

    pub fn surface_area(&self) -> f32 {
        let d = self.extent(0).max(0.0);
        let e = self.extent(1).max(0.0);
        let f = self.extent(2).max(0.0);
        2.0 * (d * e + d * f + e * f)
    }

    pub fn max_extent(&self) -> usize {
        let exts = [self.extent(0), self.extent(1), self.extent(2)];
        let mut best = 0;
        for axis in 1..3 {
            if exts[axis] > exts[best] {
                best = axis;
            }
        }
        best
    }

    /// Ray/slab intersection. Returns the clipped [t_min, t_max] interval, or
    /// `None` if the ray misses the box entirely.
    pub fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        let mut t_min = ray.mint;
        let mut t_max = ray.maxt;
        for axis in 0..3usize {
            let inv_d = 1.0 / ray.d[axis];
            let mut t0 = (self.p_min[axis as i32] - ray.o[axis as i32]) * inv_d;
            let mut t1 = (self.p_max[axis as i32] - ray.o[axis as i32]) * inv_d;
            if inv_d < 0.0 {
                ::std::mem::swap(&mut t0, &mut t1);
            }
            t_min = if t0 > t_min { t0 } else { t_min };
            t_max = if t1 < t_max { t1 } else { t_max };
            if t_min > t_max {
                return None;
            }
        }
        Some((t_min, t_max))
    }
}

impl Default for BBox {
    fn default() -> BBox { BBox::new() }
}

impl From<Point> for BBox {
    fn from(p: Point) -> BBox { BBox { p_min: p.clone(), p_max: p } }
}

pub trait Union<T> {
    fn unioned_with(&self, other: T) -> BBox;
}

impl<'a> Union<&'a Point> for BBox {
    fn unioned_with(&self, p: &'a Point) -> BBox {
        BBox {
            p_min: Point::new_with(
                self.p_min.x.min(p.x), self.p_min.y.min(p.y), self.p_min.z.min(p.z)),
            p_max: Point::new_with(
                self.p_max.x.max(p.x), self.p_max.y.max(p.y), self.p_max.z.max(p.z))
        }
    }
}

impl<'a> Union<&'a BBox> for BBox {
    fn unioned_with(&self, b: &'a BBox) -> BBox {
        BBox {
            p_min: Point::new_with(
                self.p_min.x.min(b.p_min.x), self.p_min.y.min(b.p_min.y), self.p_min.z.min(b.p_min.z)),
            p_max: Point::new_with(
                self.p_max.x.max(b.p_max.x), self.p_max.y.max(b.p_max.y), self.p_max.z.max(b.p_max.z))
        }
    }
}
