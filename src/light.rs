use colour::Colour;
use geometry::point::Point;
use geometry::vector::Vector;
use rng::RNG;

/// Default light footprint, matching `AortLight`'s `size = (100, 100)`
/// fallback for directional lights converted into area lights.
pub const DEFAULT_SIZE: (f32, f32) = (100.0, 100.0);

/// A scene light. Both variants shine from a single `position`: that is the
/// point every shading and shadow ray measures its direction and distance
/// against (confirmed against `AortRenderer::traceRay`, which never
/// distinguishes the two for that purpose). Only the occlusion test differs:
/// a point light's shadow ray is a single any-hit test, an area light's is
/// an average over 16 stratified jittered samples across its footprint.
#[derive(Clone, Debug)]
pub enum Light {
    Point {
        position: Point,
        diffuse: Colour,
        specular: Colour
    },
    Area {
        position: Point,
        /// Carried per spec §3's data model. `sample_points` only ever draws
        /// from the horizontal (x/z) plane through `position`, matching
        /// `AortLight`'s own area-sampling code, so this has no effect on the
        /// grid it produces; it is kept for a caller that needs to know which
        /// way a converted directional light originally pointed.
        direction: Vector,
        size: (f32, f32),
        diffuse: Colour,
        specular: Colour
    }
}

impl Light {
    pub fn position(&self) -> &Point {
        match *self {
            Light::Point { ref position, .. } => position,
            Light::Area { ref position, .. } => position
        }
    }

    pub fn diffuse(&self) -> Colour {
        match *self {
            Light::Point { diffuse, .. } => diffuse,
            Light::Area { diffuse, .. } => diffuse
        }
    }

    pub fn specular(&self) -> Colour {
        match *self {
            Light::Point { specular, .. } => specular,
            Light::Area { specular, .. } => specular
        }
    }

    /// A 4x4 stratified grid over the light's footprint (x/z plane, fixed
    /// y), each cell jittered independently. Regenerated on every call, as
    /// the original recomputes the jitter on every query even though it
    /// caches the unjittered grid corners — caching brings no correctness
    /// benefit here, so this always recomputes both.
    pub fn sample_points(&self, rng: &mut RNG) -> [Point; 16] {
        let (position, size) = match *self {
            Light::Area { ref position, size, .. } => (position, size),
            Light::Point { ref position, .. } => (position, DEFAULT_SIZE)
        };

        let cell_x = size.0 * 0.25;
        let cell_z = size.1 * 0.25;
        let p1 = Point::new_with(
            position.x - size.0 * 0.5, position.y, position.z - size.1 * 0.5);

        let mut points: [Point; 16] = Default::default();
        for i in 0..4 {
            for j in 0..4 {
                let corner = Point::new_with(
                    p1.x + (i as f32) * cell_x, p1.y, p1.z + (j as f32) * cell_z);
                let jitter_x = rng.random_float() * cell_x;
                let jitter_z = rng.random_float() * cell_z;
                points[i * 4 + j] =
                    Point::new_with(corner.x + jitter_x, corner.y, corner.z + jitter_z);
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_area_lights_report_position_and_colours() {
        let p = Light::Point {
            position: Point::new_with(0.0, 5.0, 0.0),
            diffuse: Colour::white(),
            specular: Colour::black()
        };
        assert_eq!(*p.position(), Point::new_with(0.0, 5.0, 0.0));
        assert_eq!(p.diffuse(), Colour::white());
    }

    #[test]
    fn area_light_samples_stay_within_its_footprint() {
        let l = Light::Area {
            position: Point::new_with(0.0, 10.0, 0.0),
            direction: Vector::new_with(0.0, -1.0, 0.0),
            size: (4.0, 4.0),
            diffuse: Colour::white(),
            specular: Colour::black()
        };
        let mut rng = RNG::new(42);
        let pts = l.sample_points(&mut rng);
        for p in pts.iter() {
            assert!(p.x >= -2.0 && p.x <= 2.0);
            assert!(p.z >= -2.0 && p.z <= 2.0);
            assert_eq!(p.y, 10.0);
        }
    }

    #[test]
    fn a_point_light_samples_the_default_footprint() {
        let l = Light::Point {
            position: Point::new_with(0.0, 0.0, 0.0),
            diffuse: Colour::white(),
            specular: Colour::black()
        };
        let mut rng = RNG::new(1);
        let pts = l.sample_points(&mut rng);
        for p in pts.iter() {
            assert!(p.x >= -50.0 && p.x <= 50.0);
            assert!(p.z >= -50.0 && p.z <= 50.0);
        }
    }
}
