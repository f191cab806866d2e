use geometry::normal::Normalize;
use geometry::point::Point;
use geometry::vector::Vector;
use ray::Ray;

/// A camera answers one question: given a viewport coordinate in (0, 1]^2,
/// where does the corresponding primary ray start and point? Mirrors
/// Ogre's `Camera::getCameraToViewportRay`, the single call `Renderer::render`
/// makes per pixel in the original.
pub trait Camera {
    fn ray_for_viewport(&self, u: f32, v: f32) -> Ray;
}

/// Pinhole perspective camera: no depth of field, no motion blur, matching
/// the teacher's `Projection::handle_dof` being a no-op whenever the lens
/// radius is zero (the only configuration this crate ever constructs).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    eye: Point,
    forward: Vector,
    right: Vector,
    up: Vector,
    tan_half_fov: f32,
    aspect: f32
}

impl PerspectiveCamera {
    /// `fov_y` in degrees, `aspect` = width / height.
    pub fn new(eye: Point, look_at: Point, world_up: Vector, fov_y: f32, aspect: f32) -> PerspectiveCamera {
        let forward = (&look_at - &eye).normalize();
        let right = forward.clone().cross(&world_up).normalize();
        let up = right.clone().cross(&forward.clone()).normalize();

        PerspectiveCamera {
            eye,
            forward,
            right,
            up,
            tan_half_fov: (fov_y.to_radians() * 0.5).tan(),
            aspect
        }
    }
}

impl Camera for PerspectiveCamera {
    fn ray_for_viewport(&self, u: f32, v: f32) -> Ray {
        let screen_x = (2.0 * u - 1.0) * self.tan_half_fov * self.aspect;
        let screen_y = (1.0 - 2.0 * v) * self.tan_half_fov;

        let dir = &(&self.forward + &(&self.right * screen_x)) + &(&self.up * screen_y);
        Ray::new_with(&self.eye, &dir.normalize(), 1e-4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_centre_of_the_viewport_looks_straight_ahead() {
        let cam = PerspectiveCamera::new(
            Point::new_with(0.0, 0.0, 5.0), Point::new(), Vector::new_with(0.0, 1.0, 0.0),
            60.0, 1.0);
        let ray = cam.ray_for_viewport(0.5, 0.5);
        let expected = Vector::new_with(0.0, 0.0, -1.0);
        assert!((ray.d.x - expected.x).abs() < 1e-5);
        assert!((ray.d.y - expected.y).abs() < 1e-5);
        assert!((ray.d.z - expected.z).abs() < 1e-5);
    }

    #[test]
    fn it_always_returns_a_finite_ray_across_the_viewport() {
        let cam = PerspectiveCamera::new(
            Point::new_with(1.0, 2.0, 5.0), Point::new_with(0.0, 0.0, 0.0),
            Vector::new_with(0.0, 1.0, 0.0), 90.0, 16.0 / 9.0);
        for i in 1..10 {
            for j in 1..10 {
                let ray = cam.ray_for_viewport(i as f32 / 10.0, j as f32 / 10.0);
                assert!(ray.d.x.is_finite() && ray.d.y.is_finite() && ray.d.z.is_finite());
            }
        }
    }
}
