//! Camera for ray generation.

use prism_math::{Ray, Vec3};

/// Pinhole camera mapping normalized image coordinates to world rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `look_from`: eye position
    /// - `look_at`: point the camera faces
    /// - `vup`: up hint, must not be parallel to the view direction
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width / height
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Calculate camera basis vectors
        let w = (look_from - look_at).normalize_or_zero();
        let u = vup.cross(w).normalize_or_zero();
        let v = w.cross(u);

        Self {
            origin: look_from,
            lower_left_corner: look_from - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            u,
            v,
            w,
        }
    }

    /// Generate the ray through normalized image coordinates (s, t).
    ///
    /// (0, 0) is the lower-left corner of the image plane, (1, 1) the upper right.
    #[inline]
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    /// Eye position.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal basis (right, up, backward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 1.0);
        let (u, v, w) = camera.basis();

        assert!(approx(u, Vec3::X));
        assert!(approx(v, Vec3::Y));
        assert!(approx(w, Vec3::Z));
        assert_eq!(camera.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_camera_center_ray() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            40.0,
            16.0 / 9.0,
        );
        let ray = camera.get_ray(0.5, 0.5);

        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 5.0));
        assert!(approx(ray.direction().normalize(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_camera_corners() {
        // 90 degree fov: the image plane at distance 1 spans [-1, 1] vertically
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 2.0);

        assert!(approx(camera.get_ray(0.0, 0.0).direction(), Vec3::new(-2.0, -1.0, -1.0)));
        assert!(approx(camera.get_ray(1.0, 1.0).direction(), Vec3::new(2.0, 1.0, -1.0)));
        assert!(approx(camera.get_ray(1.0, 0.0).direction(), Vec3::new(2.0, -1.0, -1.0)));
    }

    #[test]
    fn test_flipped_up_vector_flips_image() {
        let up = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 1.0);
        let down = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), -Vec3::Y, 90.0, 1.0);

        assert!(up.get_ray(0.5, 0.0).direction().y < 0.0);
        assert!(down.get_ray(0.5, 0.0).direction().y > 0.0);
    }
}
