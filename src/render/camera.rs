use std::f64::consts::{FRAC_PI_2, TAU};

use crate::math::{Mat3, Vec3};

/// Pitch/yaw camera. At zero angles it looks down +z.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    theta_x: f64,
    theta_y: f64,
    rotation: Mat3,
    direction: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, theta_x: f64, theta_y: f64) -> Self {
        let mut camera = Self {
            position,
            theta_x: theta_x.clamp(-FRAC_PI_2, FRAC_PI_2),
            theta_y,
            rotation: Mat3::identity(),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        camera.update();
        camera
    }

    /// Unit view direction in world space
    pub fn dir(&self) -> Vec3 {
        self.direction
    }

    pub fn theta_x(&self) -> f64 {
        self.theta_x
    }

    pub fn theta_y(&self) -> f64 {
        self.theta_y
    }

    /// Pitch is clamped to straight up/down, yaw wraps at a full turn.
    pub fn rotate(&mut self, theta_x: f64, theta_y: f64) {
        self.theta_x = (self.theta_x + theta_x).clamp(-FRAC_PI_2, FRAC_PI_2);

        // remainder keeps the sign, so yaw stays within (-2pi, 2pi)
        self.theta_y = (self.theta_y + theta_y) % TAU;

        self.update();
    }

    /// World position to view space
    pub fn view(&self, p: Vec3) -> Vec3 {
        self.rotation.mul_vec(p - self.position)
    }

    /// View space back to world position
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        self.rotation.mul_vec_transposed(v) + self.position
    }

    fn update(&mut self) {
        self.rotation = Mat3::rotation_x(self.theta_x).mul(&Mat3::rotation_y(self.theta_y));
        self.direction = self.rotation.mul_vec_transposed(Vec3::new(0.0, 0.0, 1.0));
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::zero(), 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_down_positive_z() {
        let camera = Camera::default();
        assert!((camera.dir() - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn point_ahead_has_positive_view_depth() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0), 0.0, 0.0);
        let v = camera.view(Vec3::zero());
        assert!((v.z - 10.0).abs() < 1e-12);
    }

    #[test]
    fn view_round_trips_through_world() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 0.0, 0.0);
        camera.rotate(0.4, -1.3);
        let p = Vec3::new(-4.0, 0.5, 9.0);
        assert!((camera.to_world(camera.view(p)) - p).length() < 1e-9);
    }

    #[test]
    fn direction_projects_to_view_forward() {
        let mut camera = Camera::default();
        camera.rotate(0.3, 0.8);
        let v = camera.view(camera.position + camera.dir());
        assert!((v - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.rotate(10.0, 0.0);
        assert_eq!(camera.theta_x(), FRAC_PI_2);
        camera.rotate(-20.0, 0.0);
        assert_eq!(camera.theta_x(), -FRAC_PI_2);
    }

    #[test]
    fn yaw_wraps() {
        let mut camera = Camera::default();
        camera.rotate(0.0, TAU + 0.5);
        assert!((camera.theta_y() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn huge_yaw_stays_in_range() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 1.0e7);
        assert!(camera.theta_y().abs() < TAU);
        camera.rotate(0.0, -3.0e7);
        assert!(camera.theta_y().abs() < TAU);
    }
}
