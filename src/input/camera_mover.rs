use serde::{Deserialize, Serialize};

use crate::math::Vec3;
use crate::render::Camera;

use super::keyboard::Keycode;
use super::mouse::{MouseButton, MouseState};
use super::InputCore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// Orbit `center`; wheel zooms, left-drag rotates
    Rel,
    /// Free flight; left-drag looks, WASD/QE moves
    Fps,
}

/// Turns one frame of input into camera motion.
pub struct CameraMover {
    pub center: Vec3,
    /// Orbit distance limits (min, max)
    pub camera_range: (f64, f64),
    /// Radians per pixel of drag
    pub theta_scale: f64,
    pub wheel_scale: f64,
    /// Units per frame in `Fps` mode
    pub move_fact: f64,
    pub mode: CameraMode,
}

impl CameraMover {
    pub fn move_camera(&self, input: &InputCore, camera: &mut Camera) {
        match self.mode {
            CameraMode::Rel => self.move_rel(&input.mouse_state, camera),
            CameraMode::Fps => self.move_fps(input, camera),
        }
    }

    fn drag(&self, mouse: &MouseState, camera: &mut Camera) {
        if mouse.get(MouseButton::Left) {
            camera.rotate(
                -f64::from(mouse.yrel) * self.theta_scale,
                f64::from(mouse.xrel) * self.theta_scale,
            );
        }
    }

    fn move_rel(&self, mouse: &MouseState, camera: &mut Camera) {
        let dist = (self.center.distance(camera.position)
            - f64::from(mouse.wheel_y) * self.wheel_scale)
            .clamp(self.camera_range.0, self.camera_range.1);

        self.drag(mouse, camera);
        camera.position = self.center - camera.dir() * dist;
    }

    fn move_fps(&self, input: &InputCore, camera: &mut Camera) {
        self.drag(&input.mouse_state, camera);

        let keys = &input.keyboard_state;
        let lin = keys.axis(Keycode::W, Keycode::S) * self.move_fact;
        let hor = keys.axis(Keycode::D, Keycode::A) * self.move_fact;
        let vert = keys.axis(Keycode::Q, Keycode::E) * self.move_fact;

        // forward/strafe stay in the horizontal plane regardless of pitch
        let (sin, cos) = camera.theta_y().sin_cos();
        camera.position += Vec3::new(-sin * lin - cos * hor, vert, cos * lin - sin * hor);
    }
}

impl Default for CameraMover {
    fn default() -> Self {
        Self {
            center: Vec3::zero(),
            camera_range: (0.0, 500.0),
            theta_scale: 0.0045,
            wheel_scale: 1.0,
            move_fact: 0.1,
            mode: CameraMode::Rel,
        }
    }
}
