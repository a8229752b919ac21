use crate::core::config::SceneSettings;
use crate::input::camera_mover::CameraMover;
use crate::input::InputCore;
use crate::math::Vec3;
use crate::render::{Camera, Draw3d};

use super::perf_stats::FrameStats;
use super::scene::Scene;
use super::SimulationCore;

pub(super) fn create_core(width: u32, height: u32, settings: &SceneSettings) -> SimulationCore {
    // start outside the box, looking at its centre
    let initial_camera = Camera::new(Vec3::new(0.0, 0.0, -settings.bounding_box_size), 0.0, 0.0);

    let camera_mover = CameraMover {
        center: Vec3::zero(),
        camera_range: (settings.body_size, settings.bounding_box_size * 10.0),
        wheel_scale: settings.wheel_scale,
        mode: settings.camera_mode,
        ..CameraMover::default()
    };

    let mut draw = Draw3d::new(width, height);
    draw.camera = initial_camera;

    let mut core = SimulationCore {
        width,
        height,
        input: InputCore::new(),
        camera_mover,
        draw,
        scene: Scene::from_settings(settings),
        initial_camera,
        frame: 0,
        perf_enabled: false,
        perf_stats: FrameStats::default(),
    };
    // the buffer holds a valid frame before the first tick
    core.render();
    core
}
