//! Engine core: everything behind the host/engine boundary.
//!
//! `SimulationCore` owns input state, the camera, the screen buffer and the
//! preview scene. The host calls `tick` once per frame, then copies
//! `pixel_buffer` to its display. Input entry points take raw DOM fields.
//!
//! The actual rigid-body dynamics live outside this crate; the scene here is
//! a fixed preview so the boundary can be exercised end to end.

use crate::core::config::SceneSettings;
use crate::host::Engine;
use crate::input::camera_mover::CameraMover;
use crate::input::InputCore;
use crate::render::{Camera, Draw3d};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "scene/scene.rs"]
mod scene;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_frame.rs"]
mod render_frame;
#[path = "input/input_entry.rs"]
mod input_entry;
mod facade;

pub use facade::RigidBodySimulationWasm;
pub use perf_stats::FrameStats;

use perf_timer::PerfTimer;
use scene::Scene;

pub struct SimulationCore {
    width: u32,
    height: u32,
    input: InputCore,
    camera_mover: CameraMover,
    draw: Draw3d,
    scene: Scene,
    initial_camera: Camera,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl SimulationCore {
    /// Engine with the default preview scene
    pub fn new(width: u32, height: u32) -> Self {
        init::create_core(width, height, &SceneSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: &SceneSettings) -> Self {
        init::create_core(width, height, settings)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    /// Frames advanced since start or the last reset
    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.scene.bodies().len() }

    pub fn camera(&self) -> &Camera { &self.draw.camera }

    pub fn camera_mut(&mut self) -> &mut Camera { &mut self.draw.camera }

    pub fn camera_mover_mut(&mut self) -> &mut CameraMover { &mut self.camera_mover }

    pub fn input(&self) -> &InputCore { &self.input }

    /// Advance one frame and re-render. Returns false once quit was requested.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// Current RGBA frame, `width * height * 4` bytes
    pub fn pixel_buffer(&self) -> &[u8] {
        self.draw.screen().data()
    }

    /// Offset of the pixel buffer in linear memory (for JS `ImageData`)
    pub fn pixel_buffer_ptr(&self) -> *const u8 {
        self.pixel_buffer().as_ptr()
    }

    pub fn pixel_buffer_len(&self) -> usize {
        self.pixel_buffer().len()
    }

    pub fn on_key(&mut self, code: u32, down: bool) {
        input_entry::on_key(self, code, down);
    }

    pub fn on_mouse_button(&mut self, button: u32, down: bool) {
        input_entry::on_mouse_button(self, button, down);
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        input_entry::on_mouse_move(self, x, y);
    }

    pub fn on_mouse_wheel(&mut self, dx: i32, dy: i32) {
        input_entry::on_mouse_wheel(self, dx, dy);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn frame_stats(&self) -> FrameStats {
        self.perf_stats.clone()
    }

    fn render(&mut self) {
        render_frame::render(self);
    }
}

impl Engine for SimulationCore {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn tick(&mut self) -> bool {
        SimulationCore::tick(self)
    }

    fn pixel_buffer(&self) -> &[u8] {
        SimulationCore::pixel_buffer(self)
    }

    fn on_key(&mut self, code: u32, down: bool) {
        SimulationCore::on_key(self, code, down);
    }

    fn on_mouse_button(&mut self, button: u32, down: bool) {
        SimulationCore::on_mouse_button(self, button, down);
    }

    fn on_mouse_move(&mut self, x: i32, y: i32) {
        SimulationCore::on_mouse_move(self, x, y);
    }

    fn on_mouse_wheel(&mut self, dx: i32, dy: i32) {
        SimulationCore::on_mouse_wheel(self, dx, dy);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
