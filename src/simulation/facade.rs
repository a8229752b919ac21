use wasm_bindgen::prelude::*;

use crate::core::config::SceneSettings;
use crate::core::error::HostResult;

use super::perf_stats::FrameStats;
use super::SimulationCore;

/// JS-facing engine handle, the same surface a JS host shell drives:
/// `tick`, `pixel_buffer` and the four input entry points.
#[wasm_bindgen]
pub struct RigidBodySimulationWasm {
    core: SimulationCore,
}

impl RigidBodySimulationWasm {
    /// Engine over a validated scene
    pub fn try_with_settings(width: u32, height: u32, settings: &SceneSettings) -> HostResult<Self> {
        settings.validate()?;
        Ok(Self {
            core: SimulationCore::with_settings(width, height, settings),
        })
    }
}

#[wasm_bindgen]
impl RigidBodySimulationWasm {
    /// Create an engine with the default preview scene
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Advance one frame. Returns false once the engine asked to stop.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Get pointer to the RGBA frame (for JS `ImageData`)
    pub fn pixel_buffer(&self) -> *const u8 {
        self.core.pixel_buffer_ptr()
    }

    /// Byte length of the RGBA frame, `width * height * 4`
    pub fn pixel_buffer_len(&self) -> usize {
        self.core.pixel_buffer_len()
    }

    pub fn on_key(&mut self, code: u32, down: bool) {
        self.core.on_key(code, down);
    }

    pub fn on_mouse_button(&mut self, button: u32, down: bool) {
        self.core.on_mouse_button(button, down);
    }

    pub fn on_mouse_move(&mut self, x: i32, y: i32) {
        self.core.on_mouse_move(x, y);
    }

    pub fn on_mouse_wheel(&mut self, dx: i32, dy: i32) {
        self.core.on_mouse_wheel(dx, dy);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }
}
