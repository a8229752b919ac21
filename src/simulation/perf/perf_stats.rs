use wasm_bindgen::prelude::*;

/// Timings and counters of the last tick (zeros while metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) tick_ms: f64,
    pub(super) render_ms: f64,
    pub(super) frames: u64,
    pub(super) lines_drawn: u32,
    pub(super) triangles_drawn: u32,
    pub(super) bodies: u32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn lines_drawn(&self) -> u32 { self.lines_drawn }
    #[wasm_bindgen(getter)]
    pub fn triangles_drawn(&self) -> u32 { self.triangles_drawn }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
}
