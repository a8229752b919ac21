use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::core::error::{HostError, HostResult};

use super::surface::{check_frame_len, DisplaySurface};

/// A 2D canvas sized to the engine frame.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

pub(crate) fn dom_err(err: JsValue) -> HostError {
    HostError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl CanvasSurface {
    /// Resize the canvas to `width x height` and take its 2D context.
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> HostResult<Self> {
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")
            .map_err(dom_err)?
            .ok_or_else(|| HostError::Dom("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::Dom("2d context has an unexpected type".into()))?;
        Ok(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DisplaySurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn present(&mut self, rgba: &[u8]) -> HostResult<()> {
        let (width, height) = self.size();
        check_frame_len((width, height), rgba)?;
        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba), width, height)
            .map_err(dom_err)?;
        self.context.put_image_data(&image, 0.0, 0.0).map_err(dom_err)
    }
}
