#![cfg(target_arch = "wasm32")]

use rigid_body_wasm::host::{CanvasSurface, DisplaySurface};
use rigid_body_wasm::input::mouse::MouseButton;
use rigid_body_wasm::{HostConfig, HostError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document.create_element("canvas").unwrap().dyn_into::<HtmlCanvasElement>().unwrap()
}

#[wasm_bindgen_test]
fn canvas_surface_takes_requested_size() {
    let surface = CanvasSurface::new(canvas(), 8, 4).unwrap();
    assert_eq!(surface.size(), (8, 4));
}

#[wasm_bindgen_test]
fn present_writes_pixels() {
    let mut surface = CanvasSurface::new(canvas(), 2, 1).unwrap();
    surface.present(&[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();

    let context = surface
        .canvas()
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    let data = context.get_image_data(0.0, 0.0, 2.0, 1.0).unwrap().data();
    assert_eq!(data.0, vec![255, 0, 0, 255, 0, 0, 255, 255]);
}

#[wasm_bindgen_test]
fn present_rejects_wrong_length() {
    let mut surface = CanvasSurface::new(canvas(), 2, 2).unwrap();
    assert!(matches!(surface.present(&[0; 4]), Err(HostError::SurfaceSize { .. })));
}

#[wasm_bindgen_test]
fn start_fails_for_missing_canvas() {
    let err = rigid_body_wasm::host::web::start("no-such-canvas", Default::default()).err();
    assert!(matches!(err, Some(HostError::Dom(_))));
}

#[wasm_bindgen_test]
fn button_release_outside_canvas_is_heard() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = canvas();
    canvas.set_id("release-test");
    document.body().unwrap().append_child(&canvas).unwrap();

    let config = HostConfig { width: 16, height: 16, ..HostConfig::default() };
    let shell = rigid_body_wasm::host::web::start("release-test", config).ok().unwrap();
    let left = |shell: &rigid_body_wasm::host::web::Shell| {
        shell.borrow().engine().input().mouse_state.get(MouseButton::Left)
    };

    document.dispatch_event(&MouseEvent::new("mousedown").unwrap()).unwrap();
    assert!(left(&shell));
    // released over the page, not over the canvas
    document.dispatch_event(&MouseEvent::new("mouseup").unwrap()).unwrap();
    assert!(!left(&shell));
}
