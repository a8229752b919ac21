//! Rigid Body WASM - browser host shell and preview engine
//!
//! The host shell owns the canvas, drives a fixed 60 Hz frame loop and relays
//! DOM input into the engine. The engine owns all scene state and renders into
//! a shared RGBA pixel buffer that the host copies to the display every frame.
//!
//! Layout:
//! - core/        - errors, logging, configuration
//! - math/        - vectors and matrices
//! - input/       - input state, DOM code mapping, camera control
//! - render/      - software rasterizer (screen buffer, camera, projection)
//! - simulation/  - engine core and its wasm facade
//! - host/        - engine boundary, display surfaces, frame driver

pub mod core;
pub mod math;
pub mod input;
pub mod render;
pub mod simulation;
pub mod host;

pub use crate::core::config::{ButtonScheme, HostConfig, SceneSettings};
pub use crate::core::error::{HostError, HostResult};

use wasm_bindgen::prelude::*;

// Thread pool initialization for the `parallel` feature
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Build the default preview engine.
///
/// `n` is the lattice size of the preview scene (bodies per axis), 3 when omitted.
/// A lattice that does not fit the bounding box is rejected.
#[wasm_bindgen]
pub fn init(width: u32, height: u32, n: Option<u32>) -> Result<simulation::RigidBodySimulationWasm, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
    crate::core::logging::init(log::LevelFilter::Info);

    init_engine(width, height, n).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `init` without the JS error mapping.
pub fn init_engine(width: u32, height: u32, n: Option<u32>) -> HostResult<simulation::RigidBodySimulationWasm> {
    let mut settings = SceneSettings::default();
    if let Some(n) = n {
        settings.density = n;
    }
    let engine = simulation::RigidBodySimulationWasm::try_with_settings(width, height, &settings)?;
    log::info!("rigid body engine initialized: {}x{}, density {}", width, height, settings.density);
    Ok(engine)
}

/// Start the Rust host shell on the canvas with the given id.
///
/// `config_json` is an optional `HostConfig` document; missing fields take defaults.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_host(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let config = match config_json {
        Some(json) => HostConfig::from_json(&json),
        None => Ok(HostConfig::default()),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    host::web::start(canvas_id, config)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
