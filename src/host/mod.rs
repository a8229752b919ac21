//! Host shell: owns the display surface, drives the engine once per frame
//! and relays raw input across the boundary.
//!
//! The shell is generic over the engine and the surface so the same frame
//! logic runs headless (native, `MemorySurface`) and in the browser
//! (`CanvasSurface`, driven by `web::start`).

mod engine;
mod events;
mod surface;

#[cfg(not(target_arch = "wasm32"))]
mod pacer;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::Engine;
pub use events::HostEvent;
pub use surface::{DisplaySurface, MemorySurface};

#[cfg(not(target_arch = "wasm32"))]
pub use pacer::FramePacer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::core::config::HostConfig;
use crate::core::error::{rgba_len, HostError, HostResult};

pub struct HostShell<E: Engine, S: DisplaySurface> {
    engine: E,
    surface: S,
    config: HostConfig,
    frames: u64,
    running: bool,
}

impl<E: Engine, S: DisplaySurface> HostShell<E, S> {
    pub fn new(engine: E, surface: S, config: HostConfig) -> HostResult<Self> {
        let (engine_size, surface_size) = (engine.size(), surface.size());
        if engine_size != surface_size {
            return Err(HostError::SizeMismatch {
                engine: engine_size,
                surface: surface_size,
            });
        }
        log::info!("host shell ready: {}x{}", engine_size.0, engine_size.1);
        Ok(Self {
            engine,
            surface,
            config,
            frames: 0,
            running: true,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// False once the engine reported it stopped
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn step(&mut self) -> bool {
        let running = self.engine.tick();
        self.frames += 1;
        if self.running && !running {
            log::info!("engine stopped after {} frames", self.frames);
        }
        self.running = running;
        running
    }

    /// Copy exactly `w * h * 4` bytes of the engine frame to the surface.
    pub fn render(&mut self) -> HostResult<()> {
        let (width, height) = self.engine.size();
        let expected = rgba_len(width, height);
        let pixels = self.engine.pixel_buffer();
        if pixels.len() < expected {
            return Err(HostError::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        self.surface.present(&pixels[..expected])
    }

    /// One driver iteration: step, then present.
    pub fn frame(&mut self) -> HostResult<bool> {
        let running = self.step();
        self.render()?;
        Ok(running)
    }

    pub fn relay(&mut self, event: HostEvent) {
        match event {
            HostEvent::Key { code, down } => self.engine.on_key(code, down),
            HostEvent::MouseButton { button, down } => {
                let button = self.config.button_scheme.normalize(button);
                self.engine.on_mouse_button(button, down);
            }
            HostEvent::MouseMove { x, y } => self.engine.on_mouse_move(x, y),
            HostEvent::Wheel { dx, dy } => {
                if self.config.wheel {
                    self.engine.on_mouse_wheel(dx, dy);
                }
            }
        }
    }

    /// Native driver loop. Runs until the engine stops or `max_frames`
    /// frames were driven, and returns the number of frames driven.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&mut self, pacer: &mut FramePacer, max_frames: Option<u64>) -> HostResult<u64> {
        let mut driven = 0;
        while max_frames.map_or(true, |max| driven < max) {
            let running = self.frame()?;
            driven += 1;
            if !running {
                break;
            }
            pacer.sleep_to_next_frame();
        }
        Ok(driven)
    }

    /// `run` paced at the configured frame interval
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_configured(&mut self, max_frames: Option<u64>) -> HostResult<u64> {
        let mut pacer = FramePacer::from_config(&self.config);
        self.run(&mut pacer, max_frames)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    /// Solid-colour engine; stops after `stop_after` ticks.
    struct Flat {
        size: (u32, u32),
        pixels: Vec<u8>,
        ticks: u32,
        stop_after: u32,
    }

    impl Flat {
        fn new(width: u32, height: u32, stop_after: u32) -> Self {
            Self {
                size: (width, height),
                pixels: vec![0; rgba_len(width, height)],
                ticks: 0,
                stop_after,
            }
        }
    }

    impl Engine for Flat {
        fn size(&self) -> (u32, u32) {
            self.size
        }

        fn tick(&mut self) -> bool {
            self.ticks += 1;
            self.pixels.fill(self.ticks as u8);
            self.ticks < self.stop_after
        }

        fn pixel_buffer(&self) -> &[u8] {
            &self.pixels
        }

        fn on_key(&mut self, _: u32, _: bool) {}
        fn on_mouse_button(&mut self, _: u32, _: bool) {}
        fn on_mouse_move(&mut self, _: i32, _: i32) {}
        fn on_mouse_wheel(&mut self, _: i32, _: i32) {}
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let result = HostShell::new(Flat::new(4, 4, 1), MemorySurface::new(4, 3), HostConfig::default());
        assert!(matches!(
            result,
            Err(HostError::SizeMismatch { engine: (4, 4), surface: (4, 3) })
        ));
    }

    #[test]
    fn frame_presents_latest_pixels() {
        let mut shell = HostShell::new(Flat::new(3, 2, 10), MemorySurface::new(3, 2), HostConfig::default()).unwrap();
        assert!(shell.frame().unwrap());
        assert!(shell.frame().unwrap());
        assert_eq!(shell.frames(), 2);
        assert!(shell.surface().pixels().iter().all(|&b| b == 2));
    }

    #[test]
    fn oversized_buffer_copies_only_the_frame() {
        let mut engine = Flat::new(2, 2, 10);
        engine.pixels.extend_from_slice(&[9; 8]);
        let mut shell = HostShell::new(engine, MemorySurface::new(2, 2), HostConfig::default()).unwrap();
        shell.frame().unwrap();
        assert_eq!(shell.surface().pixels().len(), 16);
    }

    #[test]
    fn short_buffer_is_an_error() {
        let mut engine = Flat::new(2, 2, 10);
        engine.pixels.truncate(10);
        let mut shell = HostShell::new(engine, MemorySurface::new(2, 2), HostConfig::default()).unwrap();
        assert!(matches!(
            shell.render(),
            Err(HostError::PixelBufferSize { expected: 16, actual: 10 })
        ));
        assert_eq!(shell.surface().presents(), 0);
    }

    #[test]
    fn run_stops_with_the_engine() {
        let mut shell = HostShell::new(Flat::new(1, 1, 3), MemorySurface::new(1, 1), HostConfig::default()).unwrap();
        let driven = shell.run(&mut FramePacer::unpaced(), Some(100)).unwrap();
        assert_eq!(driven, 3);
        assert!(!shell.is_running());
        // the stopping frame is still presented
        assert_eq!(shell.surface().presents(), 3);
    }

    #[test]
    fn run_honours_frame_limit() {
        let mut shell = HostShell::new(Flat::new(1, 1, 100), MemorySurface::new(1, 1), HostConfig::default()).unwrap();
        assert_eq!(shell.run(&mut FramePacer::unpaced(), Some(5)).unwrap(), 5);
        assert!(shell.is_running());
    }

    #[test]
    fn run_configured_uses_the_config_interval() {
        let config = HostConfig { frame_interval_ms: 10.0, ..HostConfig::default() };
        let mut shell = HostShell::new(Flat::new(1, 1, 100), MemorySurface::new(1, 1), config).unwrap();
        let start = std::time::Instant::now();
        assert_eq!(shell.run_configured(Some(4)).unwrap(), 4);
        // three sleeps between four frames
        assert!(start.elapsed() >= std::time::Duration::from_millis(25));
    }
}
