//! Engine-side input model.
//!
//! Raw DOM codes are translated in `dom`, folded into `InputCore` as
//! `InputEvent`s and consumed once per frame by the camera mover and the
//! frame driver. `clear` runs at the end of every tick.

pub mod camera_mover;
pub mod dom;
pub mod keyboard;
pub mod mouse;

use keyboard::{KeyboardState, Keycode};
use mouse::{MouseButton, MouseState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: Keycode },
    KeyUp { key: Keycode },
    MouseButtonDown { button: MouseButton },
    MouseButtonUp { button: MouseButton },
    MouseMotion { x: i32, y: i32, xrel: i32, yrel: i32 },
    MouseWheel { xrel: i32, yrel: i32 },
}

pub struct InputCore {
    pub keyboard_state: KeyboardState,
    pub mouse_state: MouseState,
    /// Frame counter runs while set; toggled by Space
    pub advance_simulation: bool,
    /// One-shot: restore the initial view (R)
    pub reset: bool,
    /// One-shot: advance a single frame while paused (Return)
    pub tick: bool,
    /// Sticky: engine should stop (Escape)
    pub quit: bool,
    /// Wireframe debug view; toggled by Tab
    pub debug: bool,
}

impl InputCore {
    pub fn new() -> Self {
        Self {
            keyboard_state: KeyboardState::default(),
            mouse_state: MouseState::default(),
            advance_simulation: true,
            reset: false,
            tick: false,
            quit: false,
            debug: false,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.keyboard_state.set(key, true),
            InputEvent::KeyUp { key } => self.key_up(key),
            InputEvent::MouseButtonDown { button } => self.mouse_state.set(button, true),
            InputEvent::MouseButtonUp { button } => self.mouse_state.set(button, false),
            InputEvent::MouseMotion { x, y, xrel, yrel } => {
                let mouse = &mut self.mouse_state;
                mouse.x = x;
                mouse.y = y;
                // several moves can land within one frame
                mouse.xrel = mouse.xrel.saturating_add(xrel);
                mouse.yrel = mouse.yrel.saturating_add(yrel);
            }
            InputEvent::MouseWheel { xrel, yrel } => {
                let mouse = &mut self.mouse_state;
                mouse.wheel_x = mouse.wheel_x.saturating_add(xrel);
                mouse.wheel_y = mouse.wheel_y.saturating_add(yrel);
            }
        }
    }

    /// End-of-frame cleanup of one-shot flags and deltas.
    pub fn clear(&mut self) {
        self.mouse_state.reset();
        self.reset = false;
        self.tick = false;
    }

    /// Release edge: actions only fire if the key was actually held.
    fn key_up(&mut self, key: Keycode) {
        if self.keyboard_state.get(key) {
            match key {
                Keycode::Escape => self.quit = true,
                Keycode::R => self.reset = true,
                Keycode::Return => self.tick = true,
                Keycode::Space => self.advance_simulation = !self.advance_simulation,
                Keycode::Tab => self.debug = !self.debug,
                _ => (),
            }
        }
        self.keyboard_state.set(key, false);
    }
}

impl Default for InputCore {
    fn default() -> Self {
        Self::new()
    }
}
