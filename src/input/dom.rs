//! Translation of raw DOM event fields into `InputEvent`s.
//!
//! Unknown key codes and button ids are ignored here rather than by the host,
//! which forwards everything unfiltered.

use super::keyboard::Keycode;
use super::mouse::MouseButton;
use super::{InputCore, InputEvent};

/// `KeyboardEvent.keyCode` to engine key
pub fn keycode(code: u32) -> Option<Keycode> {
    match code {
        65 => Some(Keycode::A),
        68 => Some(Keycode::D),
        69 => Some(Keycode::E),
        81 => Some(Keycode::Q),
        82 => Some(Keycode::R),
        83 => Some(Keycode::S),
        87 => Some(Keycode::W),
        13 => Some(Keycode::Return),
        32 => Some(Keycode::Space),
        9 => Some(Keycode::Tab),
        27 => Some(Keycode::Escape),
        _ => None,
    }
}

/// `MouseEvent.button` to engine button
pub fn mouse_button(button: u32) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

pub fn key(code: u32, down: bool, input: &mut InputCore) {
    if let Some(key) = keycode(code) {
        input.handle_event(if down {
            InputEvent::KeyDown { key }
        } else {
            InputEvent::KeyUp { key }
        });
    }
}

pub fn button(code: u32, down: bool, input: &mut InputCore) {
    if let Some(button) = mouse_button(code) {
        input.handle_event(if down {
            InputEvent::MouseButtonDown { button }
        } else {
            InputEvent::MouseButtonUp { button }
        });
    }
}

/// Absolute cursor position; relative motion is taken against the last one.
pub fn mouse_move(x: i32, y: i32, input: &mut InputCore) {
    let xrel = x.saturating_sub(input.mouse_state.x);
    let yrel = y.saturating_sub(input.mouse_state.y);
    input.handle_event(InputEvent::MouseMotion { x, y, xrel, yrel });
}

/// DOM wheel deltas grow downward; the engine counts wheel-up as positive.
pub fn mouse_wheel(dx: i32, dy: i32, input: &mut InputCore) {
    input.handle_event(InputEvent::MouseWheel { xrel: dx, yrel: dy.saturating_neg() });
}
