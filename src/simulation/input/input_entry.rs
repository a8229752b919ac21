use crate::input::dom;

use super::SimulationCore;

pub(super) fn on_key(core: &mut SimulationCore, code: u32, down: bool) {
    dom::key(code, down, &mut core.input);
}

pub(super) fn on_mouse_button(core: &mut SimulationCore, button: u32, down: bool) {
    dom::button(button, down, &mut core.input);
}

pub(super) fn on_mouse_move(core: &mut SimulationCore, x: i32, y: i32) {
    dom::mouse_move(x, y, &mut core.input);
}

pub(super) fn on_mouse_wheel(core: &mut SimulationCore, dx: i32, dy: i32) {
    dom::mouse_wheel(dx, dy, &mut core.input);
}
