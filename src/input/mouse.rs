#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const COUNT: usize = 3;
}

/// Cursor position, per-frame motion and wheel, button flags
#[derive(Clone, Copy, Debug, Default)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
    pub wheel_x: i32,
    pub wheel_y: i32,
    states: [bool; MouseButton::COUNT],
}

impl MouseState {
    /// Drop the per-frame deltas; position and buttons persist
    pub fn reset(&mut self) {
        self.xrel = 0;
        self.yrel = 0;
        self.wheel_x = 0;
        self.wheel_y = 0;
    }

    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        self.states[button as usize] = pressed;
    }

    pub fn get(&self, button: MouseButton) -> bool {
        self.states[button as usize]
    }
}
