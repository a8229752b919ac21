/// Keys the engine reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keycode {
    A,
    D,
    E,
    Q,
    R,
    S,
    W,
    Return,
    Space,
    Tab,
    Escape,
}

impl Keycode {
    pub const COUNT: usize = 11;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardState {
    states: [bool; Keycode::COUNT],
}

impl KeyboardState {
    pub fn set(&mut self, key: Keycode, pressed: bool) {
        self.states[key as usize] = pressed;
    }

    pub fn get(&self, key: Keycode) -> bool {
        self.states[key as usize]
    }

    /// +1 when only `pos` is held, -1 when only `neg` is held
    pub fn axis(&self, pos: Keycode, neg: Keycode) -> f64 {
        f64::from(i8::from(self.get(pos)) - i8::from(self.get(neg)))
    }
}
