/// The engine side of the host boundary.
///
/// The host only ever steps the engine, reads its pixel buffer and forwards
/// raw input fields. Code translation and filtering belong to the engine.
pub trait Engine {
    /// Pixel size the engine renders at
    fn size(&self) -> (u32, u32);

    /// Advance one frame. Returns false once the engine wants to stop.
    fn tick(&mut self) -> bool;

    /// Current RGBA frame. At least `width * height * 4` bytes.
    fn pixel_buffer(&self) -> &[u8];

    fn on_key(&mut self, code: u32, down: bool);
    fn on_mouse_button(&mut self, button: u32, down: bool);
    fn on_mouse_move(&mut self, x: i32, y: i32);
    fn on_mouse_wheel(&mut self, dx: i32, dy: i32);
}
