use crate::render::Color;

use super::SimulationCore;

const BACKGROUND: Color = Color::BLACK;

pub(super) fn render(core: &mut SimulationCore) {
    core.draw.clear(BACKGROUND);
    if core.input.debug {
        core.scene.draw_debug(&mut core.draw, core.frame);
    } else {
        core.scene.draw(&mut core.draw, core.frame);
    }
}
