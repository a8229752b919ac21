use super::{PerfTimer, SimulationCore};

pub(super) fn tick(core: &mut SimulationCore) -> bool {
    if core.input.quit {
        return false;
    }

    let perf_on = core.perf_enabled;
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // a reset frame shows frame 0 and does not advance
    if core.input.reset {
        core.draw.camera = core.initial_camera;
        core.frame = 0;
        log::debug!("view reset");
    } else if core.input.advance_simulation || core.input.tick {
        core.frame += 1;
    }

    core.camera_mover.move_camera(&core.input, &mut core.draw.camera);

    if perf_on {
        let ((), render_ms) = PerfTimer::time(|| core.render());

        let counters = core.draw.counters();
        let stats = &mut core.perf_stats;
        stats.render_ms = render_ms;
        stats.frames = core.frame;
        stats.lines_drawn = counters.lines;
        stats.triangles_drawn = counters.triangles;
        stats.bodies = core.scene.bodies().len() as u32;
    } else {
        core.render();
    }

    core.input.clear();

    if let Some(t) = tick_start {
        core.perf_stats.tick_ms = t.elapsed_ms();
    }
    true
}
