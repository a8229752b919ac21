//! Browser driver: canvas lookup, DOM listeners and the 60 Hz interval.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

use crate::core::config::{ButtonScheme, HostConfig};
use crate::core::error::{HostError, HostResult};
use crate::core::logging;
use crate::simulation::SimulationCore;

use super::canvas::{dom_err, CanvasSurface};
use super::{HostEvent, HostShell};

/// Handle to the running browser shell, shared with every listener.
pub type Shell = Rc<RefCell<HostShell<SimulationCore, CanvasSurface>>>;

/// Mount the engine on the canvas `canvas_id` and start the frame interval.
///
/// Listeners and the interval live for the rest of the page. The returned
/// handle shares the shell with them.
pub fn start(canvas_id: &str, config: HostConfig) -> HostResult<Shell> {
    config.validate()?;
    logging::init(config.log_level());

    let window = web_sys::window().ok_or_else(|| HostError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| HostError::Dom("no document".into()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| HostError::Dom(format!("canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::Dom(format!("#{} is not a canvas", canvas_id)))?;

    let surface = CanvasSurface::new(canvas.clone(), config.width, config.height)?;
    let mut engine = SimulationCore::with_settings(config.width, config.height, &config.scene_settings());
    engine.enable_perf_metrics(config.perf_metrics);

    let interval = config.interval_millis();
    let wheel = config.wheel;
    let scheme = config.button_scheme;
    let shell: Shell = Rc::new(RefCell::new(HostShell::new(engine, surface, config)?));

    register_keys(&document, &shell)?;
    register_mouse(&document, &canvas, &shell, scheme)?;
    if wheel {
        register_wheel(&canvas, &shell)?;
    }
    log::info!("listeners registered on #{} (wheel: {})", canvas_id, wheel);

    let tick_shell = Rc::clone(&shell);
    // the interval keeps firing after the engine stops; the shell logs
    // the transition and the engine leaves its last frame untouched
    Interval::new(interval, move || {
        if let Err(err) = tick_shell.borrow_mut().frame() {
            log::error!("frame failed: {}", err);
        }
    })
    .forget();

    log::info!("frame interval started: {} ms", interval);
    Ok(shell)
}

fn listen<T, F>(target: &EventTarget, name: &str, shell: &Shell, to_event: F) -> HostResult<()>
where
    T: JsCast + 'static,
    F: Fn(&T) -> HostEvent + 'static,
{
    let shell = Rc::clone(shell);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(event) = event.dyn_ref::<T>() {
            shell.borrow_mut().relay(to_event(event));
        }
    });
    target
        .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    callback.forget();
    Ok(())
}

fn register_keys(document: &Document, shell: &Shell) -> HostResult<()> {
    listen(document, "keydown", shell, |e: &KeyboardEvent| HostEvent::Key { code: e.key_code(), down: true })?;
    listen(document, "keyup", shell, |e: &KeyboardEvent| HostEvent::Key { code: e.key_code(), down: false })
}

/// Buttons are heard on the whole document so a drag released outside the
/// canvas still lets go; motion only counts over the canvas.
fn register_mouse(
    document: &Document,
    canvas: &HtmlCanvasElement,
    shell: &Shell,
    scheme: ButtonScheme,
) -> HostResult<()> {
    listen(document, "mousedown", shell, move |e: &MouseEvent| {
        HostEvent::mouse_button(e.button(), e.which(), true, scheme)
    })?;
    listen(document, "mouseup", shell, move |e: &MouseEvent| {
        HostEvent::mouse_button(e.button(), e.which(), false, scheme)
    })?;
    listen(canvas, "mousemove", shell, |e: &MouseEvent| HostEvent::MouseMove {
        x: e.offset_x(),
        y: e.offset_y(),
    })
}

fn register_wheel(canvas: &HtmlCanvasElement, shell: &Shell) -> HostResult<()> {
    listen(canvas, "wheel", shell, |e: &WheelEvent| HostEvent::wheel(e.delta_x(), e.delta_y()))
}
