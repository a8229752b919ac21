/// Millisecond stopwatch for frame stats.
///
/// `Instant` is unavailable on wasm32-unknown-unknown, so the browser build
/// reads `Date.now()` instead.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
}

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_since(start: Stamp) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(start: Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(self.start)
    }

    /// Run `f` and return its result with the time it took.
    pub(crate) fn time<R>(f: impl FnOnce() -> R) -> (R, f64) {
        let timer = Self::start();
        let out = f();
        (out, timer.elapsed_ms())
    }
}
