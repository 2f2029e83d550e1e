//! Host time: frame deltas for the animation loop and a stopwatch for perf

/// Milliseconds from the host clock (`Date.now()` in the browser)
pub(crate) fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Turns display-refresh timestamps into clamped step deltas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, clamped to `[0, max_dt]`.
    /// The first call (and any call after `reset`) yields 0.
    pub fn advance(&mut self, now_ms: f64, max_dt: f32) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = ((now_ms - last) / 1000.0) as f32;
        dt.max(0.0).min(max_dt)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Stopwatch {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Stopwatch { start_ms: now_ms() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Stopwatch { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            now_ms() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(12_345.0, 0.05), 0.0);
    }

    #[test]
    fn regular_ticks_yield_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.05);
        let dt = clock.advance(1016.0, 0.05);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.05);
        assert_eq!(clock.advance(4000.0, 0.05), 0.05);
    }

    #[test]
    fn backwards_time_yields_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.05);
        assert_eq!(clock.advance(900.0, 0.05), 0.0);
        // the earlier timestamp becomes the new reference
        let dt = clock.advance(920.0, 0.05);
        assert!((dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0, 0.05);
        clock.reset();
        assert_eq!(clock.advance(5000.0, 0.05), 0.0);
    }

    #[test]
    fn stopwatch_is_monotonic() {
        let sw = Stopwatch::start();
        assert!(sw.elapsed_ms() >= 0.0);
    }
}
