use crate::domain::{SimConfig, Viewport};

use super::perf_stats::PerfStats;
use super::{FrameClock, SimCore, SimState};

/// Dog, ball and pointer all start at the viewport centre
pub(super) fn create_sim_core(width: u32, height: u32, config: SimConfig) -> SimCore {
    let viewport = Viewport::new(width as f32, height as f32);
    let center = viewport.center();

    SimCore {
        config,
        state: SimState::new(center),
        viewport,
        pointer: center,
        drying: false,
        pending_throw: None,
        clock: FrameClock::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
