use crate::domain::Vec2;
use crate::systems::behavior;

use super::{SimCore, SimState};

pub(super) fn set_pointer(core: &mut SimCore, x: f32, y: f32) {
    let p = Vec2::new(x, y);
    if p.is_finite() {
        core.pointer = p;
    }
}

pub(super) fn throw_ball(core: &mut SimCore, x: f32, y: f32) -> bool {
    let target = Vec2::new(x, y);
    let state = &mut core.state;
    let from = state.mode;

    let accepted = behavior::throw_ball(
        &mut state.mode,
        &state.agent,
        &mut state.ball,
        &state.wetness,
        target,
        &core.config,
    );

    if accepted {
        engine_log!("mode {} -> {} (throw to {:.0},{:.0})", from, state.mode, x, y);
        if core.perf_enabled {
            core.perf_stats.throws_accepted += 1;
        }
    } else {
        engine_warn!("throw ignored: too wet ({:.1}%)", state.wetness.value());
        if core.perf_enabled {
            core.perf_stats.throws_rejected += 1;
        }
    }
    accepted
}

pub(super) fn queue_throw(core: &mut SimCore, x: f32, y: f32) {
    let target = Vec2::new(x, y);
    if target.is_finite() {
        core.pending_throw = Some(target);
    }
}

pub(super) fn set_drying(core: &mut SimCore, held: bool) {
    core.drying = held;
}

pub(super) fn set_wetness(core: &mut SimCore, value: f32) {
    core.state.wetness.set(value);
}

pub(super) fn reset(core: &mut SimCore) {
    let center = core.viewport.center();
    core.state = SimState::new(center);
    core.pointer = center;
    core.drying = false;
    core.pending_throw = None;
    core.clock.reset();
}
