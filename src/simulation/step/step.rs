use crate::domain::{Mode, SimConfig};
use crate::systems::{animation, behavior, projectile, Flight};

use super::{FrameInputs, SimCore, SimState, Stopwatch};

/// What happened during one step (for logging, perf and tests)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// A queued throw was applied this step
    pub thrown: bool,
    /// A queued throw was refused by the wetness gate
    pub throw_rejected: bool,
    /// Controller transition `(from, to)`
    pub transition: Option<(Mode, Mode)>,
    /// `dt` was not positive; nothing was integrated
    pub skipped: bool,
    /// Locomotion was suppressed by wetness
    pub gated: bool,
}

/// Pure step: `state' = step(state, dt, inputs)`
pub fn step(state: &SimState, dt: f32, inputs: &FrameInputs, cfg: &SimConfig) -> SimState {
    let mut next = state.clone();
    advance_state(&mut next, dt, inputs, cfg);
    next
}

/// In-place form of [`step`]
pub fn advance_state(
    state: &mut SimState,
    dt: f32,
    inputs: &FrameInputs,
    cfg: &SimConfig,
) -> StepReport {
    let mut report = StepReport::default();
    state.frame += 1;

    if let Some(target) = inputs.throw_target {
        let accepted = behavior::throw_ball(
            &mut state.mode,
            &state.agent,
            &mut state.ball,
            &state.wetness,
            target,
            cfg,
        );
        report.thrown = accepted;
        report.throw_rejected = !accepted;
    }

    if dt.is_nan() || dt <= 0.0 {
        report.skipped = true;
        return report;
    }
    let dt = dt.min(cfg.max_dt);

    // === WETNESS ===
    state.wetness.advance(dt, inputs.drying, cfg);
    let gated = state.wetness.is_gated(cfg);
    report.gated = gated;
    let max_step = if gated { 0.0 } else { cfg.agent_speed * dt };

    // === PROJECTILE ===
    let mode = state.mode;
    let flight = if mode.ball_in_flight() {
        projectile::integrate(&mut state.ball, dt, inputs.viewport, cfg)
    } else {
        Flight::Airborne
    };

    // === BEHAVIOR ===
    if let Some(next) = behavior::advance(
        mode,
        flight,
        &mut state.agent,
        &mut state.ball,
        inputs.pointer,
        max_step,
        cfg,
    ) {
        state.mode = next;
        report.transition = Some((mode, next));
    }

    // === BOUNDS ===
    state.agent.pos = inputs.viewport.clamp_agent(state.agent.pos, cfg);
    if state.mode == Mode::Returning {
        state.ball.carry(state.agent.pos, cfg.carry_offset);
    }

    // === PRESENTATION ===
    animation::derive(&mut state.agent, dt, gated, cfg);

    state.elapsed += dt as f64;
    report
}

pub(super) fn step_core(core: &mut SimCore, dt: f32) -> StepReport {
    let timer = if core.perf_enabled { Some(Stopwatch::start()) } else { None };

    // Snapshot inputs once for the whole step
    let inputs = FrameInputs {
        pointer: core.pointer,
        throw_target: core.pending_throw.take(),
        drying: core.drying,
        viewport: core.viewport,
    };

    let report = advance_state(&mut core.state, dt, &inputs, &core.config);

    if report.throw_rejected {
        engine_warn!(
            "throw ignored: too wet ({:.1}%)",
            core.state.wetness.value()
        );
    }
    if let Some((from, to)) = report.transition {
        engine_log!("mode {} -> {} (frame {})", from, to, core.state.frame);
    }

    if let Some(timer) = timer {
        let stats = &mut core.perf_stats;
        stats.step_ms = timer.elapsed_ms();
        stats.steps += 1;
        if report.skipped {
            stats.skipped_steps += 1;
        }
        if report.gated {
            stats.gated_steps += 1;
        }
        if report.transition.is_some() {
            stats.transitions += 1;
        }
        if report.thrown {
            stats.throws_accepted += 1;
        }
        if report.throw_rejected {
            stats.throws_rejected += 1;
        }
    }

    report
}
