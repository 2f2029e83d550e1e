//! Presentation signals derived from realized motion and elapsed time
//!
//! Phases advance with time, not distance, so the tail keeps wagging and the
//! cape keeps fluttering while the dog stands still.

use std::f32::consts::{PI, TAU};

use serde::Serialize;

use crate::domain::SimConfig;

use super::agent::{Agent, Facing};

/// Renderer-facing pose values computed from the phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    /// Vertical body bob (px)
    pub bounce: f32,
    /// Leg rotations (degrees)
    pub front_leg_swing: f32,
    pub back_leg_swing: f32,
    /// Cape rotation offset (degrees)
    pub cape_wave: f32,
}

#[inline]
fn wrap_phase(phase: f32) -> f32 {
    let p = phase.rem_euclid(TAU);
    if p.is_finite() { p } else { 0.0 }
}

/// Update facing, run intensity and animation phases from this frame's
/// displacement, then remember the current position for the next frame.
pub fn derive(agent: &mut Agent, dt: f32, gated: bool, cfg: &SimConfig) {
    let disp = agent.pos - agent.prev_pos;
    let speed = disp.length() / dt.max(1e-6);

    agent.running = speed > cfg.run_deadband && !gated;
    agent.run_intensity = if agent.running {
        ((speed - cfg.run_deadband) / cfg.run_ramp).clamp(0.0, 1.0)
    } else {
        0.0
    };

    if disp.x.abs() > cfg.facing_deadband {
        agent.facing = if disp.x >= 0.0 { Facing::Right } else { Facing::Left };
    }

    let (wag_hz, wag_amp, gait_rate, cape_rate) = if agent.running {
        (cfg.wag_hz_running, cfg.wag_amp_running, cfg.gait_rate_running, cfg.cape_rate_running)
    } else {
        (cfg.wag_hz_idle, cfg.wag_amp_idle, cfg.gait_rate_idle, cfg.cape_rate_idle)
    };

    agent.wag_phase = wrap_phase(agent.wag_phase + TAU * wag_hz * dt);
    agent.gait_phase = wrap_phase(agent.gait_phase + gait_rate * dt);
    agent.cape_phase = wrap_phase(agent.cape_phase + cape_rate * dt);

    // Tail droops when soaked
    agent.wag_angle = if gated { 0.0 } else { agent.wag_phase.sin() * wag_amp };

    agent.prev_pos = agent.pos;
}

pub fn pose(agent: &Agent) -> Pose {
    let run = agent.run_intensity;
    Pose {
        bounce: agent.gait_phase.sin() * 6.0 * run,
        front_leg_swing: agent.gait_phase.sin() * 18.0 * run,
        back_leg_swing: (agent.gait_phase + PI).sin() * 18.0 * run,
        cape_wave: agent.cape_phase.sin() * (12.0 + 10.0 * run),
    }
}
