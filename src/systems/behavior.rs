//! Behavior controller - the fetch loop
//!
//! `idle -> ball_flying -> chasing -> returning -> idle`
//!
//! Each step acts on the mode that was active when the step began, so a
//! single step performs at most one transition.

use crate::domain::viewport::clamp_axis;
use crate::domain::{Mode, SimConfig, Vec2};

use super::agent::Agent;
use super::locomotion::move_toward;
use super::projectile::{Ball, Flight};
use super::wetness::Wetness;

/// Launch velocity that lands the ball near `target` after a bounded flight
/// time, with a fixed upward bias so the path arcs.
pub fn launch_velocity(start: Vec2, target: Vec2, cfg: &SimConfig) -> Vec2 {
    let delta = target - start;
    let time = clamp_axis(
        delta.length() / cfg.throw_speed_scale,
        cfg.throw_time_min,
        cfg.throw_time_max,
    );
    Vec2::new(delta.x / time, delta.y / time - cfg.throw_lift)
}

/// Throw from the dog's position toward `target`.
///
/// Returns false (and changes nothing) while the wetness gate is active.
pub fn throw_ball(
    mode: &mut Mode,
    agent: &Agent,
    ball: &mut Ball,
    wetness: &Wetness,
    target: Vec2,
    cfg: &SimConfig,
) -> bool {
    if wetness.is_gated(cfg) || !target.is_finite() {
        return false;
    }
    ball.launch(agent.pos, launch_velocity(agent.pos, target, cfg));
    *mode = Mode::BallFlying;
    true
}

/// Run the per-mode action for one step and report the next mode, if any.
///
/// `max_step` is how far the dog may travel this step (0 while gated).
pub fn advance(
    mode: Mode,
    flight: Flight,
    agent: &mut Agent,
    ball: &mut Ball,
    pointer: Vec2,
    max_step: f32,
    cfg: &SimConfig,
) -> Option<Mode> {
    match mode {
        Mode::Idle => None,
        Mode::BallFlying => match flight {
            Flight::Settled => Some(Mode::Chasing),
            Flight::Airborne => None,
        },
        Mode::Chasing => {
            agent.pos = move_toward(agent.pos, ball.pos, max_step);
            if agent.pos.distance(ball.pos) <= cfg.pickup_radius {
                Some(Mode::Returning)
            } else {
                None
            }
        }
        Mode::Returning => {
            agent.pos = move_toward(agent.pos, pointer, max_step);
            ball.carry(agent.pos, cfg.carry_offset);
            if agent.pos.distance(pointer) <= cfg.return_radius {
                ball.pos = pointer + cfg.deposit_offset;
                Some(Mode::Idle)
            } else {
                None
            }
        }
    }
}
