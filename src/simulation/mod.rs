//! Simulation - one owned state record advanced by an explicit tick
//!
//! Per-step order:
//! 1. apply a queued throw (event-time wetness decides acceptance)
//! 2. wetness (rain in, drying out)
//! 3. projectile integration while the ball is in flight
//! 4. behavior transition + locomotion for the mode active at step start
//! 5. clamp the dog into the viewport
//! 6. presentation signals from the realized displacement
//!
//! `step()` is pure; `SimCore` wraps it with the host-facing inputs
//! (pointer, drying, pending throw, viewport), a frame clock and perf.

use serde::Serialize;

use crate::domain::{Mode, SimConfig, Vec2, Viewport};
use crate::systems::{Agent, Ball, Wetness};

#[path = "clock/clock.rs"]
mod clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod frame_step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/snapshot.rs"]
mod snapshot;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use clock::FrameClock;
pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use snapshot::FrameSnapshot;
pub use frame_step::{advance_state, step, StepReport};

use clock::Stopwatch;

/// Everything that evolves from frame to frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimState {
    pub mode: Mode,
    pub agent: Agent,
    pub ball: Ball,
    pub wetness: Wetness,
    /// Steps taken, including skipped (dt <= 0) ones
    pub frame: u64,
    /// Simulated seconds
    pub elapsed: f64,
}

impl SimState {
    /// Dog and (hidden) ball at `pos`, idle and dry
    pub fn new(pos: Vec2) -> Self {
        Self {
            mode: Mode::Idle,
            agent: Agent::at(pos),
            ball: Ball::hidden_at(pos),
            wetness: Wetness::default(),
            frame: 0,
            elapsed: 0.0,
        }
    }
}

/// External inputs, sampled once at the start of a step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub pointer: Vec2,
    pub throw_target: Option<Vec2>,
    pub drying: bool,
    pub viewport: Viewport,
}

impl FrameInputs {
    pub fn new(viewport: Viewport, pointer: Vec2) -> Self {
        Self {
            pointer,
            throw_target: None,
            drying: false,
            viewport,
        }
    }
}

/// Host-side owner of the simulation
pub struct SimCore {
    config: SimConfig,
    state: SimState,
    viewport: Viewport,

    // Inputs, latched between frames
    pointer: Vec2,
    drying: bool,
    pending_throw: Option<Vec2>,

    clock: FrameClock,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimCore {
    pub fn new(width: u32, height: u32) -> Self {
        init::create_sim_core(width, height, SimConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: SimConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_sim_core(width, height, config))
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn state(&self) -> &SimState { &self.state }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn pointer(&self) -> Vec2 { self.pointer }

    pub fn is_drying(&self) -> bool { self.drying }

    pub fn mode(&self) -> Mode { self.state.mode }

    pub fn frame(&self) -> u64 { self.state.frame }

    pub fn is_gated(&self) -> bool {
        self.state.wetness.is_gated(&self.config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    /// Enable or disable perf counters (resets them)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        commands::set_pointer(self, x, y);
    }

    /// Throw immediately; false while too wet
    pub fn throw_ball(&mut self, x: f32, y: f32) -> bool {
        commands::throw_ball(self, x, y)
    }

    /// Throw at the start of the next step
    pub fn queue_throw(&mut self, x: f32, y: f32) {
        commands::queue_throw(self, x, y);
    }

    pub fn set_drying(&mut self, held: bool) {
        commands::set_drying(self, held);
    }

    pub fn set_wetness(&mut self, value: f32) {
        commands::set_wetness(self, value);
    }

    /// Back to the initial state (dog centred, dry, idle)
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Advance by a host display timestamp (ms)
    pub fn tick(&mut self, now_ms: f64) -> StepReport {
        let dt = self.clock.advance(now_ms, self.config.max_dt);
        self.step(dt)
    }

    /// Advance using the host clock directly
    pub fn tick_now(&mut self) -> StepReport {
        self.tick(clock::now_ms())
    }

    /// Advance by exactly `dt` seconds (clamped to `max_dt`)
    pub fn step(&mut self, dt: f32) -> StepReport {
        frame_step::step_core(self, dt)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        render_extract::extract_snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
