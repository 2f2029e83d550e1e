use crate::domain::{Mode, SimConfig, Viewport};

use super::SimCore;

/// Replace the config; on error the previous config stays active
pub(super) fn load_config_json(core: &mut SimCore, json: &str) -> Result<(), String> {
    match SimConfig::from_json(json) {
        Ok(config) => {
            core.config = config;
            engine_log!("config loaded");
            Ok(())
        }
        Err(e) => {
            engine_warn!("config rejected: {}", e);
            Err(e)
        }
    }
}

/// The new viewport applies from the next step; the dog and the ball are
/// pulled back inside it immediately so a chase can still finish.
pub(super) fn resize(core: &mut SimCore, width: u32, height: u32) {
    core.viewport = Viewport::new(width as f32, height as f32);
    let cfg = &core.config;
    let state = &mut core.state;

    state.agent.pos = core.viewport.clamp_agent(state.agent.pos, cfg);
    state.agent.prev_pos = state.agent.pos;

    match state.mode {
        Mode::Returning => state.ball.carry(state.agent.pos, cfg.carry_offset),
        Mode::Chasing => state.ball.confine(core.viewport, true, cfg),
        Mode::Idle | Mode::BallFlying => state.ball.confine(core.viewport, false, cfg),
    }
    engine_log!("viewport {}x{}", width, height);
}

pub(super) fn enable_perf_metrics(core: &mut SimCore, enabled: bool) {
    core.perf_enabled = enabled;
    core.perf_stats.reset();
}
