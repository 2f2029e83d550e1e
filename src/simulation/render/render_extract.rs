use crate::systems::animation;

use super::snapshot::FrameSnapshot;
use super::SimCore;

pub(super) fn extract_snapshot(core: &SimCore) -> FrameSnapshot {
    let cfg = &core.config;
    let state = &core.state;
    let agent = &state.agent;
    let pose = animation::pose(agent);

    FrameSnapshot {
        frame: state.frame,
        mode: state.mode,

        dog_x: agent.pos.x,
        dog_y: agent.pos.y,
        facing: agent.facing.sign(),
        running: agent.running,
        run_intensity: agent.run_intensity,
        wag_angle: agent.wag_angle,
        gait_phase: agent.gait_phase,
        cape_phase: agent.cape_phase,

        bounce: pose.bounce,
        front_leg_swing: pose.front_leg_swing,
        back_leg_swing: pose.back_leg_swing,
        cape_wave: pose.cape_wave,

        ball_x: state.ball.pos.x,
        ball_y: state.ball.pos.y,
        ball_visible: state.ball.visible,

        wetness: state.wetness.value(),
        too_wet: state.wetness.is_gated(cfg),
        dripping: state.wetness.is_dripping(cfg),
        drying: core.drying,
    }
}

pub(super) fn snapshot_json(core: &SimCore) -> String {
    serde_json::to_string(&extract_snapshot(core)).unwrap_or_else(|_| "{}".to_string())
}
