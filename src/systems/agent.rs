use serde::Serialize;

use crate::domain::Vec2;

/// Which way the dog sprite faces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// `+1` for right, `-1` for left (sprite x-scale)
    pub fn sign(self) -> i8 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// The dog. Position is simulation state; the rest are presentation signals
/// re-derived every frame from the realized displacement and the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Agent {
    pub pos: Vec2,
    /// Position at the end of the previous frame
    pub prev_pos: Vec2,
    pub facing: Facing,
    /// 0 = idle pose, 1 = full sprint
    pub run_intensity: f32,
    /// Tail angle in degrees
    pub wag_angle: f32,
    /// Radians, wrapped to [0, 2π)
    pub wag_phase: f32,
    pub gait_phase: f32,
    pub cape_phase: f32,
    pub running: bool,
}

impl Agent {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            ..Self::default()
        }
    }
}
