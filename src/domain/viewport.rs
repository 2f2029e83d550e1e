use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::vec2::Vec2;

/// Host viewport in pixels, sampled once per frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// The y coordinate the ball bounces on and the agent stands on
    pub fn ground_y(&self, cfg: &SimConfig) -> f32 {
        self.height - cfg.ground_pad
    }

    /// Clamp an agent position into `[m, w-m] x [m, ground]`
    pub fn clamp_agent(&self, p: Vec2, cfg: &SimConfig) -> Vec2 {
        let m = cfg.agent_margin;
        Vec2::new(
            clamp_axis(p.x, m, self.width - m),
            clamp_axis(p.y, m, self.ground_y(cfg)),
        )
    }
}

/// Clamp that tolerates `lo > hi` (tiny viewports): the lower bound wins.
#[inline]
pub fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}
