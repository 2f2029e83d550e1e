use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::Mode;

/// Everything the renderer reads once per frame
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub(super) frame: u64,
    pub(super) mode: Mode,

    pub(super) dog_x: f32,
    pub(super) dog_y: f32,
    pub(super) facing: i8,
    pub(super) running: bool,
    pub(super) run_intensity: f32,
    pub(super) wag_angle: f32,
    pub(super) gait_phase: f32,
    pub(super) cape_phase: f32,

    pub(super) bounce: f32,
    pub(super) front_leg_swing: f32,
    pub(super) back_leg_swing: f32,
    pub(super) cape_wave: f32,

    pub(super) ball_x: f32,
    pub(super) ball_y: f32,
    pub(super) ball_visible: bool,

    pub(super) wetness: f32,
    pub(super) too_wet: bool,
    pub(super) dripping: bool,
    pub(super) drying: bool,
}

#[wasm_bindgen]
impl FrameSnapshot {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    /// Mode name: idle | ball_flying | chasing | returning
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String { self.mode.as_str().to_string() }
    #[wasm_bindgen(getter)]
    pub fn mode_code(&self) -> u8 { self.mode.code() }

    #[wasm_bindgen(getter)]
    pub fn dog_x(&self) -> f32 { self.dog_x }
    #[wasm_bindgen(getter)]
    pub fn dog_y(&self) -> f32 { self.dog_y }
    /// +1 facing right, -1 facing left
    #[wasm_bindgen(getter)]
    pub fn facing(&self) -> i8 { self.facing }
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.running }
    #[wasm_bindgen(getter)]
    pub fn run_intensity(&self) -> f32 { self.run_intensity }
    #[wasm_bindgen(getter)]
    pub fn wag_angle(&self) -> f32 { self.wag_angle }
    #[wasm_bindgen(getter)]
    pub fn gait_phase(&self) -> f32 { self.gait_phase }
    #[wasm_bindgen(getter)]
    pub fn cape_phase(&self) -> f32 { self.cape_phase }

    #[wasm_bindgen(getter)]
    pub fn bounce(&self) -> f32 { self.bounce }
    #[wasm_bindgen(getter)]
    pub fn front_leg_swing(&self) -> f32 { self.front_leg_swing }
    #[wasm_bindgen(getter)]
    pub fn back_leg_swing(&self) -> f32 { self.back_leg_swing }
    #[wasm_bindgen(getter)]
    pub fn cape_wave(&self) -> f32 { self.cape_wave }

    #[wasm_bindgen(getter)]
    pub fn ball_x(&self) -> f32 { self.ball_x }
    #[wasm_bindgen(getter)]
    pub fn ball_y(&self) -> f32 { self.ball_y }
    #[wasm_bindgen(getter)]
    pub fn ball_visible(&self) -> bool { self.ball_visible }

    #[wasm_bindgen(getter)]
    pub fn wetness(&self) -> f32 { self.wetness }
    #[wasm_bindgen(getter)]
    pub fn too_wet(&self) -> bool { self.too_wet }
    #[wasm_bindgen(getter)]
    pub fn dripping(&self) -> bool { self.dripping }
    #[wasm_bindgen(getter)]
    pub fn drying(&self) -> bool { self.drying }
}

impl FrameSnapshot {
    pub fn mode_kind(&self) -> Mode { self.mode }
}
