use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::snapshot::FrameSnapshot;
use super::SimCore;

#[wasm_bindgen]
pub struct Simulation {
    core: SimCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation for a viewport of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable perf counters (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === INPUT ===

    #[wasm_bindgen(js_name = setPointer)]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    /// Throw toward (x, y) right away. Returns false while too wet.
    #[wasm_bindgen(js_name = throwBall)]
    pub fn throw_ball(&mut self, x: f32, y: f32) -> bool {
        self.core.throw_ball(x, y)
    }

    /// Throw toward (x, y) at the start of the next step
    #[wasm_bindgen(js_name = queueThrow)]
    pub fn queue_throw(&mut self, x: f32, y: f32) {
        self.core.queue_throw(x, y);
    }

    /// Blow-dryer held (true) or released (false)
    #[wasm_bindgen(js_name = setDrying)]
    pub fn set_drying(&mut self, held: bool) {
        self.core.set_drying(held);
    }

    // === STEPPING ===

    /// Advance from a requestAnimationFrame timestamp (ms)
    pub fn tick(&mut self, now_ms: f64) {
        self.core.tick(now_ms);
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    // === OUTPUT ===

    pub fn snapshot(&self) -> FrameSnapshot {
        self.core.snapshot()
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String { self.core.mode().as_str().to_string() }

    #[wasm_bindgen(getter)]
    pub fn dog_x(&self) -> f32 { self.core.state().agent.pos.x }

    #[wasm_bindgen(getter)]
    pub fn dog_y(&self) -> f32 { self.core.state().agent.pos.y }

    #[wasm_bindgen(getter)]
    pub fn facing(&self) -> i8 { self.core.state().agent.facing.sign() }

    #[wasm_bindgen(getter)]
    pub fn run_intensity(&self) -> f32 { self.core.state().agent.run_intensity }

    #[wasm_bindgen(getter)]
    pub fn wag_angle(&self) -> f32 { self.core.state().agent.wag_angle }

    #[wasm_bindgen(getter)]
    pub fn gait_phase(&self) -> f32 { self.core.state().agent.gait_phase }

    #[wasm_bindgen(getter)]
    pub fn cape_phase(&self) -> f32 { self.core.state().agent.cape_phase }

    #[wasm_bindgen(getter)]
    pub fn ball_x(&self) -> f32 { self.core.state().ball.pos.x }

    #[wasm_bindgen(getter)]
    pub fn ball_y(&self) -> f32 { self.core.state().ball.pos.y }

    #[wasm_bindgen(getter)]
    pub fn ball_visible(&self) -> bool { self.core.state().ball.visible }

    #[wasm_bindgen(getter)]
    pub fn wetness(&self) -> f32 { self.core.state().wetness.value() }

    #[wasm_bindgen(getter)]
    pub fn too_wet(&self) -> bool { self.core.is_gated() }
}
