use wasm_bindgen::prelude::*;

/// Per-step counters, only collected while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) steps: u32,
    pub(super) skipped_steps: u32,
    pub(super) transitions: u32,
    pub(super) throws_accepted: u32,
    pub(super) throws_rejected: u32,
    pub(super) gated_steps: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Duration of the last step
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn skipped_steps(&self) -> u32 { self.skipped_steps }
    #[wasm_bindgen(getter)]
    pub fn transitions(&self) -> u32 { self.transitions }
    #[wasm_bindgen(getter)]
    pub fn throws_accepted(&self) -> u32 { self.throws_accepted }
    #[wasm_bindgen(getter)]
    pub fn throws_rejected(&self) -> u32 { self.throws_rejected }
    #[wasm_bindgen(getter)]
    pub fn gated_steps(&self) -> u32 { self.gated_steps }
}
