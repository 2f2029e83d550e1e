//! Browser smoke test: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use fetchdog_engine::Simulation;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn facade_runs_a_throw_in_the_browser() {
    fetchdog_engine::init();
    let mut sim = Simulation::new(800, 600);
    assert!(sim.throw_ball(600.0, 300.0));
    sim.tick(0.0);
    sim.tick(16.0);
    assert_eq!(sim.mode(), "ball_flying");
    assert!(sim.ball_visible());
    assert!(sim.snapshot_json().contains("\"mode\":\"ball_flying\""));
}

#[wasm_bindgen_test]
fn facade_rejects_bad_config() {
    let mut sim = Simulation::new(800, 600);
    assert!(sim.load_config("{\"wetStop\": 0}".to_string()).is_err());
    assert!(sim.load_config("{\"wetStop\": 70}".to_string()).is_ok());
}
