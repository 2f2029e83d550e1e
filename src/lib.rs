//! Fetchdog Engine - rainy-day fetch simulation in WASM
//!
//! A dog chases a thrown ball, brings it back to the pointer, and gets too
//! soaked to move unless someone holds the blow-dryer.
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - Vectors, modes, viewport, config
//! - systems/     - Projectile, locomotion, wetness, behavior, animation
//! - simulation/  - State record, pure step, host facade

// Macros must be first so every module below can log
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("🐕 Fetchdog engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Mode, SimConfig, Vec2, Viewport};
pub use simulation::{
    step, FrameClock, FrameInputs, FrameSnapshot, PerfStats, SimCore, SimState, Simulation,
    StepReport,
};
pub use systems::{Agent, Ball, Facing, Pose, Wetness};
