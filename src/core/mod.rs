//! Core utilities shared by every layer of the engine.
//!
//! Must be declared first in `lib.rs` so the logging macros are visible to
//! the modules that follow.

#[macro_use]
pub mod utils;
