//! Domain types: vectors, behavior modes, viewport and tunable constants

pub mod config;
pub mod mode;
pub mod vec2;
pub mod viewport;

pub use config::SimConfig;
pub use mode::Mode;
pub use vec2::Vec2;
pub use viewport::Viewport;
