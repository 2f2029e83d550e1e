//! Per-frame systems. Each one owns a single concern and is driven by the
//! step in `simulation`.

pub mod agent;
pub mod animation;
pub mod behavior;
pub mod locomotion;
pub mod projectile;
pub mod wetness;

pub use agent::{Agent, Facing};
pub use animation::Pose;
pub use projectile::{Ball, Flight};
pub use wetness::Wetness;
