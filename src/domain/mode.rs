use serde::{Deserialize, Serialize};

/// Behavior mode of the dog. Exactly one is active at a time.
///
/// The tag only selects behavior; positions and velocities live in the
/// shared agent/ball records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    BallFlying,
    Chasing,
    Returning,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::BallFlying => "ball_flying",
            Mode::Chasing => "chasing",
            Mode::Returning => "returning",
        }
    }

    /// Stable numeric code for the JS side
    pub fn code(self) -> u8 {
        match self {
            Mode::Idle => 0,
            Mode::BallFlying => 1,
            Mode::Chasing => 2,
            Mode::Returning => 3,
        }
    }

    /// Whether the projectile engine owns the ball in this mode
    pub fn ball_in_flight(self) -> bool {
        matches!(self, Mode::BallFlying)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_wire_format() {
        for mode in [Mode::Idle, Mode::BallFlying, Mode::Chasing, Mode::Returning] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn only_ball_flying_is_in_flight() {
        assert!(Mode::BallFlying.ball_in_flight());
        assert!(!Mode::Idle.ball_in_flight());
        assert!(!Mode::Chasing.ball_in_flight());
        assert!(!Mode::Returning.ball_in_flight());
    }
}
