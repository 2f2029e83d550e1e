use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Every tunable constant of the simulation.
///
/// Loaded from JSON with camelCase keys; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    // === Projectile ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Distance from the viewport bottom to the ground line
    pub ground_pad: f32,
    /// Ball is kept inside [margin, width - margin] horizontally
    pub ball_wall_margin: f32,
    /// Horizontal velocity factor applied on ground contact
    pub ground_friction: f32,
    /// Vertical restitution on ground contact, must be < 1
    pub ground_restitution: f32,
    /// Horizontal restitution on wall contact
    pub wall_restitution: f32,
    /// Bounce speed below which the ball is considered at rest (px/s)
    pub settle_speed: f32,

    // === Throw ===
    /// Distance covered per second of flight time when sizing a throw
    pub throw_speed_scale: f32,
    pub throw_time_min: f32,
    pub throw_time_max: f32,
    /// Upward bias subtracted from the launch vy (px/s)
    pub throw_lift: f32,

    // === Agent ===
    pub agent_speed: f32,
    pub agent_margin: f32,
    pub pickup_radius: f32,
    pub return_radius: f32,
    pub carry_offset: Vec2,
    pub deposit_offset: Vec2,

    // === Wetness ===
    pub rain_rate: f32,
    pub passive_dry_rate: f32,
    pub active_dry_rate: f32,
    /// Wetness at or above this freezes locomotion and rejects throws
    pub wet_stop: f32,
    /// Wetness above this shows drips (presentation only)
    pub wet_drip: f32,

    // === Presentation signals ===
    /// Speed below this is not running (px/s)
    pub run_deadband: f32,
    /// Speed range over which run intensity ramps 0 -> 1
    pub run_ramp: f32,
    /// Horizontal displacement below this leaves facing unchanged
    pub facing_deadband: f32,
    pub wag_hz_idle: f32,
    pub wag_hz_running: f32,
    pub wag_amp_idle: f32,
    pub wag_amp_running: f32,
    pub gait_rate_idle: f32,
    pub gait_rate_running: f32,
    pub cape_rate_idle: f32,
    pub cape_rate_running: f32,

    // === Clock ===
    /// Upper bound on a single step (seconds)
    pub max_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            ground_pad: 32.0,
            ball_wall_margin: 12.0,
            ground_friction: 0.55,
            ground_restitution: 0.35,
            wall_restitution: 0.6,
            settle_speed: 120.0,

            throw_speed_scale: 900.0,
            throw_time_min: 0.35,
            throw_time_max: 0.9,
            throw_lift: 720.0,

            agent_speed: 560.0,
            agent_margin: 20.0,
            pickup_radius: 30.0,
            return_radius: 28.0,
            carry_offset: Vec2::new(22.0, 6.0),
            deposit_offset: Vec2::new(18.0, 18.0),

            rain_rate: 9.0,
            passive_dry_rate: 2.5,
            active_dry_rate: 35.0,
            wet_stop: 85.0,
            wet_drip: 40.0,

            run_deadband: 40.0,
            run_ramp: 500.0,
            facing_deadband: 0.5,
            wag_hz_idle: 3.0,
            wag_hz_running: 7.0,
            wag_amp_idle: 16.0,
            wag_amp_running: 26.0,
            gait_rate_idle: 6.0,
            gait_rate_running: 14.0,
            cape_rate_idle: 4.0,
            cape_rate_running: 10.0,

            max_dt: 0.05,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject constants that would break simulation invariants
    /// (a ball that never settles, an agent that never arrives, ...).
    pub fn validate(&self) -> Result<(), String> {
        positive("gravity", self.gravity)?;
        positive("settleSpeed", self.settle_speed)?;
        positive("throwSpeedScale", self.throw_speed_scale)?;
        positive("throwTimeMin", self.throw_time_min)?;
        positive("agentSpeed", self.agent_speed)?;
        positive("pickupRadius", self.pickup_radius)?;
        positive("returnRadius", self.return_radius)?;
        positive("maxDt", self.max_dt)?;

        non_negative("groundPad", self.ground_pad)?;
        non_negative("ballWallMargin", self.ball_wall_margin)?;
        non_negative("agentMargin", self.agent_margin)?;
        non_negative("throwLift", self.throw_lift)?;
        non_negative("rainRate", self.rain_rate)?;
        non_negative("passiveDryRate", self.passive_dry_rate)?;
        non_negative("activeDryRate", self.active_dry_rate)?;
        non_negative("runDeadband", self.run_deadband)?;
        positive("runRamp", self.run_ramp)?;
        non_negative("facingDeadband", self.facing_deadband)?;

        for (name, v) in [
            ("wagHzIdle", self.wag_hz_idle),
            ("wagHzRunning", self.wag_hz_running),
            ("wagAmpIdle", self.wag_amp_idle),
            ("wagAmpRunning", self.wag_amp_running),
            ("gaitRateIdle", self.gait_rate_idle),
            ("gaitRateRunning", self.gait_rate_running),
            ("capeRateIdle", self.cape_rate_idle),
            ("capeRateRunning", self.cape_rate_running),
        ] {
            non_negative(name, v)?;
        }

        unit_open("groundRestitution", self.ground_restitution)?;
        unit_closed("groundFriction", self.ground_friction)?;
        unit_closed("wallRestitution", self.wall_restitution)?;

        if self.throw_time_min > self.throw_time_max {
            return Err(format!(
                "throwTimeMin ({}) must not exceed throwTimeMax ({})",
                self.throw_time_min, self.throw_time_max
            ));
        }
        if !(self.wet_stop > 0.0 && self.wet_stop <= 100.0) {
            return Err(format!("wetStop must be in (0, 100], got {}", self.wet_stop));
        }
        if !self.carry_offset.is_finite() || !self.deposit_offset.is_finite() {
            return Err("carryOffset and depositOffset must be finite".to_string());
        }
        if !self.wet_drip.is_finite() {
            return Err("wetDrip must be finite".to_string());
        }
        Ok(())
    }

    /// Upper bound on ground contacts before a ball whose first ground
    /// impact happens at `impact_speed` settles. Each contact scales the
    /// vertical speed by the restitution; one step of gravity is added as
    /// slack for the discrete integration.
    pub fn max_bounces_to_settle(&self, impact_speed: f32) -> u32 {
        let speed = impact_speed.abs() + self.gravity * self.max_dt;
        if speed * self.ground_restitution < self.settle_speed {
            return 1;
        }
        let ratio = self.settle_speed / speed;
        let n = ratio.ln() / self.ground_restitution.ln();
        n.ceil() as u32 + 2
    }
}

fn positive(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a positive number, got {}", name, v))
    }
}

fn non_negative(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a non-negative number, got {}", name, v))
    }
}

fn unit_open(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && (0.0..1.0).contains(&v) {
        Ok(())
    } else {
        Err(format!("{} must be in [0, 1), got {}", name, v))
    }
}

fn unit_closed(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(format!("{} must be in [0, 1], got {}", name, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SimConfig::from_json(r#"{"agentSpeed": 300, "wetStop": 90}"#).unwrap();
        assert_eq!(cfg.agent_speed, 300.0);
        assert_eq!(cfg.wet_stop, 90.0);
        assert_eq!(cfg.gravity, 1800.0);
        assert_eq!(cfg.carry_offset, Vec2::new(22.0, 6.0));
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let cfg = SimConfig::default();
        assert_eq!(SimConfig::from_json(&cfg.to_json()).unwrap(), cfg);
    }

    #[test]
    fn rejects_restitution_that_never_settles() {
        let err = SimConfig::from_json(r#"{"groundRestitution": 1.0}"#).unwrap_err();
        assert!(err.contains("groundRestitution"));
    }

    #[test]
    fn rejects_inverted_throw_window() {
        let err = SimConfig::from_json(r#"{"throwTimeMin": 1.0, "throwTimeMax": 0.5}"#).unwrap_err();
        assert!(err.contains("throwTimeMin"));
    }

    #[test]
    fn rejects_bad_wet_stop_and_malformed_json() {
        assert!(SimConfig::from_json(r#"{"wetStop": 120}"#).is_err());
        assert!(SimConfig::from_json(r#"{"wetStop": 0}"#).is_err());
        assert!(SimConfig::from_json("not json").is_err());
    }

    #[test]
    fn bounce_bound_grows_with_launch_speed() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.max_bounces_to_settle(100.0), 1);
        let slow = cfg.max_bounces_to_settle(600.0);
        let fast = cfg.max_bounces_to_settle(6000.0);
        assert!(slow >= 1);
        assert!(fast > slow);
    }
}
