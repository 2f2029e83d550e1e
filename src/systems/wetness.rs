//! Wetness - bounded resource fed by rain, drained by drying
//!
//! Not a behavior mode: while the gate is active it only zeroes locomotion
//! and rejects throws.

use serde::Serialize;

use crate::domain::SimConfig;

pub const WETNESS_MIN: f32 = 0.0;
pub const WETNESS_MAX: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Wetness {
    value: f32,
}

impl Wetness {
    pub fn new(value: f32) -> Self {
        let mut w = Self::default();
        w.set(value);
        w
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set directly, clamped to [0, 100]. NaN resets to dry.
    pub fn set(&mut self, value: f32) {
        self.value = if value.is_nan() {
            WETNESS_MIN
        } else {
            value.clamp(WETNESS_MIN, WETNESS_MAX)
        };
    }

    /// Rain in, passive drying out, plus active drying while held
    pub fn advance(&mut self, dt: f32, drying: bool, cfg: &SimConfig) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        let mut rate = cfg.rain_rate - cfg.passive_dry_rate;
        if drying {
            rate -= cfg.active_dry_rate;
        }
        self.set(self.value + rate * dt);
    }

    /// Too wet to move (and to accept a throw)
    pub fn is_gated(&self, cfg: &SimConfig) -> bool {
        self.value >= cfg.wet_stop
    }

    pub fn is_dripping(&self, cfg: &SimConfig) -> bool {
        self.value > cfg.wet_drip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_of_rain_crosses_the_gate() {
        let cfg = SimConfig::default();
        let mut w = Wetness::new(80.0);
        assert!(!w.is_gated(&cfg));

        w.advance(1.0, false, &cfg);

        assert!((w.value() - 86.5).abs() < 1e-4);
        assert!(w.is_gated(&cfg));
    }

    #[test]
    fn non_positive_or_nan_dt_leaves_value_alone() {
        let cfg = SimConfig::default();
        let mut w = Wetness::new(50.0);
        for dt in [0.0, -1.0, f32::NAN] {
            w.advance(dt, false, &cfg);
            w.advance(dt, true, &cfg);
        }
        assert_eq!(w.value(), 50.0);
    }

    #[test]
    fn gate_threshold_is_inclusive() {
        let cfg = SimConfig::default();
        assert!(Wetness::new(85.0).is_gated(&cfg));
        assert!(!Wetness::new(84.99).is_gated(&cfg));
    }

    #[test]
    fn drying_drains_and_floors_at_zero() {
        let cfg = SimConfig::default();
        let mut w = Wetness::new(10.0);
        w.advance(0.05, true, &cfg);
        // 10 + (9 - 2.5 - 35) * 0.05
        assert!((w.value() - 8.575).abs() < 1e-4);
        for _ in 0..100 {
            w.advance(0.05, true, &cfg);
        }
        assert_eq!(w.value(), 0.0);
    }

    #[test]
    fn stays_bounded_under_arbitrary_hold_patterns() {
        let cfg = SimConfig::default();
        let mut w = Wetness::default();
        let mut seed = 0x2545_f491_u32;
        for i in 0..50_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let dt = (seed % 51) as f32 / 1000.0;
            let drying = (seed >> 8) % 3 == 0 || (i / 4000) % 2 == 1;
            w.advance(dt, drying, &cfg);
            assert!((WETNESS_MIN..=WETNESS_MAX).contains(&w.value()));
        }
    }

    #[test]
    fn rain_saturates_at_max() {
        let cfg = SimConfig::default();
        let mut w = Wetness::new(99.0);
        w.advance(5.0, false, &cfg);
        assert_eq!(w.value(), WETNESS_MAX);
    }

    #[test]
    fn dripping_starts_above_forty() {
        let cfg = SimConfig::default();
        assert!(!Wetness::new(40.0).is_dripping(&cfg));
        assert!(Wetness::new(40.5).is_dripping(&cfg));
    }
}
