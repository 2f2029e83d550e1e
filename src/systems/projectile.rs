//! Projectile engine - ball kinematics only
//!
//! Semi-implicit Euler under gravity, with damped bounces on the ground line
//! and on the two side walls. Knows nothing about behavior modes: the caller
//! decides whether the result is committed.

use serde::Serialize;

use crate::domain::viewport::clamp_axis;
use crate::domain::{SimConfig, Vec2, Viewport};

/// The thrown ball
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity (px/s)
    pub vel: Vec2,
    pub visible: bool,
}

/// Result of one integration step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flight {
    Airborne,
    /// Ball hit the ground too slowly to bounce again; velocity is zeroed
    Settled,
}

impl Ball {
    pub fn hidden_at(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO, visible: false }
    }

    /// Start a flight from `from` with the given launch velocity
    pub fn launch(&mut self, from: Vec2, vel: Vec2) {
        self.pos = from;
        self.vel = vel;
        self.visible = true;
    }

    /// Pin the ball to a carrier at a fixed offset
    pub fn carry(&mut self, carrier: Vec2, offset: Vec2) {
        self.pos = carrier + offset;
        self.vel = Vec2::ZERO;
    }

    /// Pull the ball back inside the wall margins and above the ground line.
    /// A resting ball is put on the ground line of `viewport`.
    pub fn confine(&mut self, viewport: Viewport, resting: bool, cfg: &SimConfig) {
        let ground_y = viewport.ground_y(cfg);
        self.pos.x = clamp_axis(
            self.pos.x,
            cfg.ball_wall_margin,
            viewport.width - cfg.ball_wall_margin,
        );
        self.pos.y = if resting { ground_y } else { self.pos.y.min(ground_y) };
    }
}

/// Advance the ball by `dt` seconds.
///
/// `dt <= 0` (or NaN) is a no-op and reports `Airborne`.
pub fn integrate(ball: &mut Ball, dt: f32, viewport: Viewport, cfg: &SimConfig) -> Flight {
    if dt.is_nan() || dt <= 0.0 {
        return Flight::Airborne;
    }

    let ground_y = viewport.ground_y(cfg);
    let mut outcome = Flight::Airborne;

    ball.vel.y += cfg.gravity * dt;
    ball.pos += ball.vel * dt;

    // Ground: damp both axes, settle once the rebound is slow enough
    if ball.pos.y >= ground_y {
        ball.pos.y = ground_y;
        ball.vel.x *= cfg.ground_friction;
        ball.vel.y = -ball.vel.y * cfg.ground_restitution;
        if ball.vel.y.abs() < cfg.settle_speed {
            ball.vel = Vec2::ZERO;
            outcome = Flight::Settled;
        }
    }

    // Walls
    let lo = cfg.ball_wall_margin;
    let hi = viewport.width - cfg.ball_wall_margin;
    if ball.pos.x < lo || ball.pos.x > hi {
        ball.pos.x = clamp_axis(ball.pos.x, lo, hi);
        ball.vel.x = -ball.vel.x * cfg.wall_restitution;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SimConfig, Viewport) {
        (SimConfig::default(), Viewport::new(1000.0, 800.0))
    }

    #[test]
    fn free_flight_is_semi_implicit_euler() {
        let (cfg, vp) = setup();
        let mut ball = Ball::default();
        ball.launch(Vec2::new(500.0, 300.0), Vec2::new(100.0, -200.0));

        let out = integrate(&mut ball, 0.01, vp, &cfg);

        assert_eq!(out, Flight::Airborne);
        // v.y = -200 + 1800 * 0.01 = -182, then pos uses the new velocity
        assert!((ball.vel.y + 182.0).abs() < 1e-3);
        assert!((ball.pos.y - (300.0 - 1.82)).abs() < 1e-3);
        assert!((ball.pos.x - 501.0).abs() < 1e-3);
    }

    #[test]
    fn non_positive_dt_is_noop() {
        let (cfg, vp) = setup();
        let mut ball = Ball::default();
        ball.launch(Vec2::new(500.0, 300.0), Vec2::new(100.0, -200.0));
        let before = ball;

        assert_eq!(integrate(&mut ball, 0.0, vp, &cfg), Flight::Airborne);
        assert_eq!(integrate(&mut ball, -0.5, vp, &cfg), Flight::Airborne);
        assert_eq!(integrate(&mut ball, f32::NAN, vp, &cfg), Flight::Airborne);
        assert_eq!(ball, before);
    }

    #[test]
    fn fast_ground_hit_bounces_with_damping() {
        let (cfg, vp) = setup();
        let ground = vp.ground_y(&cfg);
        let mut ball = Ball::default();
        ball.launch(Vec2::new(500.0, ground - 1.0), Vec2::new(200.0, 1000.0));

        let out = integrate(&mut ball, 0.01, vp, &cfg);

        assert_eq!(out, Flight::Airborne);
        assert_eq!(ball.pos.y, ground);
        assert!((ball.vel.x - 110.0).abs() < 1e-3);
        assert!((ball.vel.y + 1018.0 * 0.35).abs() < 1e-2);
    }

    #[test]
    fn slow_ground_hit_settles() {
        let (cfg, vp) = setup();
        let ground = vp.ground_y(&cfg);
        let mut ball = Ball::default();
        ball.launch(Vec2::new(500.0, ground - 0.5), Vec2::new(50.0, 200.0));

        let out = integrate(&mut ball, 0.01, vp, &cfg);

        assert_eq!(out, Flight::Settled);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos.y, ground);
    }

    #[test]
    fn wall_hit_reflects_horizontal_velocity() {
        let (cfg, vp) = setup();
        let mut ball = Ball::default();
        ball.launch(Vec2::new(985.0, 300.0), Vec2::new(1000.0, 0.0));

        integrate(&mut ball, 0.01, vp, &cfg);

        assert_eq!(ball.pos.x, 988.0);
        assert!((ball.vel.x + 600.0).abs() < 1e-3);

        ball.launch(Vec2::new(15.0, 300.0), Vec2::new(-1000.0, 0.0));
        integrate(&mut ball, 0.01, vp, &cfg);
        assert_eq!(ball.pos.x, 12.0);
        assert!((ball.vel.x - 600.0).abs() < 1e-3);
    }

    #[test]
    fn rebound_speed_strictly_decreases_until_settled() {
        let (cfg, vp) = setup();
        let ground = vp.ground_y(&cfg);
        let mut ball = Ball::default();
        ball.launch(Vec2::new(500.0, 100.0), Vec2::new(0.0, -1500.0));

        let mut rebounds = Vec::new();
        let mut settled = false;
        for _ in 0..10_000 {
            let out = integrate(&mut ball, 0.016, vp, &cfg);
            if out == Flight::Settled {
                settled = true;
                break;
            }
            if ball.pos.y == ground {
                rebounds.push(ball.vel.y.abs());
            }
        }

        assert!(settled);
        assert!(!rebounds.is_empty());
        for pair in rebounds.windows(2) {
            assert!(pair[1] < pair[0], "rebound grew: {:?}", rebounds);
        }
    }

    #[test]
    fn carry_pins_ball_to_offset() {
        let mut ball = Ball::default();
        ball.launch(Vec2::ZERO, Vec2::new(300.0, 300.0));
        ball.carry(Vec2::new(100.0, 200.0), Vec2::new(22.0, 6.0));
        assert_eq!(ball.pos, Vec2::new(122.0, 206.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(ball.visible);
    }

    #[test]
    fn confine_pulls_ball_inside_a_smaller_viewport() {
        let cfg = SimConfig::default();
        let vp = Viewport::new(300.0, 200.0);

        let mut resting = Ball::hidden_at(Vec2::new(811.5, 768.0));
        resting.confine(vp, true, &cfg);
        assert_eq!(resting.pos, Vec2::new(288.0, 168.0));

        let mut aloft = Ball::hidden_at(Vec2::new(-40.0, 50.0));
        aloft.confine(vp, false, &cfg);
        assert_eq!(aloft.pos, Vec2::new(12.0, 50.0));
    }
}
