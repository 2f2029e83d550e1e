//! Locomotion - the "move toward" primitive

use crate::domain::Vec2;

/// Step from `from` toward `goal` by at most `max_step` pixels.
///
/// Never overshoots: the step is `min(max_step, remaining)`, so repeated
/// calls come to rest exactly on the goal. A zero-length direction or a
/// non-positive step leaves the position unchanged.
pub fn move_toward(from: Vec2, goal: Vec2, max_step: f32) -> Vec2 {
    if max_step.is_nan() || max_step <= 0.0 {
        return from;
    }
    let delta = goal - from;
    let remaining = delta.length();
    let Some(dir) = delta.try_normalize() else {
        return from;
    };
    if remaining <= max_step {
        return goal;
    }
    from + dir * max_step
}
