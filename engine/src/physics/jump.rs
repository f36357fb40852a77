//! Jump and Gravity
//!
//! Per-frame vertical physics for the room camera.
//!
//! # Physics Model
//!
//! The simulation is stepped once per rendered frame, not per second:
//!
//! - Gravity: -0.01 units/frame^2
//! - Jump velocity: 0.1 units/frame
//! - Ground epsilon: 1e-6 units
//!
//! Velocity is integrated with explicit Euler (velocity first, then height).
//! Landing on the floor ends the jump; hitting the ceiling only kills the
//! upward velocity and leaves the jump in progress.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Gravity added to the vertical velocity each frame (negative = down)
pub const GRAVITY: f64 = -0.01;

/// Vertical velocity applied when a jump starts
pub const JUMP_VELOCITY: f64 = 0.1;

/// Heights within this distance of the floor count as standing on it
pub const GROUND_EPSILON: f64 = 1e-6;

const_assert!(GRAVITY < 0.0);
const_assert!(JUMP_VELOCITY > 0.0);

/// Tunable jump/gravity constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpPhysics {
    /// Added to vertical velocity every airborne frame (negative = down)
    pub gravity: f64,
    /// Initial upward velocity of a jump
    pub jump_velocity: f64,
    /// Tolerance for "standing on the floor"
    pub ground_epsilon: f64,
}

impl Default for JumpPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            ground_epsilon: GROUND_EPSILON,
        }
    }
}

/// Vertical motion state: whether a jump is in progress and how fast the
/// eye is currently moving up or down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpState {
    is_jumping: bool,
    vertical_velocity: f64,
}

impl JumpState {
    /// Create a resting state (not jumping, zero velocity).
    pub fn new() -> Self {
        Self::default()
    }

    /// True from jump start until the eye lands back on the floor.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// Current vertical velocity (units per frame, positive = up).
    #[inline]
    pub fn vertical_velocity(&self) -> f64 {
        self.vertical_velocity
    }

    /// Start a jump if resting on the floor.
    ///
    /// Returns `true` if the jump started. Does nothing while a jump is in
    /// progress or while the eye is above the floor.
    pub fn try_jump(&mut self, height: f64, floor: f64, physics: &JumpPhysics) -> bool {
        if self.is_jumping || (height - floor).abs() >= physics.ground_epsilon {
            return false;
        }

        self.is_jumping = true;
        self.vertical_velocity = physics.jump_velocity;
        log::debug!("jump started at height {height:.3}");
        true
    }

    /// Advance one frame of gravity.
    ///
    /// Returns the new eye height, or `None` when the eye is resting on the
    /// floor and nothing moved.
    pub fn step(
        &mut self,
        height: f64,
        floor: f64,
        ceiling: f64,
        physics: &JumpPhysics,
    ) -> Option<f64> {
        if !self.is_jumping && height <= floor + physics.ground_epsilon {
            return None;
        }

        self.vertical_velocity += physics.gravity;
        let mut height = height + self.vertical_velocity;

        if height <= floor {
            height = floor;
            self.vertical_velocity = 0.0;
            if self.is_jumping {
                log::debug!("landed on floor");
            }
            self.is_jumping = false;
        }

        // Ceiling contact stops the rise but the jump stays active.
        if height > ceiling {
            height = ceiling;
            self.vertical_velocity = 0.0;
            log::trace!("hit ceiling at {ceiling:.3}");
        }

        Some(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f64 = 0.2;
    const CEILING: f64 = 0.4;

    #[test]
    fn test_default_physics() {
        let physics = JumpPhysics::default();
        assert_eq!(physics.gravity, -0.01);
        assert_eq!(physics.jump_velocity, 0.1);
        assert_eq!(physics.ground_epsilon, 1e-6);
    }

    #[test]
    fn test_jump_from_floor() {
        let mut state = JumpState::new();
        assert!(state.try_jump(FLOOR, FLOOR, &JumpPhysics::default()));
        assert!(state.is_jumping());
        assert_eq!(state.vertical_velocity(), JUMP_VELOCITY);
    }

    #[test]
    fn test_jump_in_air_is_ignored() {
        let mut state = JumpState::new();
        assert!(!state.try_jump(FLOOR + 0.05, FLOOR, &JumpPhysics::default()));
        assert!(!state.is_jumping());
        assert_eq!(state.vertical_velocity(), 0.0);
    }

    #[test]
    fn test_double_jump_is_ignored() {
        let physics = JumpPhysics::default();
        let mut state = JumpState::new();
        assert!(state.try_jump(FLOOR, FLOOR, &physics));
        let _ = state.step(FLOOR, FLOOR, CEILING, &physics);
        let velocity = state.vertical_velocity();

        assert!(!state.try_jump(FLOOR, FLOOR, &physics));
        assert_eq!(state.vertical_velocity(), velocity);
    }

    #[test]
    fn test_resting_step_is_noop() {
        let mut state = JumpState::new();
        assert_eq!(state.step(FLOOR, FLOOR, CEILING, &JumpPhysics::default()), None);
        assert_eq!(state.vertical_velocity(), 0.0);
    }

    #[test]
    fn test_first_step_applies_gravity_then_moves() {
        let physics = JumpPhysics::default();
        let mut state = JumpState::new();
        state.try_jump(FLOOR, FLOOR, &physics);

        let height = state.step(FLOOR, FLOOR, 10.0, &physics).unwrap();
        assert!((state.vertical_velocity() - 0.09).abs() < 1e-12);
        assert!((height - (FLOOR + 0.09)).abs() < 1e-12);
    }

    #[test]
    fn test_ceiling_keeps_jump_active() {
        let physics = JumpPhysics::default();
        let mut state = JumpState::new();
        state.try_jump(FLOOR, FLOOR, &physics);

        // 0.2 + 0.09 = 0.29, then 0.29 + 0.08 = 0.37, then 0.37 + 0.07 > 0.4
        let mut height = FLOOR;
        for _ in 0..3 {
            height = state.step(height, FLOOR, CEILING, &physics).unwrap();
        }
        assert_eq!(height, CEILING);
        assert_eq!(state.vertical_velocity(), 0.0);
        assert!(state.is_jumping());
    }

    #[test]
    fn test_landing_clears_jump() {
        let physics = JumpPhysics::default();
        let mut state = JumpState::new();
        state.try_jump(FLOOR, FLOOR, &physics);

        let mut height = FLOOR;
        let mut steps = 0;
        while state.is_jumping() {
            height = state.step(height, FLOOR, CEILING, &physics).unwrap();
            steps += 1;
            assert!(steps < 100, "jump never landed");
        }
        assert_eq!(height, FLOOR);
        assert_eq!(state.vertical_velocity(), 0.0);
    }

    #[test]
    fn test_falls_when_above_floor_without_jumping() {
        let physics = JumpPhysics::default();
        let mut state = JumpState::new();
        let height = state.step(0.3, FLOOR, CEILING, &physics).unwrap();
        assert!((height - 0.29).abs() < 1e-12);
        assert!(!state.is_jumping());
    }
}
