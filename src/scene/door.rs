//! Door Animation
//!
//! A hinged door that swings between an open and a closed angle.
//!
//! # States
//!
//! - Open: 90 degrees
//! - Closed: 0 degrees
//!
//! # Animation
//!
//! Each `update()` moves the hinge angle one fixed step (1 degree by default)
//! toward the target of the current state and never overshoots. Steps are per
//! frame, not per second. Toggling mid-swing reverses from wherever the door
//! currently is.
//!
//! # Usage
//!
//! ```rust,ignore
//! use room_walk_engine::scene::Door;
//!
//! let mut door = Door::new();
//! door.toggle();
//!
//! // Each frame:
//! door.update();
//! let hinge_degrees = door.angle();
//! if door.is_animating() {
//!     // schedule another frame
//! }
//! ```

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Hinge angle of a fully open door in degrees
pub const DOOR_ANGLE_OPEN: f64 = 90.0;

/// Hinge angle of a closed door in degrees
pub const DOOR_ANGLE_CLOSED: f64 = 0.0;

/// Degrees moved per `update()` call
pub const DOOR_SPEED: f64 = 1.0;

const_assert!(DOOR_ANGLE_CLOSED < DOOR_ANGLE_OPEN);
const_assert!(DOOR_SPEED > 0.0);

/// Door angles and swing speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Target angle while open (degrees)
    pub open_angle: f64,
    /// Target angle while closed (degrees)
    pub closed_angle: f64,
    /// Degrees per update step
    pub speed: f64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            open_angle: DOOR_ANGLE_OPEN,
            closed_angle: DOOR_ANGLE_CLOSED,
            speed: DOOR_SPEED,
        }
    }
}

/// Logical door states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorState {
    /// Swinging toward / resting at the open angle
    #[default]
    Open,
    /// Swinging toward / resting at the closed angle
    Closed,
}

impl DoorState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            DoorState::Open => DoorState::Closed,
            DoorState::Closed => DoorState::Open,
        }
    }

    /// Target hinge angle for this state.
    pub fn target_angle(self, config: &DoorConfig) -> f64 {
        match self {
            DoorState::Open => config.open_angle,
            DoorState::Closed => config.closed_angle,
        }
    }
}

/// Animated door. Starts open and at rest.
#[derive(Debug, Clone)]
pub struct Door {
    state: DoorState,
    /// Current hinge angle in degrees
    angle: f64,
    /// Angle `angle` is converging toward
    target_angle: f64,
    config: DoorConfig,
}

impl Default for Door {
    fn default() -> Self {
        Self::with_config(DoorConfig::default())
    }
}

impl Door {
    /// Create an open door with default angles and speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open door at rest with custom angles/speed.
    pub fn with_config(config: DoorConfig) -> Self {
        let state = DoorState::Open;
        let angle = state.target_angle(&config);
        Self {
            state,
            angle,
            target_angle: angle,
            config,
        }
    }

    /// Flip between open and closed. Only the target changes; the hinge
    /// angle moves on subsequent `update()` calls.
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
        self.target_angle = self.state.target_angle(&self.config);
        log::debug!(
            "door toggled to {:?} (angle {:.1} -> {:.1})",
            self.state,
            self.angle,
            self.target_angle
        );
    }

    /// Step the hinge angle toward the target by one speed increment.
    pub fn update(&mut self) {
        if self.angle < self.target_angle {
            self.angle = (self.angle + self.config.speed).min(self.target_angle);
        } else if self.angle > self.target_angle {
            self.angle = (self.angle - self.config.speed).max(self.target_angle);
        }
    }

    /// True while the hinge angle has not reached the target.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.angle != self.target_angle
    }

    /// Current hinge angle in degrees.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    #[inline]
    pub fn state(&self) -> DoorState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &DoorConfig {
        &self.config
    }
}
