//! Room Bounds Module
//!
//! The axis-aligned box the first-person camera is confined to.
//!
//! ## Default Room
//! The room is 4m wide (X), 8m deep (Z) with a 0.1m wall margin, and the
//! eye height may range from 0.2 (standing on the floor) to 0.4 (jump apex
//! under the ceiling margin).

use glam::DVec3;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Distance kept between the eye and the walls/ceiling.
pub const WALL_MARGIN: f64 = 0.1;

/// Minimum X coordinate of the eye.
pub const ROOM_X_MIN: f64 = -2.0 + WALL_MARGIN;
/// Maximum X coordinate of the eye.
pub const ROOM_X_MAX: f64 = 2.0 - WALL_MARGIN;
/// Eye height when standing on the floor.
pub const ROOM_Y_MIN: f64 = 0.2;
/// Highest eye height the ceiling allows.
pub const ROOM_Y_MAX: f64 = 0.5 - WALL_MARGIN;
/// Minimum Z coordinate of the eye.
pub const ROOM_Z_MIN: f64 = -4.0 + WALL_MARGIN;
/// Maximum Z coordinate of the eye.
pub const ROOM_Z_MAX: f64 = 4.0 - WALL_MARGIN;

const_assert!(ROOM_X_MIN < ROOM_X_MAX);
const_assert!(ROOM_Y_MIN < ROOM_Y_MAX);
const_assert!(ROOM_Z_MIN < ROOM_Z_MAX);

/// Axis-aligned bounds for the camera eye.
///
/// Stored as two corners; each axis is clamped independently.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
    /// Lower corner (x min, floor, z min)
    pub min: DVec3,
    /// Upper corner (x max, ceiling, z max)
    pub max: DVec3,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            min: DVec3::new(ROOM_X_MIN, ROOM_Y_MIN, ROOM_Z_MIN),
            max: DVec3::new(ROOM_X_MAX, ROOM_Y_MAX, ROOM_Z_MAX),
        }
    }
}

impl RoomBounds {
    /// Create bounds from two corners.
    ///
    /// Callers are expected to pass `min <= max` on every axis; use
    /// [`RoomBounds::is_valid`] to check bounds that come from outside.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// True when `min <= max` on all three axes and no bound is NaN.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Eye height when standing on the floor.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.min.y
    }

    /// Highest allowed eye height.
    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.max.y
    }

    /// Saturate a position into the box, axis by axis.
    pub fn clamp(&self, pos: DVec3) -> DVec3 {
        DVec3::new(
            pos.x.clamp(self.min.x, self.max.x),
            pos.y.clamp(self.min.y, self.max.y),
            pos.z.clamp(self.min.z, self.max.z),
        )
    }

    /// True if the position lies inside the box (boundary inclusive).
    pub fn contains(&self, pos: DVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}
