//! Room Camera Module
//!
//! A first-person camera confined to a room. The camera is stored as a
//! look-at triple (eye, center, up) rather than yaw/pitch angles: every
//! rotation is applied directly to the look and up vectors with Rodrigues'
//! formula, so there is no pitch limit and no gimbal lock.
//!
//! Key features:
//! - Keyboard-speed movement along the look direction and strafing
//! - Free-look yaw (about `up`) and pitch (about the lateral axis)
//! - Per-frame gravity and jump, bounded by the room floor and ceiling
//! - Eye position saturated into [`RoomBounds`] after every move
//!
//! ## Usage
//! ```rust,ignore
//! let mut camera = RoomCamera::default();
//!
//! // Input handlers
//! camera.forward(0.1);
//! camera.rotate_left(std::f64::consts::PI / 16.0);
//! camera.jump();
//!
//! // Once per frame, before reading the view
//! camera.update_gravity_and_jump();
//! let view = camera.view_matrix();
//! ```

use glam::{DMat4, DVec3};

use super::rotation::rotate_point;
use crate::physics::{JumpPhysics, JumpState};
use crate::world::RoomBounds;

/// Default eye position: standing on the floor, 2m from the room center.
pub const DEFAULT_EYE: DVec3 = DVec3::new(0.0, 0.2, 2.0);
/// Default look-at point: the room center at eye height.
pub const DEFAULT_CENTER: DVec3 = DVec3::new(0.0, 0.2, 0.0);
/// Default up direction.
pub const DEFAULT_UP: DVec3 = DVec3::Y;

/// Fallback look direction when constructed with `center == eye`.
const FALLBACK_LOOK: DVec3 = DVec3::NEG_Z;

/// First-person camera with room clamping and jump physics.
#[derive(Clone, Debug)]
pub struct RoomCamera {
    eye: DVec3,
    center: DVec3,
    up: DVec3,
    jump: JumpState,
    bounds: RoomBounds,
    physics: JumpPhysics,
}

impl Default for RoomCamera {
    fn default() -> Self {
        Self::new(DEFAULT_EYE, DEFAULT_CENTER, DEFAULT_UP)
    }
}

impl RoomCamera {
    /// Create a camera in the default room with default jump physics.
    pub fn new(eye: DVec3, center: DVec3, up: DVec3) -> Self {
        Self::with_room(eye, center, up, RoomBounds::default(), JumpPhysics::default())
    }

    /// Create a camera with custom room bounds and physics.
    ///
    /// The eye is clamped into `bounds` and `center` is pulled to one unit
    /// along the requested look direction. `bounds` must satisfy
    /// [`RoomBounds::is_valid`]; clamping panics on reversed bounds.
    pub fn with_room(
        eye: DVec3,
        center: DVec3,
        up: DVec3,
        bounds: RoomBounds,
        physics: JumpPhysics,
    ) -> Self {
        debug_assert!(bounds.is_valid(), "reversed room bounds: {bounds:?}");
        let look = (center - eye).try_normalize().unwrap_or(FALLBACK_LOOK);
        let eye = bounds.clamp(eye);
        Self {
            eye,
            center: eye + look,
            up,
            jump: JumpState::new(),
            bounds,
            physics,
        }
    }

    /// Viewer position.
    #[inline]
    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    /// Look-at point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Up direction.
    #[inline]
    pub fn up(&self) -> DVec3 {
        self.up
    }

    /// Normalized direction from eye to center.
    #[inline]
    pub fn look_direction(&self) -> DVec3 {
        (self.center - self.eye).normalize()
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }

    #[inline]
    pub fn vertical_velocity(&self) -> f64 {
        self.jump.vertical_velocity()
    }

    /// True while jumping or hanging above the floor.
    pub fn is_airborne(&self) -> bool {
        self.jump.is_jumping() || self.eye.y > self.bounds.floor() + self.physics.ground_epsilon
    }

    #[inline]
    pub fn bounds(&self) -> &RoomBounds {
        &self.bounds
    }

    #[inline]
    pub fn physics(&self) -> &JumpPhysics {
        &self.physics
    }

    /// Right-handed view matrix for the renderer.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.center, self.up)
    }

    // ===== Movement =====

    /// Move along the look direction.
    pub fn forward(&mut self, speed: f64) {
        self.translate_along_look(speed);
    }

    /// Move against the look direction.
    pub fn backward(&mut self, speed: f64) {
        self.translate_along_look(-speed);
    }

    /// Strafe left, perpendicular to the look direction.
    pub fn move_left(&mut self, speed: f64) {
        self.strafe(-speed);
    }

    /// Strafe right, perpendicular to the look direction.
    pub fn move_right(&mut self, speed: f64) {
        self.strafe(speed);
    }

    fn translate_along_look(&mut self, distance: f64) {
        let look = self.look_direction();
        self.eye += look * distance;
        self.room_boundaries();
        self.update_center(look);
    }

    /// Moves eye and center together and clamps only the eye.
    ///
    /// Against a wall the eye stops but the center keeps sliding, so the
    /// look direction drifts toward the wall instead of snapping.
    fn strafe(&mut self, distance: f64) {
        let Some(right) = self.right() else {
            log::trace!("strafe skipped: look direction parallel to up");
            return;
        };
        let offset = right * distance;
        self.eye += offset;
        self.center += offset;
        self.room_boundaries();
    }

    fn right(&self) -> Option<DVec3> {
        self.look_direction().cross(self.up).try_normalize()
    }

    // ===== Rotation =====

    /// Yaw left by `theta` radians about the up vector.
    pub fn rotate_left(&mut self, theta: f64) {
        self.yaw(theta);
    }

    /// Yaw right by `theta` radians about the up vector.
    pub fn rotate_right(&mut self, theta: f64) {
        self.yaw(-theta);
    }

    /// Pitch up by `theta` radians. The up vector pitches with the view.
    pub fn look_up(&mut self, theta: f64) {
        self.pitch(theta);
    }

    /// Pitch down by `theta` radians. The up vector pitches with the view.
    pub fn look_down(&mut self, theta: f64) {
        self.pitch(-theta);
    }

    fn yaw(&mut self, theta: f64) {
        let Some(axis) = self.up.try_normalize() else {
            return;
        };
        let look = rotate_point(axis, theta, self.look_direction());
        self.update_center(look);
    }

    fn pitch(&mut self, theta: f64) {
        let Some(axis) = self.right() else {
            return;
        };
        let look = rotate_point(axis, theta, self.look_direction());
        self.up = rotate_point(axis, theta, self.up);
        self.update_center(look);
    }

    // ===== Jump =====

    /// Start a jump if standing on the floor and not already jumping.
    pub fn jump(&mut self) {
        if !self
            .jump
            .try_jump(self.eye.y, self.bounds.floor(), &self.physics)
        {
            log::trace!("jump ignored at height {:.3}", self.eye.y);
        }
    }

    /// Apply one frame of gravity. Call exactly once per rendered frame.
    ///
    /// `center` rises and falls with the eye, so the look direction
    /// (including pitch) survives a jump.
    pub fn update_gravity_and_jump(&mut self) {
        if let Some(height) = self.jump.step(
            self.eye.y,
            self.bounds.floor(),
            self.bounds.ceiling(),
            &self.physics,
        ) {
            self.center.y += height - self.eye.y;
            self.eye.y = height;
        }
    }

    // ===== Helpers =====

    fn update_center(&mut self, look: DVec3) {
        self.center = self.eye + look;
    }

    /// Saturate the eye into the room bounds.
    pub fn room_boundaries(&mut self) {
        self.eye = self.bounds.clamp(self.eye);
    }
}
