//! Physics module for the room engine
//!
//! Frame-stepped vertical physics for the first-person camera. There is no
//! time scaling: one call is one frame, and constants are expressed per frame.
//!
//! # Submodules
//!
//! - [`jump`] - Jump start, gravity integration, floor/ceiling contact

pub mod jump;

pub use jump::{GRAVITY, GROUND_EPSILON, JUMP_VELOCITY, JumpPhysics, JumpState};
