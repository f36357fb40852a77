//! Camera Module
//!
//! Provides the first-person room camera and its rotation math.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod room_camera;
pub mod rotation;

pub use room_camera::{DEFAULT_CENTER, DEFAULT_EYE, DEFAULT_UP, RoomCamera};
pub use rotation::rotate_point;
