//! Config Module
//!
//! Centralized configuration for the room layout and scene tunables.

pub mod scene_config;

pub use scene_config::{CameraStart, ConfigError, MOVE_SPEED, ROTATE_SPEED, SceneConfig};
