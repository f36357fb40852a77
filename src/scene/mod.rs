//! Scene Module
//!
//! The walkable room: its configuration, the animated door, the spinning
//! display models, and the state struct that ties them to the camera.

pub mod config;
pub mod door;
pub mod spin;
pub mod state;

pub use config::{ConfigError, SceneConfig};
pub use door::{Door, DoorConfig, DoorState, DOOR_ANGLE_CLOSED, DOOR_ANGLE_OPEN, DOOR_SPEED};
pub use spin::{SpinAnimation, SpinConfig};
pub use state::{FrameOutcome, SceneCommand, SceneState};
