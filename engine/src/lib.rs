//! Room Walk Engine Library
//!
//! The simulation core of a small walkable interior: a first-person camera
//! confined to a room (movement, free-look rotation, gravity and jumping)
//! and an animated door. Drawing is left to the caller; everything here is
//! plain state stepped once per frame.
//!
//! # Modules
//!
//! - [`camera`] - Room camera and Rodrigues rotation
//! - [`physics`] - Per-frame jump and gravity
//! - [`world`] - Room bounds and clamping
//! - [`input`] - Platform-agnostic key codes and bindings
//! - [`scene`] - Door, spin animation, configuration, and scene state
//!
//! # Example
//!
//! ```ignore
//! use room_walk_engine::{KeyCode, SceneCommand, SceneState};
//!
//! let mut scene = SceneState::default();
//!
//! // Input handler
//! if scene.handle_key(KeyCode::W) == Some(SceneCommand::Exit) {
//!     return;
//! }
//!
//! // Each frame
//! let outcome = scene.advance_frame();
//! let view = scene.camera.view_matrix();
//! let hinge = scene.door.angle();
//! if outcome.needs_redraw {
//!     // request another frame
//! }
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod world;

// Scene-specific modules (located in src/scene/ directory)
#[path = "../../src/scene/mod.rs"]
pub mod scene;

// Re-export commonly used types at crate level for convenience
pub use camera::{RoomCamera, rotate_point};
pub use input::{InputAction, KeyBindings, KeyCode};
pub use physics::{JumpPhysics, JumpState};
pub use scene::{ConfigError, Door, DoorState, FrameOutcome, SceneCommand, SceneConfig, SceneState};
pub use world::RoomBounds;
