//! Input Module
//!
//! Platform-agnostic key handling for the room scene. The viewer translates
//! window-system key codes into [`KeyCode`] and looks up the bound
//! [`InputAction`].
//!
//! # Example
//!
//! ```rust,ignore
//! use room_walk_engine::input::{InputAction, KeyBindings, KeyCode};
//!
//! let bindings = KeyBindings::new();
//! if bindings.get_action(KeyCode::E) == Some(InputAction::ToggleDoor) {
//!     // open or close the door
//! }
//! ```

pub mod bindings;
pub mod keyboard;

pub use bindings::{DEFAULT_BINDINGS, InputAction, KeyBindings};
pub use keyboard::KeyCode;
