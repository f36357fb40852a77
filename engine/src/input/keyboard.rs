//! Keyboard Input Module
//!
//! Generic key codes for the room scene, decoupled from winit.

/// Generic key codes, independent of windowing system.
///
/// Only the keys the room scene can bind are listed; everything else maps
/// to [`KeyCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Interaction
    E,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}
