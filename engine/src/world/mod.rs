//! World Module
//!
//! Contains world-space configuration for the walkable room.
//!
//! ## Default World
//! A single closed room; the camera eye is clamped into [`RoomBounds`].

pub mod room;

pub use room::{
    RoomBounds, ROOM_X_MAX, ROOM_X_MIN, ROOM_Y_MAX, ROOM_Y_MIN, ROOM_Z_MAX, ROOM_Z_MIN,
    WALL_MARGIN,
};
