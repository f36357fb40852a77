//! Scene Configuration
//!
//! Every tunable of the room scene in one struct. `SceneConfig::default()`
//! reproduces the built-in room; a JSON file may override any subset of
//! fields (missing fields keep their defaults).
//!
//! ```json
//! {
//!   "move_speed": 0.2,
//!   "door": { "speed": 3.0 },
//!   "room": { "min": [-1.9, 0.2, -3.9], "max": [1.9, 0.6, 3.9] }
//! }
//! ```

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_CENTER, DEFAULT_EYE, DEFAULT_UP};
use crate::physics::JumpPhysics;
use crate::scene::door::DoorConfig;
use crate::scene::spin::SpinConfig;
use crate::world::RoomBounds;

/// Distance moved per movement key press
pub const MOVE_SPEED: f64 = 0.1;

/// Radians turned per rotation key press: 3.1415 / 16, just under PI / 16
pub const ROTATE_SPEED: f64 = 0.196_343_75;

/// Starting camera pose.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraStart {
    pub eye: DVec3,
    pub center: DVec3,
    pub up: DVec3,
}

impl CameraStart {
    /// True when `up` and the lateral axis `(center - eye) x up` both
    /// normalize, so yaw, pitch, strafe and the view matrix stay finite.
    pub fn is_valid(&self) -> bool {
        let look = self.center - self.eye;
        self.up.try_normalize().is_some() && look.cross(self.up).try_normalize().is_some()
    }
}

impl Default for CameraStart {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE,
            center: DEFAULT_CENTER,
            up: DEFAULT_UP,
        }
    }
}

/// Central configuration for the room scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Box the camera eye is clamped into
    pub room: RoomBounds,
    /// Gravity and jump constants
    pub jump: JumpPhysics,
    /// Door angles and swing speed
    pub door: DoorConfig,
    /// Decorative model spin timing
    pub spin: SpinConfig,
    /// Initial camera pose
    pub camera: CameraStart,
    /// Distance per movement key press
    pub move_speed: f64,
    /// Radians per rotation key press
    pub rotate_speed: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            room: RoomBounds::default(),
            jump: JumpPhysics::default(),
            door: DoorConfig::default(),
            spin: SpinConfig::default(),
            camera: CameraStart::default(),
            move_speed: MOVE_SPEED,
            rotate_speed: ROTATE_SPEED,
        }
    }
}

/// Errors that can occur while loading a scene configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed
    IoError(std::io::Error),
    /// The file is not valid JSON for `SceneConfig`
    JsonError(serde_json::Error),
    /// Room bounds have `min > max` on some axis (or are NaN)
    InvalidBounds(RoomBounds),
    /// A speed/step that must be positive is not
    InvalidSpeed { field: &'static str, value: f64 },
    /// Gravity must pull down, or a jump never lands
    InvalidGravity(f64),
    /// Start pose has a zero `up` or one parallel to the look direction
    DegenerateCamera(CameraStart),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidBounds(b) => {
                write!(f, "invalid room bounds: min {} max {}", b.min, b.max)
            }
            ConfigError::InvalidSpeed { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::InvalidGravity(g) => {
                write!(f, "jump.gravity must be negative, got {g}")
            }
            ConfigError::DegenerateCamera(c) => write!(
                f,
                "degenerate camera start: eye {} center {} up {}",
                c.eye, c.center, c.up
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

impl SceneConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that would break clamping or never converge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.room.is_valid() {
            return Err(ConfigError::InvalidBounds(self.room));
        }

        // Written so NaN fails too.
        if !(self.jump.gravity < 0.0) {
            return Err(ConfigError::InvalidGravity(self.jump.gravity));
        }

        if !self.camera.is_valid() {
            return Err(ConfigError::DegenerateCamera(self.camera));
        }

        let positive = [
            ("door.speed", self.door.speed),
            ("jump.ground_epsilon", self.jump.ground_epsilon),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidSpeed { field, value });
            }
        }
        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
