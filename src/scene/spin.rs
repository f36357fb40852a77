//! Decorative spin for the display models.
//!
//! The imported models turn about their vertical axis on a fixed timer,
//! independent of the frame rate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Degrees added per tick
pub const SPIN_STEP_DEGREES: f32 = 4.0;

/// Milliseconds between ticks
pub const SPIN_INTERVAL_MS: u64 = 30;

/// Spin timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub step_degrees: f32,
    pub interval_ms: u64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            step_degrees: SPIN_STEP_DEGREES,
            interval_ms: SPIN_INTERVAL_MS,
        }
    }
}

/// Current spin angle of the display models.
#[derive(Debug, Clone, Default)]
pub struct SpinAnimation {
    angle: f32,
    config: SpinConfig,
}

impl SpinAnimation {
    pub fn new(config: SpinConfig) -> Self {
        Self { angle: 0.0, config }
    }

    /// Advance one tick, wrapping once the angle passes 360.
    pub fn tick(&mut self) {
        self.angle += self.config.step_degrees;
        if self.angle > 360.0 {
            self.angle -= 360.0;
        }
    }

    /// Angle in degrees.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.config.interval_ms)
    }
}
