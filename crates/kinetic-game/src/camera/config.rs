//! Camera configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// First-person camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees of rotation per unit of look input
    pub rotation_speed: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Camera roll while wall running, in degrees
    pub camera_tilt: f32,
    /// Fraction of `camera_tilt` applied per fixed tick while tilting
    pub tilt_step_fraction: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 200.0,
            pitch_min: -89.0,
            pitch_max: 89.0,
            camera_tilt: 10.0,
            tilt_step_fraction: 0.1,
        }
    }
}

impl CameraConfig {
    /// Check the configuration before a camera is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::non_negative("rotation_speed", self.rotation_speed)?;
        ConfigError::non_negative("camera_tilt", self.camera_tilt)?;
        ConfigError::positive("tilt_step_fraction", self.tilt_step_fraction)?;
        if !(self.pitch_min <= self.pitch_max) {
            return Err(ConfigError::InvertedPitchLimits {
                min: self.pitch_min,
                max: self.pitch_max,
            });
        }
        Ok(())
    }
}
