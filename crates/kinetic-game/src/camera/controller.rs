//! First-person camera: yaw turns the body, pitch and roll stay on the camera

use glam::{Quat, Vec2, Vec3};
use kinetic_physics::CharacterBody;

use super::CameraConfig;

/// First-person camera attached to the player body
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    /// Configuration
    pub config: CameraConfig,
    /// Pitch in degrees (positive looks up)
    pitch: f32,
    /// Roll in degrees, driven by the wall-run tilt
    roll: f32,
}

impl FirstPersonCamera {
    /// Create a camera with default config
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            config,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Current pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current roll in degrees
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Set the pitch directly, clamped to the configured limits
    pub fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees.clamp(self.config.pitch_min, self.config.pitch_max);
    }

    /// Apply look input: horizontal turns the body, vertical pitches the camera
    pub fn apply_look(&mut self, body: &mut CharacterBody, look: Vec2) {
        if look.x != 0.0 {
            body.transform.rotate_yaw(-look.x * self.config.rotation_speed);
        }
        self.set_pitch(self.pitch + look.y * self.config.rotation_speed);
    }

    /// Add a roll delta from the tilt effect
    pub fn apply_roll(&mut self, degrees: f32) {
        self.roll += degrees;
    }

    /// Reset pitch and roll
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.roll = 0.0;
    }

    /// Camera forward direction in world space
    pub fn forward(&self, body: &CharacterBody) -> Vec3 {
        (body.transform.rotation * Quat::from_rotation_x(self.pitch.to_radians())) * Vec3::NEG_Z
    }

    /// Camera position in world space
    pub fn position(&self, body: &CharacterBody) -> Vec3 {
        body.eye_position()
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new()
    }
}
