//! Movement configuration and constants

use kinetic_physics::LayerMask;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Time after a jump during which ground detection is suspended
pub const JUMP_GROUNDING_PREVENTION_TIME: f64 = 0.2;
/// Ground probe distance used while airborne
pub const GROUND_CHECK_DISTANCE_IN_AIR: f32 = 0.07;
/// Time after a wall-run jump during which wall detection is suspended
pub const WALL_RUN_JUMP_PREVENTION_TIME: f64 = 0.2;
/// Dash hit probe radius relative to the body radius
pub const DASH_PROBE_RADIUS_SCALE: f32 = 1.5;

/// Movement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Max movement speed when grounded (when not sprinting)
    pub max_speed_on_ground: f32,
    /// Multiplicator for the sprint speed (based on grounded speed)
    pub sprint_speed_modifier: f32,
    /// Sharpness for the movement when grounded; low values mean slow acceleration
    pub movement_sharpness_on_ground: f32,
    /// Upward speed added when jumping
    pub jump_force: f32,
    /// Max horizontal speed when in the air
    pub max_speed_in_air: f32,
    /// Acceleration applied from input while in the air
    pub acceleration_speed_in_air: f32,
    /// Force applied downward when in the air
    pub gravity_down_force: f32,
    /// Layers checked for ground
    pub ground_check_layers: LayerMask,
    /// Extra probe distance past the skin width while grounded
    pub ground_check_distance: f32,
    /// Dash speed relative to ground speed
    pub dash_speed_multiplier: f32,
    /// Dash duration in seconds
    pub dash_time: f32,
    /// Layers a dash can strike
    pub damageable_layers: LayerMask,
    /// Reach of the wall probes past the capsule surface
    pub wall_check_distance: f32,
    /// Layers that can be wall-run on
    pub wall_layers: LayerMask,
    /// Height below which the player is returned to spawn
    pub fell_through_floor_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed_on_ground: 10.0,
            sprint_speed_modifier: 1.65,
            movement_sharpness_on_ground: 15.0,
            jump_force: 9.0,
            max_speed_in_air: 10.0,
            acceleration_speed_in_air: 25.0,
            gravity_down_force: 20.0,
            ground_check_layers: LayerMask::ALL,
            ground_check_distance: 0.05,
            dash_speed_multiplier: 4.5,
            dash_time: 0.2,
            damageable_layers: LayerMask::DAMAGEABLE,
            wall_check_distance: 0.2,
            wall_layers: LayerMask::WORLD,
            fell_through_floor_height: -50.0,
        }
    }
}

impl MovementConfig {
    /// Speed factor from the sprint state
    pub fn speed_multiplier(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed_modifier
        } else {
            1.0
        }
    }

    /// Target ground speed
    pub fn ground_speed(&self, sprinting: bool) -> f32 {
        self.max_speed_on_ground * self.speed_multiplier(sprinting)
    }

    /// Horizontal speed cap in the air
    pub fn air_speed(&self, sprinting: bool) -> f32 {
        self.max_speed_in_air * self.speed_multiplier(sprinting)
    }

    /// Dash speed
    pub fn dash_speed(&self) -> f32 {
        self.max_speed_on_ground * self.dash_speed_multiplier
    }

    /// Check the configuration before a controller is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::non_negative("max_speed_on_ground", self.max_speed_on_ground)?;
        ConfigError::positive("sprint_speed_modifier", self.sprint_speed_modifier)?;
        ConfigError::non_negative(
            "movement_sharpness_on_ground",
            self.movement_sharpness_on_ground,
        )?;
        ConfigError::non_negative("jump_force", self.jump_force)?;
        ConfigError::non_negative("max_speed_in_air", self.max_speed_in_air)?;
        ConfigError::non_negative("acceleration_speed_in_air", self.acceleration_speed_in_air)?;
        ConfigError::non_negative("gravity_down_force", self.gravity_down_force)?;
        ConfigError::non_negative("ground_check_distance", self.ground_check_distance)?;
        ConfigError::non_negative("dash_speed_multiplier", self.dash_speed_multiplier)?;
        ConfigError::non_negative("dash_time", self.dash_time)?;
        ConfigError::non_negative("wall_check_distance", self.wall_check_distance)
    }
}
