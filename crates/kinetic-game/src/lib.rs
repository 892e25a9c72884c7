//! Kinetic Game - First-person movement for an action game
//!
//! Provides the movement state machine (grounded, airborne, wall running,
//! dashing), the ground and wall sensors feeding it, first-person look with
//! wall-run camera tilt, and input sampling.

pub mod camera;
pub mod despawn;
pub mod error;
pub mod input;
pub mod player;

#[cfg(test)]
pub(crate) mod testing;

pub use camera::{CameraConfig, CameraTilt, FirstPersonCamera, TiltPhase};
pub use despawn::{DespawnQueue, EntityDespawner};
pub use error::ConfigError;
pub use input::{InputAction, InputSettings, InputState, MovementInput};
pub use player::{
    CapabilityFlags, DashContext, ModeKind, MotionState, MovementConfig, MovementMode,
    PlayerController, WallRunContext,
};
