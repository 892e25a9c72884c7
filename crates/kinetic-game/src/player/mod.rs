//! Player controller module
//!
//! First-person movement: ground and wall sensors feeding a four-mode state
//! machine (grounded, airborne, wall running, dashing).

mod controller;
mod ground;
mod modes;
mod motion;
mod movement;
mod wall;

pub use controller::PlayerController;
pub use modes::{DashContext, ModeKind, MovementMode, WallRunContext};
pub use motion::{CapabilityFlags, MotionState};
pub use movement::{
    MovementConfig, DASH_PROBE_RADIUS_SCALE, GROUND_CHECK_DISTANCE_IN_AIR,
    JUMP_GROUNDING_PREVENTION_TIME, WALL_RUN_JUMP_PREVENTION_TIME,
};
