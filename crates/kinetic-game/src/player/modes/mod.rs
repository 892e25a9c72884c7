//! Movement modes
//!
//! Exactly one mode is active. A mode's `update` runs once per tick and may
//! ask for a transition; the controller then builds the next mode through
//! [`MovementMode::enter`], which runs that mode's entry logic once.

mod airborne;
mod dashing;
mod grounded;
mod wall_run;

use glam::Vec3;
use kinetic_physics::{CharacterBody, PhysicsQuery, QueryHit};

use super::motion::{CapabilityFlags, MotionState};
use super::movement::MovementConfig;
use crate::camera::CameraTilt;
use crate::despawn::EntityDespawner;
use crate::input::MovementInput;

pub use dashing::DashContext;
pub use wall_run::WallRunContext;

/// Discriminant of [`MovementMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Grounded,
    Airborne,
    WallRunning,
    Dashing,
}

/// Active movement mode with its per-session context
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MovementMode {
    Grounded,
    #[default]
    Airborne,
    WallRunning(WallRunContext),
    Dashing(DashContext),
}

/// Everything a mode can read or change during one tick
pub(crate) struct TickContext<'a, W: PhysicsQuery + ?Sized> {
    pub config: &'a MovementConfig,
    pub body: &'a mut CharacterBody,
    pub motion: &'a mut MotionState,
    pub caps: &'a mut CapabilityFlags,
    pub tilt: &'a mut CameraTilt,
    pub world: &'a mut W,
    pub despawner: &'a mut dyn EntityDespawner,
    pub input: &'a MovementInput,
    /// Camera forward (yaw and pitch) sampled after look input
    pub camera_forward: Vec3,
    pub now: f64,
    pub dt: f32,
}

impl<W: PhysicsQuery + ?Sized> TickContext<'_, W> {
    /// Apply the current velocity for this tick
    pub fn integrate(&mut self) -> Option<QueryHit> {
        self.body
            .apply_velocity(&mut *self.world, &mut self.motion.velocity, self.dt)
    }

    /// Movement input in world space
    pub fn world_input(&self) -> Vec3 {
        self.body.transform_vector(self.input.local_direction())
    }
}

impl MovementMode {
    /// Which mode this is
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Grounded => ModeKind::Grounded,
            Self::Airborne => ModeKind::Airborne,
            Self::WallRunning(_) => ModeKind::WallRunning,
            Self::Dashing(_) => ModeKind::Dashing,
        }
    }

    /// Build a mode and run its entry logic
    pub(crate) fn enter<W: PhysicsQuery + ?Sized>(
        kind: ModeKind,
        ctx: &mut TickContext<'_, W>,
    ) -> Self {
        match kind {
            ModeKind::Grounded => {
                grounded::enter(ctx);
                Self::Grounded
            }
            ModeKind::Airborne => Self::Airborne,
            ModeKind::WallRunning => Self::WallRunning(WallRunContext::enter(ctx)),
            ModeKind::Dashing => Self::Dashing(DashContext::enter(ctx)),
        }
    }

    /// Run one tick of the active mode; returns the requested next mode
    pub(crate) fn update<W: PhysicsQuery + ?Sized>(
        &mut self,
        ctx: &mut TickContext<'_, W>,
    ) -> Option<ModeKind> {
        match self {
            Self::Grounded => grounded::update(ctx),
            Self::Airborne => airborne::update(ctx),
            Self::WallRunning(session) => session.update(ctx),
            Self::Dashing(session) => session.update(ctx),
        }
    }
}
