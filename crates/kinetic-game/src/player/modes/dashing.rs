//! Dashing: a short burst along the camera forward that strikes targets

use glam::Vec3;
use kinetic_physics::PhysicsQuery;
use tracing::debug;

use super::{ModeKind, TickContext};
use crate::player::movement::DASH_PROBE_RADIUS_SCALE;

/// State of one dash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashContext {
    /// Unit direction, fixed at entry
    pub direction: Vec3,
    /// Dash speed
    pub speed: f32,
    /// Simulation time the dash started
    pub started_at: f64,
}

impl DashContext {
    pub(super) fn enter<W: PhysicsQuery + ?Sized>(ctx: &mut TickContext<'_, W>) -> Self {
        let direction = ctx.camera_forward.try_normalize().unwrap_or(ctx.body.forward());
        let speed = ctx.config.dash_speed();

        ctx.caps.can_dash = false;
        ctx.motion.velocity = direction * speed;

        Self {
            direction,
            speed,
            started_at: ctx.now,
        }
    }

    pub(super) fn update<W: PhysicsQuery + ?Sized>(
        &mut self,
        ctx: &mut TickContext<'_, W>,
    ) -> Option<ModeKind> {
        if ctx.now - self.started_at >= f64::from(ctx.config.dash_time) {
            ctx.motion.velocity = Vec3::ZERO;
            return Some(ModeKind::Airborne);
        }

        let probe = ctx
            .body
            .capsule()
            .with_radius(ctx.body.radius() * DASH_PROBE_RADIUS_SCALE);
        if let Some(hit) = ctx.world.capsule_sweep(
            &probe,
            self.direction,
            self.speed * ctx.dt,
            ctx.config.damageable_layers,
        ) {
            debug!(collider = ?hit.collider, distance = hit.distance, "dash hit");
            ctx.caps.can_dash = true;
            ctx.despawner.notify_hit(hit.collider);
            ctx.motion.velocity = Vec3::ZERO;
            return Some(ModeKind::Airborne);
        }

        ctx.integrate();
        None
    }
}
