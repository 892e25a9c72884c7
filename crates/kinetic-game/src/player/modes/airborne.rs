//! Airborne movement: limited air control, gravity, double jump

use glam::Vec3;
use kinetic_core::math::{clamp_magnitude, project_on_plane};
use kinetic_physics::PhysicsQuery;

use super::{ModeKind, TickContext};
use crate::player::motion::{CapabilityFlags, MotionState};
use crate::player::wall::detect_wall;

pub(super) fn update<W: PhysicsQuery + ?Sized>(ctx: &mut TickContext<'_, W>) -> Option<ModeKind> {
    if detect_wall(ctx.body, ctx.motion, ctx.config, &*ctx.world, ctx.now) {
        ctx.integrate();
        return Some(ModeKind::WallRunning);
    }
    if ctx.motion.is_grounded {
        return Some(ModeKind::Grounded);
    }

    let config = ctx.config;
    let input = ctx.input;
    let up = ctx.body.up();

    if input.jump && ctx.caps.can_double_jump {
        double_jump(ctx.motion, ctx.caps, up, config.jump_force, ctx.now);
    } else if input.dash && ctx.caps.can_dash {
        return Some(ModeKind::Dashing);
    }

    let dt = ctx.dt;
    let mut velocity =
        ctx.motion.velocity + ctx.world_input() * config.acceleration_speed_in_air * dt;

    let vertical = velocity.dot(up);
    let horizontal = clamp_magnitude(
        project_on_plane(velocity, up),
        config.air_speed(input.sprint),
    );
    velocity = horizontal + up * vertical;
    velocity -= up * config.gravity_down_force * dt;

    ctx.motion.velocity = velocity;
    ctx.integrate();
    None
}

/// Replace the vertical velocity with a fresh jump impulse
fn double_jump(
    motion: &mut MotionState,
    caps: &mut CapabilityFlags,
    up: Vec3,
    jump_force: f32,
    now: f64,
) {
    motion.velocity = project_on_plane(motion.velocity, up) + up * jump_force;
    caps.can_double_jump = false;
    motion.record_jump(now, up);
}
