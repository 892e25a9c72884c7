//! Grounded movement: sharp acceleration along the slope, jumping, dash start

use kinetic_physics::PhysicsQuery;

use super::{ModeKind, TickContext};

pub(super) fn enter<W: PhysicsQuery + ?Sized>(ctx: &mut TickContext<'_, W>) {
    ctx.caps.reset();
}

pub(super) fn update<W: PhysicsQuery + ?Sized>(ctx: &mut TickContext<'_, W>) -> Option<ModeKind> {
    if !ctx.motion.is_grounded {
        return Some(ModeKind::Airborne);
    }

    let config = ctx.config;
    let input = ctx.input;
    let up = ctx.body.up();

    let target = ctx.world_input() * config.ground_speed(input.sprint);
    let target = ctx
        .body
        .direction_reoriented_on_slope(target, ctx.motion.ground_normal)
        * target.length();
    let blend = (config.movement_sharpness_on_ground * ctx.dt).clamp(0.0, 1.0);
    ctx.motion.velocity = ctx.motion.velocity.lerp(target, blend);

    if input.jump {
        ctx.motion.velocity += up * config.jump_force;
        ctx.motion.record_jump(ctx.now, up);
    } else if input.dash && ctx.caps.can_dash {
        return Some(ModeKind::Dashing);
    }

    ctx.integrate();
    None
}
