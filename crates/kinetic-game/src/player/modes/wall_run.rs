//! Wall running: ride along a wall at ground speed, jump off it

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use kinetic_core::math::{angle_degrees, approx_eq};
use kinetic_physics::PhysicsQuery;
use tracing::debug;

use super::{ModeKind, TickContext};

/// State of one wall-run session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallRunContext {
    /// Quarter turn about up that maps the wall normal onto the ride direction
    pub ride_rotation: Quat,
    /// Direction of travel along the wall at entry
    pub ride_direction: Vec3,
    /// Speed captured at entry
    pub speed: f32,
    /// Direction from the body into the wall
    pub reversed_normal: Vec3,
    /// +1 wall on the right, -1 wall on the left
    pub side: f32,
}

impl WallRunContext {
    pub(super) fn enter<W: PhysicsQuery + ?Sized>(ctx: &mut TickContext<'_, W>) -> Self {
        let up = ctx.body.up();
        let normal = ctx.motion.wall_normal;

        // Ride whichever way along the wall is closer to where the body faces
        let mut ride_rotation = Quat::from_axis_angle(up, FRAC_PI_2);
        let mut ride_direction = ride_rotation * normal;
        if angle_degrees(ride_direction, ctx.body.forward()) >= 90.0 {
            ride_rotation = Quat::from_axis_angle(up, -FRAC_PI_2);
            ride_direction = ride_rotation * normal;
        }

        let speed = ctx.config.ground_speed(ctx.input.sprint);
        ctx.motion.velocity = ride_direction * speed;

        let side = if ctx.motion.left_wall { -1.0 } else { 1.0 };
        ctx.tilt.cancel();
        ctx.tilt.start_tilt_in(side);
        ctx.caps.reset();

        Self {
            ride_rotation,
            ride_direction,
            speed,
            reversed_normal: -normal,
            side,
        }
    }

    pub(super) fn update<W: PhysicsQuery + ?Sized>(
        &mut self,
        ctx: &mut TickContext<'_, W>,
    ) -> Option<ModeKind> {
        let up = ctx.body.up();

        if ctx.input.jump {
            ctx.motion.velocity = (up + ctx.motion.wall_normal).normalize() * ctx.config.jump_force;
            ctx.tilt.start_tilt_out();
            ctx.motion.record_wall_run_jump(ctx.now, up);
            return Some(ModeKind::Airborne);
        }

        let origin = ctx.body.position() + self.reversed_normal * ctx.body.radius();
        let hit = ctx.world.raycast(
            origin,
            self.reversed_normal,
            2.0 * ctx.config.wall_check_distance,
            ctx.config.wall_layers,
        );

        match hit {
            Some(hit) if !approx_eq(hit.normal, ctx.motion.wall_normal) => {
                // Curved wall: follow the new surface
                ctx.motion.wall_normal = hit.normal;
                self.reversed_normal = -hit.normal;

                let mut pull = self.reversed_normal * hit.distance;
                ctx.body.apply_velocity(&mut *ctx.world, &mut pull, ctx.dt);

                ctx.motion.velocity = self.ride_rotation * hit.normal * self.speed;
                ctx.integrate();
                None
            }
            Some(_) => {
                ctx.integrate();
                None
            }
            None => {
                debug!("wall run lost its wall");
                ctx.tilt.start_tilt_out();
                if ctx.motion.is_grounded {
                    Some(ModeKind::Grounded)
                } else {
                    Some(ModeKind::Airborne)
                }
            }
        }
    }
}
