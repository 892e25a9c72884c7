//! Ground detection

use kinetic_physics::{CharacterBody, PhysicsQuery};
use tracing::trace;

use super::motion::MotionState;
use super::movement::{
    MovementConfig, GROUND_CHECK_DISTANCE_IN_AIR, JUMP_GROUNDING_PREVENTION_TIME,
};

/// Probe for ground under the body and update `motion.is_grounded` and
/// `motion.ground_normal`.
///
/// The probe reaches further while the body was grounded on the previous
/// tick, so small drops are followed instead of turning into short falls.
/// Ground within reach but past the skin width is snapped to.
pub(crate) fn detect_ground<W: PhysicsQuery + ?Sized>(
    body: &mut CharacterBody,
    motion: &mut MotionState,
    config: &MovementConfig,
    world: &mut W,
    now: f64,
    dt: f32,
) -> bool {
    let up = body.up();
    let skin_width = body.config.skin_width;
    let check_distance = if motion.is_grounded {
        skin_width + config.ground_check_distance
    } else {
        GROUND_CHECK_DISTANCE_IN_AIR
    };

    motion.is_grounded = false;
    motion.ground_normal = up;

    if MotionState::within(motion.last_time_jumped, now, JUMP_GROUNDING_PREVENTION_TIME) {
        return false;
    }

    let probe_radius = body.radius() - body.config.contact_offset;
    let Some(hit) = world.sphere_sweep(
        body.bottom_hemisphere(),
        probe_radius,
        -up,
        check_distance,
        config.ground_check_layers,
    ) else {
        return false;
    };

    motion.ground_normal = hit.normal;
    if hit.normal.dot(up) > 0.0 && body.is_normal_under_slope_limit(hit.normal) {
        motion.is_grounded = true;
        if hit.distance > skin_width {
            body.move_by(world, -up * (hit.distance - skin_width), dt);
        }
    }

    trace!(
        grounded = motion.is_grounded,
        distance = hit.distance,
        "ground probe hit"
    );
    motion.is_grounded
}
