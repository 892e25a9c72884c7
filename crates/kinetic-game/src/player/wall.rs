//! Wall detection for wall running

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec3;
use kinetic_physics::{CharacterBody, PhysicsQuery};
use tracing::trace;

use super::motion::MotionState;
use super::movement::{MovementConfig, WALL_RUN_JUMP_PREVENTION_TIME};

/// Body-local probe directions, in priority order. The last two are on the left.
const PROBE_DIRECTIONS: [Vec3; 4] = [
    Vec3::X,
    Vec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    Vec3::NEG_X,
    Vec3::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
];

/// Probe for a runnable wall beside the body.
///
/// On a hit, records the wall normal and side and pulls the velocity toward
/// the wall by the gap so the run starts in contact.
pub(crate) fn detect_wall<W: PhysicsQuery + ?Sized>(
    body: &CharacterBody,
    motion: &mut MotionState,
    config: &MovementConfig,
    world: &W,
    now: f64,
) -> bool {
    if MotionState::within(
        motion.last_time_wall_run_jump,
        now,
        WALL_RUN_JUMP_PREVENTION_TIME,
    ) {
        return false;
    }

    for (index, local) in PROBE_DIRECTIONS.iter().enumerate() {
        let direction = body.transform_vector(*local);
        let origin = body.position() + direction * body.radius();
        if let Some(hit) = world.raycast(
            origin,
            direction,
            config.wall_check_distance,
            config.wall_layers,
        ) {
            motion.wall_normal = hit.normal;
            motion.left_wall = index > 1;
            motion.velocity += direction * hit.distance;
            trace!(left = motion.left_wall, distance = hit.distance, "wall probe hit");
            return true;
        }
    }
    false
}
