//! Per-tick motion state shared by the sensors and movement modes

use glam::Vec3;

/// Velocity, contact results and jump timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// World-space velocity
    pub velocity: Vec3,
    /// Result of the last ground probe
    pub is_grounded: bool,
    /// Normal of the ground under the body, up when nothing was found
    pub ground_normal: Vec3,
    /// Normal of the last wall found by the wall probes
    pub wall_normal: Vec3,
    /// Whether that wall is on the body's left
    pub left_wall: bool,
    /// Simulation time of the last jump of any kind
    pub last_time_jumped: Option<f64>,
    /// Simulation time of the last jump off a wall
    pub last_time_wall_run_jump: Option<f64>,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            is_grounded: false,
            ground_normal: Vec3::Y,
            wall_normal: Vec3::ZERO,
            left_wall: false,
            last_time_jumped: None,
            last_time_wall_run_jump: None,
        }
    }
}

impl MotionState {
    /// Record a jump: the body leaves the ground immediately
    pub fn record_jump(&mut self, now: f64, up: Vec3) {
        self.last_time_jumped = Some(now);
        self.is_grounded = false;
        self.ground_normal = up;
    }

    /// Record a jump off a wall
    pub fn record_wall_run_jump(&mut self, now: f64, up: Vec3) {
        self.last_time_wall_run_jump = Some(now);
        self.record_jump(now, up);
    }

    /// Whether less than `window` seconds have passed since `timestamp`
    pub(crate) fn within(timestamp: Option<f64>, now: f64, window: f64) -> bool {
        timestamp.is_some_and(|t| now - t < window)
    }
}

/// One-shot abilities, restored on landing or on catching a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityFlags {
    /// A dash is available
    pub can_dash: bool,
    /// A second jump is available while airborne
    pub can_double_jump: bool,
}

impl Default for CapabilityFlags {
    fn default() -> Self {
        Self {
            can_dash: true,
            can_double_jump: true,
        }
    }
}

impl CapabilityFlags {
    /// Make every ability available again
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
