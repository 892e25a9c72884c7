//! Wall-run camera roll
//!
//! The tilt is stepped once per fixed tick by its owner. Each step yields a
//! roll delta in degrees that the caller forwards to the camera. The
//! accumulated roll survives the wall run that started it, so a tilt-out
//! always returns the camera to level even after the session has ended.

use super::CameraConfig;

/// What the tilt effect is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiltPhase {
    /// Holding the current roll
    #[default]
    Idle,
    /// Rolling toward `side * max_tilt`
    TiltingIn,
    /// Rolling back to level
    TiltingOut,
}

/// Camera roll tween driven by wall running
#[derive(Debug, Clone)]
pub struct CameraTilt {
    phase: TiltPhase,
    amount_rotated: f32,
    side: f32,
    max_tilt: f32,
    step_fraction: f32,
}

impl CameraTilt {
    /// Create an idle, level tilt
    pub fn new(max_tilt: f32, step_fraction: f32) -> Self {
        Self {
            phase: TiltPhase::Idle,
            amount_rotated: 0.0,
            side: 1.0,
            max_tilt,
            step_fraction,
        }
    }

    /// Create a tilt from camera settings
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.camera_tilt, config.tilt_step_fraction)
    }

    /// Current phase
    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    /// Roll applied so far, in degrees
    pub fn amount_rotated(&self) -> f32 {
        self.amount_rotated
    }

    /// Whether a tween is running
    pub fn is_active(&self) -> bool {
        self.phase != TiltPhase::Idle
    }

    /// Start rolling toward `side` (+1 wall on the right, -1 wall on the left)
    pub fn start_tilt_in(&mut self, side: f32) {
        self.cancel();
        self.side = if side < 0.0 { -1.0 } else { 1.0 };
        self.phase = TiltPhase::TiltingIn;
    }

    /// Start rolling back to level
    pub fn start_tilt_out(&mut self) {
        self.cancel();
        self.phase = TiltPhase::TiltingOut;
    }

    /// Stop the running tween, keeping whatever roll was already applied
    pub fn cancel(&mut self) {
        self.phase = TiltPhase::Idle;
    }

    /// Level the camera instantly, returning the delta that undoes the roll
    pub fn reset(&mut self) -> f32 {
        let delta = -self.amount_rotated;
        self.amount_rotated = 0.0;
        self.phase = TiltPhase::Idle;
        delta
    }

    /// Advance one fixed tick and return the roll delta to apply
    pub fn advance(&mut self) -> f32 {
        let target = match self.phase {
            TiltPhase::Idle => return 0.0,
            TiltPhase::TiltingIn => self.side * self.max_tilt,
            TiltPhase::TiltingOut => 0.0,
        };

        let step = self.max_tilt * self.step_fraction;
        let remaining = target - self.amount_rotated;
        if remaining.abs() <= step {
            self.amount_rotated = target;
            self.phase = TiltPhase::Idle;
            return remaining;
        }

        let delta = step.copysign(remaining);
        self.amount_rotated += delta;
        delta
    }
}

impl Default for CameraTilt {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
