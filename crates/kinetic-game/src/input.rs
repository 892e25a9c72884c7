//! Input sampling for the movement controller
//!
//! Device handling lives with the host. The host feeds [`InputState`] with
//! action presses and look deltas; once per tick the state is sampled into a
//! [`MovementInput`] snapshot that the movement modes read.

use std::collections::HashSet;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Raw look deltas are scaled down so mouse motion roughly matches stick input
const MOUSE_LOOK_SCALE: f32 = 0.01;

/// Game actions the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward
    MoveForward,
    /// Move backward
    MoveBackward,
    /// Strafe left
    MoveLeft,
    /// Strafe right
    MoveRight,
    /// Jump / double jump / wall jump
    Jump,
    /// Sprint modifier
    Sprint,
    /// Dash along the camera forward
    Dash,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Look movement delta for this frame (x = right, y = up)
    pub look_delta: Vec2,
    /// Whether the cursor is captured; gameplay input is ignored otherwise
    pub cursor_captured: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press; only the first press of a held action counts as "just pressed"
    pub fn press(&mut self, action: InputAction) {
        if !self.held.contains(&action) {
            self.just_pressed.insert(action);
        }
        self.held.insert(action);
    }

    /// Record a release
    pub fn release(&mut self, action: InputAction) {
        self.held.remove(&action);
    }

    /// Accumulate look movement
    pub fn add_look(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.look_delta = Vec2::ZERO;
    }
}

/// Look sensitivity and axis inversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Sensitivity multiplier for look input
    pub look_sensitivity: f32,
    /// Flip the horizontal look axis
    pub invert_x: bool,
    /// Flip the vertical look axis
    pub invert_y: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            look_sensitivity: 1.0,
            invert_x: false,
            invert_y: false,
        }
    }
}

/// Per-tick input snapshot consumed by the movement modes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Strafe (x, right positive) and forward (y) axes, magnitude <= 1
    pub move_axis: Vec2,
    /// Sprint held
    pub sprint: bool,
    /// Jump pressed this tick
    pub jump: bool,
    /// Dash pressed this tick
    pub dash: bool,
    /// Look deltas after sensitivity (x = turn right, y = look up)
    pub look: Vec2,
}

impl MovementInput {
    /// Sample an input state. Returns a neutral snapshot while the cursor is free.
    pub fn sample(state: &InputState, settings: &InputSettings) -> Self {
        if !state.cursor_captured {
            return Self::default();
        }

        let mut axis = Vec2::ZERO;
        if state.is_held(InputAction::MoveForward) {
            axis.y += 1.0;
        }
        if state.is_held(InputAction::MoveBackward) {
            axis.y -= 1.0;
        }
        if state.is_held(InputAction::MoveLeft) {
            axis.x -= 1.0;
        }
        if state.is_held(InputAction::MoveRight) {
            axis.x += 1.0;
        }

        let invert = |flag: bool| if flag { -1.0 } else { 1.0 };
        let look = Vec2::new(
            state.look_delta.x * invert(settings.invert_x),
            state.look_delta.y * invert(settings.invert_y),
        ) * settings.look_sensitivity
            * MOUSE_LOOK_SCALE;

        Self {
            move_axis: axis.clamp_length_max(1.0),
            sprint: state.is_held(InputAction::Sprint),
            jump: state.is_just_pressed(InputAction::Jump),
            dash: state.is_just_pressed(InputAction::Dash),
            look,
        }
    }

    /// Snapshot with only a movement axis set
    pub fn moving(move_axis: Vec2) -> Self {
        Self {
            move_axis: move_axis.clamp_length_max(1.0),
            ..Default::default()
        }
    }

    /// Movement as a body-local direction (forward is -Z)
    pub fn local_direction(&self) -> Vec3 {
        Vec3::new(self.move_axis.x, 0.0, -self.move_axis.y).clamp_length_max(1.0)
    }
}
