//! Player controller: sensors, look, and the movement mode state machine

use glam::Vec3;
use kinetic_core::GameTime;
use kinetic_physics::{BodyConfig, CharacterBody, PhysicsQuery};
use tracing::{debug, info};

use crate::camera::{CameraConfig, CameraTilt, FirstPersonCamera};
use crate::despawn::EntityDespawner;
use crate::error::ConfigError;
use crate::input::MovementInput;

use super::ground::detect_ground;
use super::modes::{ModeKind, MovementMode, TickContext};
use super::motion::{CapabilityFlags, MotionState};
use super::MovementConfig;

/// First-person player controller
pub struct PlayerController {
    /// Movement configuration
    pub config: MovementConfig,
    /// Capsule proxy
    pub body: CharacterBody,
    /// First-person camera
    pub camera: FirstPersonCamera,
    motion: MotionState,
    caps: CapabilityFlags,
    tilt: CameraTilt,
    mode: MovementMode,
    spawn_point: Vec3,
    transitions: u64,
}

impl PlayerController {
    /// Create a controller, rejecting invalid configuration
    pub fn new(
        config: MovementConfig,
        body: BodyConfig,
        camera: CameraConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        body.validate()?;
        camera.validate()?;

        Ok(Self {
            config,
            body: CharacterBody::with_config(body),
            tilt: CameraTilt::from_config(&camera),
            camera: FirstPersonCamera::with_config(camera),
            motion: MotionState::default(),
            caps: CapabilityFlags::default(),
            mode: MovementMode::default(),
            spawn_point: Vec3::ZERO,
            transitions: 0,
        })
    }

    /// Place the player at `position` and make it the respawn point
    pub fn spawn(&mut self, position: Vec3) {
        self.spawn_point = position;
        self.reset_to(position);
        info!(?position, "player spawned");
    }

    /// Send the player back to its spawn point
    pub fn respawn(&mut self) {
        self.reset_to(self.spawn_point);
        info!(position = ?self.spawn_point, "player respawned");
    }

    fn reset_to(&mut self, position: Vec3) {
        self.body.set_position(position);
        self.motion = MotionState::default();
        self.caps.reset();
        self.mode = MovementMode::Airborne;
        let level = self.tilt.reset();
        self.camera.apply_roll(level);
    }

    /// Run one simulation tick
    pub fn update<W: PhysicsQuery + ?Sized>(
        &mut self,
        world: &mut W,
        input: &MovementInput,
        despawner: &mut dyn EntityDespawner,
        time: &GameTime,
    ) {
        let dt = time.delta_time;
        if dt <= 0.0 {
            return;
        }
        let now = time.now();

        detect_ground(&mut self.body, &mut self.motion, &self.config, &mut *world, now, dt);

        self.camera.apply_look(&mut self.body, input.look);
        let camera_forward = self.camera.forward(&self.body);

        let mut ctx = TickContext {
            config: &self.config,
            body: &mut self.body,
            motion: &mut self.motion,
            caps: &mut self.caps,
            tilt: &mut self.tilt,
            world,
            despawner,
            input,
            camera_forward,
            now,
            dt,
        };

        if let Some(next) = self.mode.update(&mut ctx) {
            let current = self.mode.kind();
            debug_assert_ne!(next, current, "mode requested a transition to itself");
            if next != current {
                debug!(from = ?current, to = ?next, "movement mode changed");
                self.mode = MovementMode::enter(next, &mut ctx);
                self.transitions += 1;
            }
        }

        if self.body.position().y < self.config.fell_through_floor_height {
            self.respawn();
        }
    }

    /// Advance fixed-rate effects (camera tilt)
    pub fn fixed_update(&mut self) {
        let roll = self.tilt.advance();
        if roll != 0.0 {
            self.camera.apply_roll(roll);
        }
    }

    /// Active mode
    pub fn mode(&self) -> &MovementMode {
        &self.mode
    }

    /// Active mode kind
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Velocity, contacts and timestamps
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.motion.velocity
    }

    /// Whether the ground sensor found walkable ground this tick
    pub fn is_grounded(&self) -> bool {
        self.motion.is_grounded
    }

    /// Double jump and dash availability
    pub fn capabilities(&self) -> CapabilityFlags {
        self.caps
    }

    /// Wall-run camera tilt
    pub fn tilt(&self) -> &CameraTilt {
        &self.tilt
    }

    /// Get the player's position (capsule center)
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// Get the player's eye position (for camera)
    pub fn eye_position(&self) -> Vec3 {
        self.camera.position(&self.body)
    }

    /// Where the player respawns
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    /// Number of mode transitions since creation
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}
