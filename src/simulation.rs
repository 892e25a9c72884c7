//! Headless run state: arena, player and scripted input stepped frame by frame

use std::collections::HashMap;

use anyhow::{Context, Result};
use kinetic_core::{GameTime, TimeConfig};
use kinetic_game::{
    DespawnQueue, InputSettings, InputState, ModeKind, MovementInput, PlayerController,
};
use tracing::info;

use crate::arena::{Arena, Timeline, SPAWN_POINT};
use crate::settings::Settings;

/// Simulation state
pub struct Simulation {
    pub player: PlayerController,
    pub arena: Arena,
    pub game_time: GameTime,
    timeline: Timeline,
    input_state: InputState,
    input_settings: InputSettings,
    despawned: DespawnQueue,
    respawn_delay: f64,
    frame: u32,
    /// Frames spent in each movement mode
    pub frames_in_mode: HashMap<ModeKind, u32>,
    /// Targets destroyed by dashes
    pub targets_hit: usize,
}

impl Simulation {
    pub fn new(settings: &Settings, timeline: Timeline) -> Result<Self> {
        let mut player = PlayerController::new(
            settings.movement.clone(),
            settings.body.clone(),
            settings.camera.clone(),
        )
        .context("Invalid controller settings")?;
        player.spawn(SPAWN_POINT);

        let mut input_state = InputState::new();
        input_state.cursor_captured = true;

        Ok(Self {
            player,
            arena: Arena::build(),
            game_time: GameTime::new(TimeConfig {
                time_scale: settings.simulation.time_scale,
                fixed_timestep: settings.simulation.fixed_timestep,
                ..Default::default()
            }),
            timeline,
            input_state,
            input_settings: settings.input.clone(),
            despawned: DespawnQueue::new(),
            respawn_delay: f64::from(settings.simulation.target_respawn_delay),
            frame: 0,
            frames_in_mode: HashMap::new(),
            targets_hit: 0,
        })
    }

    /// Step one frame of `delta` real seconds. Movement runs once on the
    /// scaled frame delta; the camera tilt runs once per fixed step.
    pub fn update(&mut self, delta: f32) {
        self.game_time.update(delta);

        self.timeline.apply(self.frame, &mut self.input_state);
        let input = MovementInput::sample(&self.input_state, &self.input_settings);
        self.player.update(
            &mut self.arena.world,
            &input,
            &mut self.despawned,
            &self.game_time,
        );
        for _ in 0..self.game_time.fixed_steps() {
            self.player.fixed_update();
        }
        self.input_state.clear_frame();

        let now = self.game_time.now();
        for target in self.despawned.drain() {
            if self.arena.destroy_target(target, now + self.respawn_delay) {
                info!(?target, frame = self.frame, "target destroyed");
                self.targets_hit += 1;
            }
        }
        for position in self.arena.respawn_due(now) {
            info!(?position, frame = self.frame, "target respawned");
        }

        *self.frames_in_mode.entry(self.player.mode_kind()).or_default() += 1;
        self.frame += 1;
    }
}
