//! Kinetic - headless first-person movement simulation
//!
//! Builds a small arena, drives the player controller with a scripted input
//! timeline and logs what the controller did.

mod arena;
mod settings;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use arena::Timeline;
use settings::Settings;
use simulation::Simulation;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Starting Kinetic simulation...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from(&path)?,
        None => Settings::load(),
    };

    let mut simulation = Simulation::new(&settings, Timeline::demo())?;

    for frame in 0..settings.simulation.ticks {
        simulation.update(settings.simulation.fixed_timestep);

        if frame % 50 == 0 {
            let player = &simulation.player;
            debug!(
                frame,
                mode = ?player.mode_kind(),
                position = ?player.position(),
                velocity = ?player.velocity(),
                "player state"
            );
        }
    }

    info!(
        frames = settings.simulation.ticks,
        simulated_seconds = simulation.game_time.now(),
        transitions = simulation.player.transitions(),
        targets_hit = simulation.targets_hit,
        standing_targets = simulation.arena.targets.len(),
        respawning_targets = simulation.arena.pending_respawns(),
        position = ?simulation.player.position(),
        "Simulation finished"
    );
    for (mode, frames) in &simulation.frames_in_mode {
        info!(?mode, frames, "time in mode");
    }

    Ok(())
}
