//! Simulation settings with persistence
//!
//! Settings are read from `~/.config/kinetic/settings.toml` unless a path is
//! given on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use kinetic_game::{CameraConfig, InputSettings, MovementConfig};
use kinetic_physics::BodyConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All tunables for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement: MovementConfig,
    pub body: BodyConfig,
    pub camera: CameraConfig,
    pub input: InputSettings,
    pub simulation: SimulationSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kinetic"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, writing defaults on first run
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, writing defaults");
            let settings = Self::default();
            if let Err(e) = settings.save() {
                warn!("{:#}", e);
            }
            return settings;
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of fixed ticks to simulate
    pub ticks: u32,
    /// Fixed timestep in seconds
    pub fixed_timestep: f32,
    /// Time scale multiplier
    pub time_scale: f32,
    /// Seconds before a destroyed target comes back
    pub target_respawn_delay: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            ticks: 600,
            fixed_timestep: 1.0 / 50.0,
            time_scale: 1.0,
            target_respawn_delay: 5.0,
        }
    }
}
