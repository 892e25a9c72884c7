//! Camera module
//!
//! First-person look and the wall-run roll effect.

mod config;
mod controller;
mod tilt;

pub use config::CameraConfig;
pub use controller::FirstPersonCamera;
pub use tilt::{CameraTilt, TiltPhase};
