//! Kinetic Core - Core types and utilities for the Kinetic movement controller
//!
//! This crate provides the foundational types shared by the physics and game crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform used as the controller's pose
//! - Simulation clock with a fixed-step accumulator
//! - Vector helpers for plane projection and magnitude clamping

pub mod math;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
pub use types::Transform;
