//! Core types used throughout the Kinetic controller

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a body
///
/// Local axes follow a right-handed Y-up convention: forward is -Z,
/// right is +X and up is +Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Transform a local-space direction into world space
    pub fn transform_vector(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Translate by the given offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Rotate about the local up axis by `degrees`
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(degrees.to_radians())).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let transform = Transform::default();
        assert_eq!(transform.forward(), Vec3::NEG_Z);
        assert_eq!(transform.right(), Vec3::X);
        assert_eq!(transform.up(), Vec3::Y);
    }

    #[test]
    fn test_rotate_yaw_turns_forward_left() {
        let mut transform = Transform::default();
        transform.rotate_yaw(90.0);
        let forward = transform.forward();
        assert!((forward - Vec3::NEG_X).length() < 1e-5);
        assert!((transform.up() - Vec3::Y).length() < 1e-5);
    }
}
