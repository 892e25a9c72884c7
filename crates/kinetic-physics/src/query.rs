//! Physics query facade
//!
//! The movement code only talks to the world through [`PhysicsQuery`]. Any
//! backend that can cast rays, sweep spheres and capsules, and resolve a
//! discrete capsule move against static geometry satisfies the contract.

use glam::Vec3;
use rapier3d::prelude::ColliderHandle;
use serde::{Deserialize, Serialize};

/// Bitmask of collision layers a query is allowed to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing
    pub const NONE: Self = Self(0);
    /// Matches every layer
    pub const ALL: Self = Self(u32::MAX);
    /// Static level geometry: floors, walls, props
    pub const WORLD: Self = Self(1 << 0);
    /// Targets that a dash can strike
    pub const DAMAGEABLE: Self = Self(1 << 1);

    /// Build a mask holding a single layer index (0..32)
    pub const fn layer(index: u32) -> Self {
        Self(1 << (index % 32))
    }

    /// Whether any of `other`'s layers are in this mask
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Combine two masks
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Result of a successful ray cast or shape sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHit {
    /// The collider that was hit
    pub collider: ColliderHandle,
    /// Distance travelled along the query direction before contact
    pub distance: f32,
    /// World-space contact point
    pub point: Vec3,
    /// Surface normal of the hit collider at the contact
    pub normal: Vec3,
}

/// World-space capsule described by its two hemisphere centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleExtents {
    /// Center of the bottom hemisphere
    pub bottom: Vec3,
    /// Center of the top hemisphere
    pub top: Vec3,
    /// Hemisphere radius
    pub radius: f32,
}

impl CapsuleExtents {
    /// Midpoint between the hemisphere centers
    pub fn center(&self) -> Vec3 {
        (self.bottom + self.top) * 0.5
    }

    /// Half the distance between the hemisphere centers
    pub fn half_segment(&self) -> f32 {
        (self.top - self.bottom).length() * 0.5
    }

    /// Same capsule shifted by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            bottom: self.bottom + offset,
            top: self.top + offset,
            radius: self.radius,
        }
    }

    /// Same capsule with a different radius
    pub fn with_radius(&self, radius: f32) -> Self {
        Self { radius, ..*self }
    }
}

/// How the engine resolves a discrete capsule move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveConstraints {
    /// Gap kept between the capsule and geometry
    pub contact_offset: f32,
    /// Steepest climbable slope in degrees
    pub slope_limit: f32,
    /// Highest ledge that can be stepped onto (0 disables stepping)
    pub step_offset: f32,
}

/// Ray casts, shape sweeps and sweep-and-slide moves against a physics world.
///
/// Every query returns an optional hit; degenerate queries (zero direction,
/// non-positive distance) report `None` instead of failing.
pub trait PhysicsQuery {
    /// Cast a ray and return the closest hit within `max_distance`
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit>;

    /// Sweep a sphere from `center` along `direction`
    fn sphere_sweep(
        &self,
        center: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit>;

    /// Sweep a capsule along `direction`
    fn capsule_sweep(
        &self,
        capsule: &CapsuleExtents,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit>;

    /// Move a capsule by `displacement`, resolving collisions with the world.
    ///
    /// Returns the displacement that was actually applied.
    fn move_capsule(
        &mut self,
        capsule: &CapsuleExtents,
        constraints: &MoveConstraints,
        displacement: Vec3,
        dt: f32,
    ) -> Vec3;
}

/// Normalize a query direction, rejecting degenerate input
pub(crate) fn query_direction(direction: Vec3, max_distance: f32) -> Option<Vec3> {
    if !(max_distance > 0.0) || !max_distance.is_finite() {
        return None;
    }
    let dir = direction.normalize_or_zero();
    (dir != Vec3::ZERO).then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_mask() {
        assert!(LayerMask::ALL.intersects(LayerMask::DAMAGEABLE));
        assert!(!LayerMask::WORLD.intersects(LayerMask::DAMAGEABLE));
        assert_eq!(LayerMask::layer(1), LayerMask::DAMAGEABLE);
        assert_eq!(
            LayerMask::WORLD.union(LayerMask::DAMAGEABLE),
            LayerMask(0b11)
        );
    }

    #[test]
    fn test_degenerate_directions_rejected() {
        assert!(query_direction(Vec3::ZERO, 1.0).is_none());
        assert!(query_direction(Vec3::X, 0.0).is_none());
        assert!(query_direction(Vec3::X, f32::NAN).is_none());
        assert_eq!(query_direction(Vec3::new(2.0, 0.0, 0.0), 1.0), Some(Vec3::X));
    }

    #[test]
    fn test_capsule_extents() {
        let capsule = CapsuleExtents {
            bottom: Vec3::new(0.0, 0.5, 0.0),
            top: Vec3::new(0.0, 1.5, 0.0),
            radius: 0.5,
        };
        assert_eq!(capsule.center(), Vec3::Y);
        assert!((capsule.half_segment() - 0.5).abs() < 1e-6);
        assert_eq!(capsule.translated(Vec3::X).center(), Vec3::new(1.0, 1.0, 0.0));
    }
}
