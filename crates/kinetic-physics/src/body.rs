//! Capsule body for the first-person controller
//!
//! The body is a query-only proxy: it owns no collider in the world, it only
//! sweeps its capsule and asks the world to resolve discrete moves.

use glam::Vec3;
use kinetic_core::math::{angle_degrees, project_on_plane};
use kinetic_core::Transform;
use serde::{Deserialize, Serialize};

use crate::query::{CapsuleExtents, LayerMask, MoveConstraints, PhysicsQuery, QueryHit};

/// Capsule geometry and contact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Capsule radius (default: 0.5m)
    pub radius: f32,
    /// Total capsule height including both hemispheres (default: 2.0m)
    pub height: f32,
    /// Distance within which a surface counts as touching (default: 0.08m)
    pub skin_width: f32,
    /// Gap the engine keeps between the capsule and geometry (default: 0.01m)
    pub contact_offset: f32,
    /// Maximum walkable slope angle in degrees (default: 45)
    pub slope_limit: f32,
    /// Step height for climbing ledges (default: 0.3m)
    pub step_offset: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 2.0,
            skin_width: 0.08,
            contact_offset: 0.01,
            slope_limit: 45.0,
            step_offset: 0.3,
        }
    }
}

/// Invalid body configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BodyConfigError {
    #[error("capsule radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("capsule height {height} must be at least twice the radius {radius}")]
    HeightTooSmall { height: f32, radius: f32 },

    #[error("skin width must be non-negative, got {0}")]
    InvalidSkinWidth(f32),

    #[error("contact offset {offset} must be in [0, radius {radius})")]
    InvalidContactOffset { offset: f32, radius: f32 },

    #[error("slope limit must be within (0, 90] degrees, got {0}")]
    InvalidSlopeLimit(f32),

    #[error("step offset must be non-negative, got {0}")]
    InvalidStepOffset(f32),
}

impl BodyConfig {
    /// Check the configuration before a body is built from it
    pub fn validate(&self) -> Result<(), BodyConfigError> {
        if !(self.radius > 0.0) {
            return Err(BodyConfigError::InvalidRadius(self.radius));
        }
        if !(self.height >= 2.0 * self.radius) {
            return Err(BodyConfigError::HeightTooSmall {
                height: self.height,
                radius: self.radius,
            });
        }
        if !(self.skin_width >= 0.0) {
            return Err(BodyConfigError::InvalidSkinWidth(self.skin_width));
        }
        if !(self.contact_offset >= 0.0 && self.contact_offset < self.radius) {
            return Err(BodyConfigError::InvalidContactOffset {
                offset: self.contact_offset,
                radius: self.radius,
            });
        }
        if !(self.slope_limit > 0.0 && self.slope_limit <= 90.0) {
            return Err(BodyConfigError::InvalidSlopeLimit(self.slope_limit));
        }
        if !(self.step_offset >= 0.0) {
            return Err(BodyConfigError::InvalidStepOffset(self.step_offset));
        }
        Ok(())
    }

    /// Move resolution settings derived from this configuration
    pub fn constraints(&self) -> MoveConstraints {
        MoveConstraints {
            contact_offset: self.contact_offset,
            slope_limit: self.slope_limit,
            step_offset: self.step_offset,
        }
    }
}

/// Capsule proxy for the player: pose plus collision geometry
#[derive(Debug, Clone)]
pub struct CharacterBody {
    /// Configuration
    pub config: BodyConfig,
    /// Pose; `position` is the capsule center
    pub transform: Transform,
}

impl CharacterBody {
    /// Create a body with default config at the origin
    pub fn new() -> Self {
        Self::with_config(BodyConfig::default())
    }

    /// Create a body with custom config at the origin
    pub fn with_config(config: BodyConfig) -> Self {
        Self {
            config,
            transform: Transform::default(),
        }
    }

    /// Current capsule center
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Set the position directly (teleport)
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Body up axis
    pub fn up(&self) -> Vec3 {
        self.transform.up()
    }

    /// Body forward axis
    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    /// Transform a body-local direction into world space
    pub fn transform_vector(&self, local: Vec3) -> Vec3 {
        self.transform.transform_vector(local)
    }

    /// Capsule radius
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    fn hemisphere_offset(&self) -> f32 {
        (self.config.height * 0.5 - self.config.radius).max(0.0)
    }

    /// Center of the bottom hemisphere
    pub fn bottom_hemisphere(&self) -> Vec3 {
        self.transform.position - self.up() * self.hemisphere_offset()
    }

    /// Center of the top hemisphere
    pub fn top_hemisphere(&self) -> Vec3 {
        self.transform.position + self.up() * self.hemisphere_offset()
    }

    /// Current capsule in world space
    pub fn capsule(&self) -> CapsuleExtents {
        CapsuleExtents {
            bottom: self.bottom_hemisphere(),
            top: self.top_hemisphere(),
            radius: self.config.radius,
        }
    }

    /// Get the eye position (near the top of the capsule)
    pub fn eye_position(&self) -> Vec3 {
        self.transform.position + self.up() * (self.config.height * 0.5 - 0.1)
    }

    /// Whether a surface with this normal is shallow enough to stand on
    pub fn is_normal_under_slope_limit(&self, normal: Vec3) -> bool {
        angle_degrees(self.up(), normal) <= self.config.slope_limit
    }

    /// Re-orient a direction so that it runs along the slope with `slope_normal`
    pub fn direction_reoriented_on_slope(&self, direction: Vec3, slope_normal: Vec3) -> Vec3 {
        let direction_right = direction.cross(self.up());
        slope_normal.cross(direction_right).normalize_or_zero()
    }

    /// Move the body through the world, returning the applied displacement
    pub fn move_by<W: PhysicsQuery + ?Sized>(
        &mut self,
        world: &mut W,
        displacement: Vec3,
        dt: f32,
    ) -> Vec3 {
        let applied = world.move_capsule(
            &self.capsule(),
            &self.config.constraints(),
            displacement,
            dt,
        );
        self.transform.translate(applied);
        applied
    }

    /// Apply `velocity` for one tick.
    ///
    /// After moving, the capsule is swept from its pre-move position along the
    /// velocity; a hit projects `velocity` onto the hit plane so the next tick
    /// slides instead of pushing into the surface. The current tick's move is
    /// not corrected.
    pub fn apply_velocity<W: PhysicsQuery + ?Sized>(
        &mut self,
        world: &mut W,
        velocity: &mut Vec3,
        dt: f32,
    ) -> Option<QueryHit> {
        let capsule_before_move = self.capsule();
        self.move_by(world, *velocity * dt, dt);

        let hit = world.capsule_sweep(
            &capsule_before_move,
            *velocity,
            velocity.length() * dt,
            LayerMask::ALL,
        )?;
        *velocity = project_on_plane(*velocity, hit.normal);
        Some(hit)
    }
}

impl Default for CharacterBody {
    fn default() -> Self {
        Self::new()
    }
}
