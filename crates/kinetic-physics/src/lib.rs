//! Kinetic Physics - Physics queries using rapier3d
//!
//! Provides the query facade the movement controller is written against, a
//! rapier3d-backed static world implementing it, and the capsule body that
//! integrates velocity through it.

mod body;
mod query;

pub use body::{BodyConfig, BodyConfigError, CharacterBody};
pub use query::{CapsuleExtents, LayerMask, MoveConstraints, PhysicsQuery, QueryHit};

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::parry::query::ShapeCastOptions;
use rapier3d::prelude::*;

use query::query_direction;

/// Static collision world the controller is swept against
pub struct PhysicsWorld {
    /// Rigid body storage (colliders in this world are unparented)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,
    /// Island manager, needed for collider removal
    island_manager: IslandManager,
    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            island_manager: IslandManager::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Rebuild the query acceleration structure after colliders changed
    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Remove a collider
    pub fn remove_collider(&mut self, handle: ColliderHandle) -> bool {
        self.collider_set
            .remove(handle, &mut self.island_manager, &mut self.rigid_body_set, true)
            .is_some()
    }

    /// Get a collider by handle
    pub fn get_collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Create a ground plane collider on the world layer
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .collision_groups(layer_groups(LayerMask::WORLD))
            .friction(0.7)
            .restitution(0.0)
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static box collider on the world layer
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        self.create_static_box_on_layer(half_extents, position, LayerMask::WORLD)
    }

    /// Create a static box collider on the given layer(s)
    pub fn create_static_box_on_layer(
        &mut self,
        half_extents: Vec3,
        position: Vec3,
        layer: LayerMask,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(to_vector(position))
            .collision_groups(layer_groups(layer))
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }

    /// Create a static sphere collider on the given layer(s)
    pub fn create_static_ball_on_layer(
        &mut self,
        radius: f32,
        position: Vec3,
        layer: LayerMask,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::ball(radius)
            .translation(to_vector(position))
            .collision_groups(layer_groups(layer))
            .build();
        self.add_static_collider(collider)
    }

    fn cast_shape(
        &self,
        shape: &dyn Shape,
        center: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        let dir = query_direction(direction, max_distance)?;
        let shape_pos = Isometry::translation(center.x, center.y, center.z);

        self.query_pipeline
            .cast_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &to_vector(dir),
                shape,
                ShapeCastOptions::with_max_time_of_impact(max_distance),
                query_filter(layers),
            )
            .map(|(handle, hit)| QueryHit {
                collider: handle,
                distance: hit.time_of_impact,
                point: Vec3::new(hit.witness1.x, hit.witness1.y, hit.witness1.z),
                normal: from_vector(&hit.normal1).normalize_or_zero(),
            })
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsQuery for PhysicsWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        let dir = query_direction(direction, max_distance)?;
        let ray = Ray::new(point![origin.x, origin.y, origin.z], to_vector(dir));

        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_distance,
                true,
                query_filter(layers),
            )
            .map(|(handle, intersection)| QueryHit {
                collider: handle,
                distance: intersection.time_of_impact,
                point: origin + dir * intersection.time_of_impact,
                normal: from_vector(&intersection.normal).normalize_or_zero(),
            })
    }

    fn sphere_sweep(
        &self,
        center: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        if radius <= 0.0 {
            return self.raycast(center, direction, max_distance, layers);
        }
        self.cast_shape(&Ball::new(radius), center, direction, max_distance, layers)
    }

    fn capsule_sweep(
        &self,
        capsule: &CapsuleExtents,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        let center = capsule.center();
        let shape = Capsule::new(
            to_point(capsule.bottom - center),
            to_point(capsule.top - center),
            capsule.radius,
        );
        self.cast_shape(&shape, center, direction, max_distance, layers)
    }

    fn move_capsule(
        &mut self,
        capsule: &CapsuleExtents,
        constraints: &MoveConstraints,
        displacement: Vec3,
        dt: f32,
    ) -> Vec3 {
        if displacement.length_squared() <= f32::EPSILON * f32::EPSILON {
            return Vec3::ZERO;
        }

        let mut controller = KinematicCharacterController::default();
        controller.offset = CharacterLength::Absolute(constraints.contact_offset);
        controller.max_slope_climb_angle = constraints.slope_limit.to_radians();
        controller.min_slope_slide_angle = constraints.slope_limit.to_radians();
        controller.snap_to_ground = None;
        controller.autostep = (constraints.step_offset > 0.0).then(|| CharacterAutostep {
            max_height: CharacterLength::Absolute(constraints.step_offset),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: false,
        });

        let center = capsule.center();
        let shape = Capsule::new(
            to_point(capsule.bottom - center),
            to_point(capsule.top - center),
            capsule.radius,
        );
        let position = Isometry::translation(center.x, center.y, center.z);

        let movement = controller.move_shape(
            dt,
            &self.rigid_body_set,
            &self.collider_set,
            &self.query_pipeline,
            &shape,
            &position,
            to_vector(displacement),
            QueryFilter::default().exclude_sensors(),
            |_| {},
        );

        from_vector(&movement.translation)
    }
}

/// Collision groups for a collider living on `layer`
pub fn layer_groups(layer: LayerMask) -> InteractionGroups {
    InteractionGroups::new(Group::from_bits_truncate(layer.0), Group::ALL)
}

fn query_filter(layers: LayerMask) -> QueryFilter<'static> {
    QueryFilter::default()
        .exclude_sensors()
        .groups(InteractionGroups::new(
            Group::ALL,
            Group::from_bits_truncate(layers.0),
        ))
}

fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

fn to_point(v: Vec3) -> Point<Real> {
    point![v.x, v.y, v.z]
}

fn from_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_ground() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        world.update_queries();
        world
    }

    #[test]
    fn test_ground_creation() {
        let mut world = PhysicsWorld::new();
        let ground = world.create_ground(0.0);
        assert!(world.get_collider(ground).is_some());
        assert!(world.remove_collider(ground));
        assert!(world.get_collider(ground).is_none());
    }

    #[test]
    fn test_raycast() {
        let world = world_with_ground();

        let hit = world
            .raycast(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, 100.0, LayerMask::ALL)
            .expect("ray should hit the ground");
        assert!((hit.distance - 10.0).abs() < 1e-3);
        assert!((hit.normal - Vec3::Y).length() < 1e-3);
        assert!(hit.point.y.abs() < 1e-3);
    }

    #[test]
    fn test_raycast_respects_layers() {
        let world = world_with_ground();
        let hit = world.raycast(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::NEG_Y,
            100.0,
            LayerMask::DAMAGEABLE,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_degenerate_queries_miss() {
        let world = world_with_ground();
        assert!(world
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 10.0, LayerMask::ALL)
            .is_none());
        assert!(world
            .sphere_sweep(Vec3::new(0.0, 1.0, 0.0), 0.5, Vec3::NEG_Y, 0.0, LayerMask::ALL)
            .is_none());
    }

    #[test]
    fn test_sphere_sweep_down() {
        let world = world_with_ground();
        let hit = world
            .sphere_sweep(Vec3::new(0.0, 2.0, 0.0), 0.5, Vec3::NEG_Y, 5.0, LayerMask::ALL)
            .expect("sphere should land on the ground");
        assert!((hit.distance - 1.5).abs() < 1e-2);
        assert!(hit.normal.y > 0.99);
    }

    #[test]
    fn test_capsule_sweep_hits_target_layer_only() {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        let target = world.create_static_box_on_layer(
            Vec3::splat(0.5),
            Vec3::new(0.0, 1.0, -5.0),
            LayerMask::DAMAGEABLE,
        );
        world.update_queries();

        let capsule = CapsuleExtents {
            bottom: Vec3::new(0.0, 0.6, 0.0),
            top: Vec3::new(0.0, 1.6, 0.0),
            radius: 0.5,
        };
        let hit = world
            .capsule_sweep(&capsule, Vec3::NEG_Z, 10.0, LayerMask::DAMAGEABLE)
            .expect("capsule should reach the target");
        assert_eq!(hit.collider, target);
        assert!((hit.distance - 4.0).abs() < 1e-2);

        assert!(world
            .capsule_sweep(&capsule, Vec3::NEG_Z, 3.0, LayerMask::DAMAGEABLE)
            .is_none());
    }

    #[test]
    fn test_move_capsule_stops_on_ground() {
        let mut world = world_with_ground();
        let capsule = CapsuleExtents {
            bottom: Vec3::new(0.0, 1.5, 0.0),
            top: Vec3::new(0.0, 2.5, 0.0),
            radius: 0.5,
        };
        let constraints = MoveConstraints {
            contact_offset: 0.01,
            slope_limit: 45.0,
            step_offset: 0.0,
        };
        let moved = world.move_capsule(&capsule, &constraints, Vec3::new(0.0, -5.0, 0.0), 1.0 / 60.0);
        assert!(moved.y < -0.9);
        assert!(moved.y > -1.05);
    }
}
