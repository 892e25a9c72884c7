//! Scripted physics world for movement tests
//!
//! Geometry is analytic: one-sided planes for floors and walls, spheres for
//! damageable targets. Planes block moves, targets only answer queries.

use glam::Vec3;
use kinetic_physics::{CapsuleExtents, LayerMask, MoveConstraints, PhysicsQuery, QueryHit};
use rapier3d::prelude::ColliderHandle;

/// Shapes more than this far behind a plane never hit it
const BACKFACE_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone)]
struct Plane {
    handle: ColliderHandle,
    normal: Vec3,
    offset: f32,
    layers: LayerMask,
}

impl Plane {
    /// Gap between a sphere and the plane surface
    fn gap(&self, center: Vec3, radius: f32) -> f32 {
        center.dot(self.normal) - self.offset - radius
    }

    fn sweep(&self, center: Vec3, radius: f32, dir: Vec3, max: f32) -> Option<QueryHit> {
        let gap = self.gap(center, radius);
        if gap < -BACKFACE_TOLERANCE {
            return None;
        }
        let distance = if gap <= 0.0 {
            0.0
        } else {
            let approach = -dir.dot(self.normal);
            if approach <= 0.0 {
                return None;
            }
            gap / approach
        };
        (distance <= max).then(|| QueryHit {
            collider: self.handle,
            distance,
            point: center + dir * distance - self.normal * radius,
            normal: self.normal,
        })
    }
}

#[derive(Debug, Clone)]
struct Target {
    handle: ColliderHandle,
    center: Vec3,
    radius: f32,
    layers: LayerMask,
}

impl Target {
    fn sweep(&self, center: Vec3, radius: f32, dir: Vec3, max: f32) -> Option<QueryHit> {
        let reach = radius + self.radius;
        let m = center - self.center;
        let c = m.length_squared() - reach * reach;
        let distance = if c <= 0.0 {
            0.0
        } else {
            let b = m.dot(dir);
            let disc = b * b - c;
            if b > 0.0 || disc < 0.0 {
                return None;
            }
            -b - disc.sqrt()
        };
        if distance > max {
            return None;
        }
        let normal = (center + dir * distance - self.center).normalize_or(-dir);
        Some(QueryHit {
            collider: self.handle,
            distance,
            point: self.center + normal * self.radius,
            normal,
        })
    }
}

/// Analytic [`PhysicsQuery`] backend
#[derive(Debug, Default)]
pub(crate) struct ScriptedWorld {
    planes: Vec<Plane>,
    targets: Vec<Target>,
    next_id: u32,
    /// Displacements actually applied by `move_capsule`, in call order
    pub moves: Vec<Vec3>,
}

impl ScriptedWorld {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&mut self) -> ColliderHandle {
        self.next_id += 1;
        ColliderHandle::from_raw_parts(self.next_id, 0)
    }

    /// Add a one-sided plane through `point` facing `normal`
    pub fn add_plane(&mut self, point: Vec3, normal: Vec3, layers: LayerMask) -> ColliderHandle {
        let handle = self.next_handle();
        let normal = normal.normalize();
        self.planes.push(Plane {
            handle,
            normal,
            offset: point.dot(normal),
            layers,
        });
        handle
    }

    /// Flat floor at height `y`
    pub fn add_ground(&mut self, y: f32) -> ColliderHandle {
        self.add_plane(Vec3::new(0.0, y, 0.0), Vec3::Y, LayerMask::WORLD)
    }

    /// Add a damageable sphere
    pub fn add_target(&mut self, center: Vec3, radius: f32) -> ColliderHandle {
        let handle = self.next_handle();
        self.targets.push(Target {
            handle,
            center,
            radius,
            layers: LayerMask::DAMAGEABLE,
        });
        handle
    }

    /// Remove a plane or target
    pub fn remove(&mut self, handle: ColliderHandle) -> bool {
        let before = self.planes.len() + self.targets.len();
        self.planes.retain(|p| p.handle != handle);
        self.targets.retain(|t| t.handle != handle);
        before != self.planes.len() + self.targets.len()
    }

    fn closest(
        &self,
        layers: LayerMask,
        sweep: impl Fn(&Plane) -> Option<QueryHit>,
        sweep_target: impl Fn(&Target) -> Option<QueryHit>,
    ) -> Option<QueryHit> {
        let planes = self
            .planes
            .iter()
            .filter(|p| p.layers.intersects(layers))
            .filter_map(sweep);
        let targets = self
            .targets
            .iter()
            .filter(|t| t.layers.intersects(layers))
            .filter_map(sweep_target);
        planes
            .chain(targets)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

impl PhysicsQuery for ScriptedWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        self.sphere_sweep(origin, 0.0, direction, max_distance, layers)
    }

    fn sphere_sweep(
        &self,
        center: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        if !(max_distance > 0.0) {
            return None;
        }
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        self.closest(
            layers,
            |p| p.sweep(center, radius, dir, max_distance),
            |t| t.sweep(center, radius, dir, max_distance),
        )
    }

    fn capsule_sweep(
        &self,
        capsule: &CapsuleExtents,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<QueryHit> {
        // Sample the capsule segment with three spheres
        [capsule.bottom, capsule.center(), capsule.top]
            .into_iter()
            .filter_map(|c| self.sphere_sweep(c, capsule.radius, direction, max_distance, layers))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn move_capsule(
        &mut self,
        capsule: &CapsuleExtents,
        constraints: &MoveConstraints,
        displacement: Vec3,
        _dt: f32,
    ) -> Vec3 {
        let mut applied = displacement;
        for plane in &self.planes {
            let gap = plane
                .gap(capsule.bottom, capsule.radius)
                .min(plane.gap(capsule.top, capsule.radius));
            if gap < -BACKFACE_TOLERANCE {
                continue;
            }
            let inward = -applied.dot(plane.normal);
            if inward <= 0.0 {
                continue;
            }
            let allowed = (gap - constraints.contact_offset).max(0.0);
            if inward > allowed {
                applied += plane.normal * (inward - allowed);
            }
        }
        self.moves.push(applied);
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetic_core::math::project_on_plane;
    use kinetic_physics::CharacterBody;

    #[test]
    fn test_plane_sweep_and_backface() {
        let mut world = ScriptedWorld::new();
        world.add_ground(0.0);

        let hit = world
            .sphere_sweep(Vec3::new(0.0, 2.0, 0.0), 0.5, Vec3::NEG_Y, 5.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);

        // Far below the floor the plane is invisible
        assert!(world
            .sphere_sweep(Vec3::new(0.0, -3.0, 0.0), 0.5, Vec3::Y, 10.0, LayerMask::ALL)
            .is_none());
        assert!(world
            .raycast(Vec3::Y, Vec3::NEG_Y, 1.0, LayerMask::DAMAGEABLE)
            .is_none());
    }

    #[test]
    fn test_target_sweep() {
        let mut world = ScriptedWorld::new();
        let target = world.add_target(Vec3::new(0.0, 1.0, -2.0), 0.5);

        let hit = world
            .sphere_sweep(Vec3::Y, 0.75, Vec3::NEG_Z, 1.0, LayerMask::DAMAGEABLE)
            .unwrap();
        assert_eq!(hit.collider, target);
        assert!((hit.distance - 0.75).abs() < 1e-5);

        assert!(world.remove(target));
        assert!(world
            .sphere_sweep(Vec3::Y, 0.75, Vec3::NEG_Z, 1.0, LayerMask::ALL)
            .is_none());
    }

    #[test]
    fn test_move_stops_at_contact_offset() {
        let mut world = ScriptedWorld::new();
        world.add_ground(0.0);
        let mut body = CharacterBody::new();
        body.set_position(Vec3::new(0.0, 2.0, 0.0));

        body.move_by(&mut world, Vec3::new(1.0, -5.0, 0.0), 0.02);
        assert!((body.position().y - 1.01).abs() < 1e-4);
        assert!((body.position().x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_integrator_removes_normal_component() {
        let mut world = ScriptedWorld::new();
        world.add_plane(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.6, 0.8), LayerMask::WORLD);
        let mut body = CharacterBody::new();
        body.set_position(Vec3::new(0.0, 0.0, 0.5));

        let normal = Vec3::new(0.0, 0.6, 0.8);
        let mut velocity = Vec3::new(1.0, -2.0, -20.0);
        let hit = body.apply_velocity(&mut world, &mut velocity, 0.1);
        assert!(hit.is_some());
        assert!(velocity.dot(normal).abs() < 1e-4);
        assert!((velocity - project_on_plane(Vec3::new(1.0, -2.0, -20.0), normal)).length() < 1e-4);
    }
}
