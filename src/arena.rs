//! Test arena and scripted input for the headless run

use glam::{Vec2, Vec3};
use kinetic_game::{InputAction, InputState};
use kinetic_physics::{LayerMask, PhysicsWorld};
use rapier3d::prelude::ColliderHandle;

/// Where the player starts
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.01, 0.0);

/// Radius of the target balls
pub const TARGET_RADIUS: f32 = 0.5;

/// Distances down the run line at which targets stand
const TARGET_ROW: [f32; 3] = [-12.0, -40.0, -60.0];

/// A damageable ball standing in the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub handle: ColliderHandle,
    pub position: Vec3,
}

/// A destroyed target waiting to come back
#[derive(Debug, Clone, Copy)]
struct PendingRespawn {
    position: Vec3,
    due: f64,
}

/// Static level plus its damageable targets
pub struct Arena {
    pub world: PhysicsWorld,
    /// Targets currently standing
    pub targets: Vec<Target>,
    respawns: Vec<PendingRespawn>,
}

impl Arena {
    /// Flat floor, a long wall to the right of the run line and a row of targets
    pub fn build() -> Self {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);

        // Inner face at x = 3, running from z = -10 to z = -50
        world.create_static_box(Vec3::new(0.5, 4.0, 20.0), Vec3::new(3.5, 4.0, -30.0));

        let mut arena = Self {
            world,
            targets: Vec::new(),
            respawns: Vec::new(),
        };
        for z in TARGET_ROW {
            arena.spawn_target(Vec3::new(0.0, 1.0, z));
        }
        arena.world.update_queries();
        arena
    }

    fn spawn_target(&mut self, position: Vec3) {
        let handle =
            self.world
                .create_static_ball_on_layer(TARGET_RADIUS, position, LayerMask::DAMAGEABLE);
        self.targets.push(Target { handle, position });
    }

    /// Remove a struck target and schedule it to return at `respawn_at`.
    /// Returns false for handles that are not standing targets.
    pub fn destroy_target(&mut self, handle: ColliderHandle, respawn_at: f64) -> bool {
        let Some(index) = self.targets.iter().position(|t| t.handle == handle) else {
            return false;
        };
        let target = self.targets.swap_remove(index);
        self.world.remove_collider(target.handle);
        self.world.update_queries();

        self.respawns.push(PendingRespawn {
            position: target.position,
            due: respawn_at,
        });
        true
    }

    /// Re-create every destroyed target whose time has come.
    /// Returns the positions brought back.
    pub fn respawn_due(&mut self, now: f64) -> Vec<Vec3> {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.respawns.drain(..).partition(|pending| pending.due <= now);
        self.respawns = waiting;

        let positions: Vec<Vec3> = due.into_iter().map(|pending| pending.position).collect();
        for &position in &positions {
            self.spawn_target(position);
        }
        if !positions.is_empty() {
            self.world.update_queries();
        }
        positions
    }

    /// Number of destroyed targets still waiting to respawn
    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }
}

/// One scripted input change
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    Press(InputAction),
    Release(InputAction),
    Look(Vec2),
}

/// Input events keyed by tick, applied in order
pub struct Timeline {
    events: Vec<(u32, InputEvent)>,
    cursor: usize,
}

impl Timeline {
    pub fn new(mut events: Vec<(u32, InputEvent)>) -> Self {
        events.sort_by_key(|(tick, _)| *tick);
        Self { events, cursor: 0 }
    }

    /// Run forward and dash into the first target, hop, strafe onto the wall,
    /// wall run, jump off, then chase the far targets
    pub fn demo() -> Self {
        use InputAction::*;
        use InputEvent::*;

        Self::new(vec![
            (10, Press(MoveForward)),
            (40, Press(Dash)),
            (41, Release(Dash)),
            (70, Press(Jump)),
            (71, Release(Jump)),
            (110, Press(MoveRight)),
            (112, Press(Jump)),
            (113, Release(Jump)),
            (130, Release(MoveRight)),
            (220, Press(Jump)),
            (221, Release(Jump)),
            (260, Look(Vec2::new(-45.0, 0.0))),
            (300, Press(Sprint)),
            (340, Press(Dash)),
            (341, Release(Dash)),
            (400, Release(Sprint)),
            (420, Release(MoveForward)),
        ])
    }

    /// Apply every event scheduled for `tick`
    pub fn apply(&mut self, tick: u32, state: &mut InputState) {
        while let Some(&(at, event)) = self.events.get(self.cursor) {
            if at > tick {
                break;
            }
            match event {
                InputEvent::Press(action) => state.press(action),
                InputEvent::Release(action) => state.release(action),
                InputEvent::Look(delta) => state.add_look(delta),
            }
            self.cursor += 1;
        }
    }
}
