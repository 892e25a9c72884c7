//! Contract with whatever owns damageable entities
//!
//! The controller only reports which collider a dash struck. Removing the
//! entity, pooling it and respawning it later is the owner's business.

use rapier3d::prelude::ColliderHandle;

/// Receives dash hits. Fire-and-forget: the controller never waits on it.
pub trait EntityDespawner {
    /// A dash struck `target`
    fn notify_hit(&mut self, target: ColliderHandle);
}

impl<F: FnMut(ColliderHandle)> EntityDespawner for F {
    fn notify_hit(&mut self, target: ColliderHandle) {
        self(target)
    }
}

/// Buffers hits so the host can process them after the tick
#[derive(Debug, Default, Clone)]
pub struct DespawnQueue {
    pending: Vec<ColliderHandle>,
}

impl DespawnQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hits waiting to be processed
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no hits are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hits waiting to be processed, oldest first
    pub fn pending(&self) -> &[ColliderHandle] {
        &self.pending
    }

    /// Take every pending hit
    pub fn drain(&mut self) -> impl Iterator<Item = ColliderHandle> + '_ {
        self.pending.drain(..)
    }
}

impl EntityDespawner for DespawnQueue {
    fn notify_hit(&mut self, target: ColliderHandle) {
        self.pending.push(target);
    }
}
