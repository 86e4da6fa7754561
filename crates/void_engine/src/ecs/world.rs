//! ECS World implementation

use super::EntityId;
use slotmap::SlotMap;

/// Arena owning every live entity of type `T`
///
/// Iteration follows slot order, which is stable between mutations but not
/// necessarily insertion order once slots are reused.
#[derive(Debug, Clone)]
pub struct World<T> {
    entities: SlotMap<EntityId, T>,
}

impl<T> World<T> {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Create a world with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Add an entity and return its handle
    pub fn spawn(&mut self, entity: T) -> EntityId {
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it if it was still alive
    pub fn despawn(&mut self, id: EntityId) -> Option<T> {
        self.entities.remove(id)
    }

    /// Check whether a handle refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Get an entity by handle
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entities.get(id)
    }

    /// Get a mutable entity by handle
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.entities.get_mut(id)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Snapshot of all live handles
    ///
    /// Sweeps that spawn or despawn while walking the world iterate over this
    /// snapshot and look each handle up again, skipping the ones that are gone.
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.keys().collect()
    }

    /// Snapshot of the handles whose entity matches a predicate
    pub fn ids_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, entity)| predicate(entity))
            .map(|(id, _)| id)
            .collect()
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.entities.iter()
    }

    /// Iterate mutably over all entities
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.entities.iter_mut()
    }

    /// Keep only the entities matching a predicate
    pub fn retain(&mut self, mut predicate: impl FnMut(EntityId, &mut T) -> bool) {
        self.entities.retain(|id, entity| predicate(id, entity));
    }
}

impl<T> Default for World<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_get() {
        let mut world = World::new();
        let id = world.spawn(7);

        assert_eq!(world.get(id), Some(&7));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut world = World::new();
        let first = world.spawn("first");
        world.despawn(first);
        let second = world.spawn("second");

        assert_ne!(first, second);
        assert!(world.get(first).is_none());
        assert_eq!(world.get(second), Some(&"second"));
    }

    #[test]
    fn test_despawn_during_snapshot_sweep() {
        let mut world = World::new();
        let ids: Vec<_> = (0..5).map(|n| world.spawn(n)).collect();

        for id in world.ids() {
            // Remove the next entity too, so later iterations hit stale handles
            if world.get(id).copied() == Some(1) {
                world.despawn(ids[2]);
            }
            if let Some(value) = world.get_mut(id) {
                *value *= 10;
            }
        }

        assert_eq!(world.len(), 4);
        assert!(world.get(ids[2]).is_none());
        assert_eq!(world.get(ids[4]), Some(&40));
    }

    #[test]
    fn test_ids_where_and_retain() {
        let mut world = World::new();
        for n in 0..6 {
            world.spawn(n);
        }

        assert_eq!(world.ids_where(|n| n % 2 == 0).len(), 3);

        world.retain(|_, n| *n > 2);
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        world.spawn(1);
        world.clear();
        assert!(world.is_empty());
    }
}
