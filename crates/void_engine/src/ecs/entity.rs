//! Entity implementation

slotmap::new_key_type! {
    /// Generational entity identifier
    ///
    /// A handle stays unique for the lifetime of its [`World`](super::World):
    /// once the entity is despawned, lookups through a stale handle return
    /// `None` even if the slot has been reused.
    pub struct EntityId;
}
