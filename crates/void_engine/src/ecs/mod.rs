//! Entity storage
//!
//! Entities are stored by value in a generational arena. Game code decides
//! what an entity is (typically a closed enum of variants); the arena only
//! hands out stable handles and tolerates removal while a sweep is running.

pub mod world;
pub mod entity;

pub use world::World;
pub use entity::EntityId;
