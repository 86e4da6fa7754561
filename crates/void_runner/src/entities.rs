//! Entity variants
//!
//! Every entity is one of four fixed component bundles. Components an
//! entity may or may not carry are `Option` fields; accessors on [`Entity`]
//! return `None` for variants that lack a component, so callers treat
//! "component not present" as an ordinary branch.

use void_engine::foundation::math::Vec3;

use crate::assets::ModelAsset;
use crate::components::{Lifetime, MaxRadius, Position, RenderInfo, Rotation, Velocity};

/// Kind tag of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The player's ship
    Player,
    /// An incoming asteroid
    Asteroid,
    /// A bullet fired by the player
    Bullet,
    /// One particle of an explosion burst
    ExplosionParticle,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Current position
    pub position: Position,
    /// Present only while the ship is moving towards a commanded target
    pub velocity: Option<Velocity>,
    /// Lean rotation
    pub rotation: Rotation,
    /// Model geometry
    pub render: RenderInfo,
    /// Bounding-sphere radius
    pub radius: MaxRadius,
    /// Last commanded target position
    pub target: Vec3,
}

impl Player {
    /// Create a ship at rest at `start`
    pub fn new(start: Vec3, model: &ModelAsset) -> Self {
        Self {
            position: Position(start),
            velocity: None,
            rotation: Rotation::new(),
            render: model.render.clone(),
            radius: model.radius,
            target: start,
        }
    }
}

/// An asteroid flying towards the camera
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    /// Current position
    pub position: Position,
    /// Constant velocity
    pub velocity: Velocity,
    /// Constant spin
    pub rotation: Rotation,
    /// Model geometry
    pub render: RenderInfo,
    /// Bounding-sphere radius
    pub radius: MaxRadius,
}

impl Asteroid {
    /// Create an asteroid
    pub fn new(position: Vec3, velocity: Velocity, spin: Vec3, model: &ModelAsset) -> Self {
        Self {
            position: Position(position),
            velocity,
            rotation: Rotation::spinning(spin),
            render: model.render.clone(),
            radius: model.radius,
        }
    }
}

/// A bullet travelling along -Z
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Current position
    pub position: Position,
    /// Constant velocity
    pub velocity: Velocity,
    /// Model geometry
    pub render: RenderInfo,
}

impl Bullet {
    /// Create a bullet
    pub fn new(position: Vec3, velocity: Velocity, model: &ModelAsset) -> Self {
        Self {
            position: Position(position),
            velocity,
            render: model.render.clone(),
        }
    }
}

/// Short-lived particle of an explosion burst
#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionParticle {
    /// Current position
    pub position: Position,
    /// Radial velocity
    pub velocity: Velocity,
    /// Tumble
    pub rotation: Rotation,
    /// Model geometry
    pub render: RenderInfo,
    /// Ticks until the particle disappears
    pub lifetime: Lifetime,
}

impl ExplosionParticle {
    /// Create a particle
    pub fn new(position: Vec3, velocity: Velocity, spin: Vec3, lifetime: Lifetime, model: &ModelAsset) -> Self {
        Self {
            position: Position(position),
            velocity,
            rotation: Rotation::spinning(spin),
            render: model.render.clone(),
            lifetime,
        }
    }
}

/// A live entity
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// The player's ship
    Player(Player),
    /// An asteroid
    Asteroid(Asteroid),
    /// A bullet
    Bullet(Bullet),
    /// An explosion particle
    ExplosionParticle(ExplosionParticle),
}

impl Entity {
    /// Kind tag
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Player(_) => EntityKind::Player,
            Self::Asteroid(_) => EntityKind::Asteroid,
            Self::Bullet(_) => EntityKind::Bullet,
            Self::ExplosionParticle(_) => EntityKind::ExplosionParticle,
        }
    }

    /// Current position
    pub fn position(&self) -> &Position {
        match self {
            Self::Player(player) => &player.position,
            Self::Asteroid(asteroid) => &asteroid.position,
            Self::Bullet(bullet) => &bullet.position,
            Self::ExplosionParticle(particle) => &particle.position,
        }
    }

    /// Mutable position
    pub fn position_mut(&mut self) -> &mut Position {
        match self {
            Self::Player(player) => &mut player.position,
            Self::Asteroid(asteroid) => &mut asteroid.position,
            Self::Bullet(bullet) => &mut bullet.position,
            Self::ExplosionParticle(particle) => &mut particle.position,
        }
    }

    /// Velocity, if the entity is currently moving
    pub fn velocity(&self) -> Option<&Velocity> {
        match self {
            Self::Player(player) => player.velocity.as_ref(),
            Self::Asteroid(asteroid) => Some(&asteroid.velocity),
            Self::Bullet(bullet) => Some(&bullet.velocity),
            Self::ExplosionParticle(particle) => Some(&particle.velocity),
        }
    }

    /// Rotation, for the variants that carry one
    pub fn rotation(&self) -> Option<&Rotation> {
        match self {
            Self::Player(player) => Some(&player.rotation),
            Self::Asteroid(asteroid) => Some(&asteroid.rotation),
            Self::Bullet(_) => None,
            Self::ExplosionParticle(particle) => Some(&particle.rotation),
        }
    }

    /// Model geometry
    pub fn render(&self) -> &RenderInfo {
        match self {
            Self::Player(player) => &player.render,
            Self::Asteroid(asteroid) => &asteroid.render,
            Self::Bullet(bullet) => &bullet.render,
            Self::ExplosionParticle(particle) => &particle.render,
        }
    }

    /// Bounding-sphere radius, for the variants that collide by model size
    pub fn radius(&self) -> Option<MaxRadius> {
        match self {
            Self::Player(player) => Some(player.radius),
            Self::Asteroid(asteroid) => Some(asteroid.radius),
            Self::Bullet(_) | Self::ExplosionParticle(_) => None,
        }
    }

    /// Check for the player variant
    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player(_))
    }

    /// Check for the asteroid variant
    pub fn is_asteroid(&self) -> bool {
        matches!(self, Self::Asteroid(_))
    }

    /// Check for the bullet variant
    pub fn is_bullet(&self) -> bool {
        matches!(self, Self::Bullet(_))
    }

    /// Player data, if this is the player
    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Mutable player data, if this is the player
    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }
}

impl From<Player> for Entity {
    fn from(player: Player) -> Self {
        Self::Player(player)
    }
}

impl From<Asteroid> for Entity {
    fn from(asteroid: Asteroid) -> Self {
        Self::Asteroid(asteroid)
    }
}

impl From<Bullet> for Entity {
    fn from(bullet: Bullet) -> Self {
        Self::Bullet(bullet)
    }
}

impl From<ExplosionParticle> for Entity {
    fn from(particle: ExplosionParticle) -> Self {
        Self::ExplosionParticle(particle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(radius: f32) -> ModelAsset {
        ModelAsset::new(Vec::new(), MaxRadius::new(radius))
    }

    #[test]
    fn test_player_starts_at_rest() {
        let player = Player::new(Vec3::new(0.0, -300.0, -1000.0), &model(80.0));

        assert!(player.velocity.is_none());
        assert!(!player.rotation.active);
        assert_eq!(player.target, player.position.0);

        let entity = Entity::from(player);
        assert!(entity.velocity().is_none());
        assert_eq!(entity.radius(), Some(MaxRadius::new(80.0)));
    }

    #[test]
    fn test_bullet_has_no_rotation_or_radius() {
        let bullet = Entity::from(Bullet::new(Vec3::zeros(), Velocity::new(0.0, 0.0, -100.0), &model(5.0)));

        assert_eq!(bullet.kind(), EntityKind::Bullet);
        assert!(bullet.rotation().is_none());
        assert!(bullet.radius().is_none());
        assert!(bullet.as_player().is_none());
    }

    #[test]
    fn test_asteroid_spin_is_rotation_future() {
        let spin = Vec3::new(0.01, -0.02, 0.0);
        let asteroid = Entity::from(Asteroid::new(Vec3::zeros(), Velocity::new(0.0, 0.0, 10.0), spin, &model(1.0)));

        assert_eq!(asteroid.rotation().map(|r| r.rot_future), Some(spin));
        assert!(asteroid.is_asteroid());
    }
}
