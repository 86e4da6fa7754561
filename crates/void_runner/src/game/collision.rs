//! Collision tests, scoring and the difficulty ramp
//!
//! Every test is a pairwise bounding-sphere check. Two spheres touch when the
//! distance between their centers minus the sum of their radii is at most a
//! small epsilon.

use void_engine::foundation::math::Vec3;

use super::Game;
use crate::entities::Entity;
use crate::state::GameState;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center in world space
    pub center: Vec3,
    /// Radius
    pub radius: f32,
}

impl BoundingSphere {
    /// Create a bounding sphere
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance between the surfaces; negative when the spheres overlap
    pub fn gap(&self, other: &Self) -> f32 {
        (self.center - other.center).magnitude() - (self.radius + other.radius)
    }

    /// Check whether the spheres touch within `epsilon`
    pub fn touches(&self, other: &Self, epsilon: f32) -> bool {
        self.gap(other) <= epsilon
    }
}

fn asteroid_sphere(entity: &Entity) -> Option<BoundingSphere> {
    match entity {
        Entity::Asteroid(asteroid) => Some(BoundingSphere::new(asteroid.position.0, asteroid.radius.get())),
        _ => None,
    }
}

impl Game {
    /// Test the player and every bullet against every asteroid
    ///
    /// A player hit ends the game. A bullet hit destroys the asteroid and the
    /// bullet, spawns a replacement asteroid and scores one point.
    pub fn check_collisions(&mut self) {
        let epsilon = self.config.collision.epsilon;

        let ship = self
            .player()
            .map(|player| BoundingSphere::new(player.position.0, player.radius.get()));
        if let Some(ship) = ship {
            let hit = self
                .world
                .iter()
                .filter_map(|(_, entity)| asteroid_sphere(entity))
                .any(|asteroid| ship.touches(&asteroid, epsilon));
            if hit {
                self.enter_game_over();
                return;
            }
        }

        let bullet_radius = self.config.bullet.radius;
        for bullet_id in self.world.ids_where(Entity::is_bullet) {
            let Some(bullet) = self
                .world
                .get(bullet_id)
                .map(|entity| BoundingSphere::new(entity.position().0, bullet_radius))
            else {
                continue;
            };

            let hit = self.world.iter().find_map(|(id, entity)| {
                asteroid_sphere(entity)
                    .filter(|asteroid| bullet.touches(asteroid, epsilon))
                    .map(|_| id)
            });
            if let Some(asteroid_id) = hit {
                self.destroy_asteroid(asteroid_id);
                self.world.despawn(bullet_id);
                self.spawn_asteroid();
                self.score += 1;
                log::debug!("Asteroid hit, score {}", self.score);
            }
        }
    }

    /// Ramp difficulty with the score and top up the asteroid field
    ///
    /// Does nothing during game over.
    pub fn change_difficulty(&mut self) {
        if self.state == GameState::GameOver {
            return;
        }
        let ramp = &self.config.difficulty;
        if self.score > ramp.score_threshold {
            self.difficulty += self.score as f32 / ramp.divisor;
            log::debug!("Difficulty raised to {:.1}", self.difficulty);
        }
        self.top_up_asteroids();
    }
}
