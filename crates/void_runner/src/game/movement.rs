//! Input handling and the per-tick simulation step

use void_engine::ecs::EntityId;
use void_engine::foundation::math::Vec3;

use super::Game;
use crate::components::Velocity;
use crate::config::PlayerConfig;
use crate::entities::{Entity, Player};
use crate::input::Direction;
use crate::state::GameState;

impl Game {
    /// Move the player's target one step in `direction`
    ///
    /// The step is taken from the last commanded target rather than the
    /// current position, so repeated commands accumulate. The ship's velocity
    /// is replaced by a fresh one pointing at the new target. Ignored during
    /// game over or when there is no player.
    pub fn move_player(&mut self, direction: Direction) {
        if self.state == GameState::GameOver {
            return;
        }
        let config = self.config.player.clone();
        let (bound_x, bound_y) = (self.config.world.bound_x, self.config.world.bound_y);
        let Some(player) = self.player_mut() else {
            return;
        };

        let position = player.position.0;
        let mut target = player.target;
        let step = config.move_step;
        let lean = config.lean_step;
        let impulse = match direction {
            Direction::Left => {
                target.x = if position.x <= -bound_x { -bound_x } else { target.x - step };
                Vec3::new(0.0, -lean, 0.0)
            }
            Direction::Right => {
                target.x = if position.x >= bound_x { bound_x } else { target.x + step };
                Vec3::new(0.0, lean, 0.0)
            }
            Direction::Up => {
                target.y = if position.y >= bound_y { bound_y } else { target.y + step };
                Vec3::new(lean, 0.0, 0.0)
            }
            Direction::Down => {
                target.y = if position.y <= -bound_y { -bound_y } else { target.y - step };
                Vec3::new(-lean, 0.0, 0.0)
            }
        };

        player.target = target;
        player.rotation.lean(impulse);
        player.velocity = Some(Velocity::towards(position, target, config.speed_factor));
    }

    /// Fire a bullet from the player, or restart when the game is over
    ///
    /// Returns the bullet's handle if one was fired.
    pub fn shoot(&mut self) -> Option<EntityId> {
        if self.state == GameState::GameOver {
            self.restart();
            return None;
        }
        let origin = self.player()?.position.0;
        Some(self.spawn_bullet(origin))
    }

    /// Advance the simulation by one tick
    ///
    /// Moves every entity by its velocity, then applies the despawn rules
    /// and the per-variant rotation and lifetime updates. Entities removed
    /// during the sweep are skipped when their turn comes.
    pub fn auto_move(&mut self) {
        let player_config = self.config.player.clone();
        let near_z = self.config.world.near_despawn_z;
        let far_z = self.config.world.far_despawn_z;

        for id in self.world.ids() {
            let Some(entity) = self.world.get_mut(id) else {
                continue;
            };
            if let Some(velocity) = entity.velocity().copied() {
                entity.position_mut().integrate(&velocity);
            }

            let z = entity.position().0.z;
            if entity.is_asteroid() && z > near_z {
                self.destroy_asteroid(id);
                self.spawn_asteroid();
                continue;
            }
            if z < far_z {
                self.remove(id);
                continue;
            }

            let expired = match entity {
                Entity::Player(player) => {
                    step_player(player, &player_config);
                    false
                }
                Entity::Asteroid(asteroid) => {
                    asteroid.rotation.spin();
                    false
                }
                Entity::ExplosionParticle(particle) => {
                    particle.rotation.spin();
                    particle.lifetime.tick()
                }
                Entity::Bullet(_) => false,
            };
            if expired {
                self.remove(id);
            }
        }
    }
}

/// Velocity decay and lean easing for one tick
fn step_player(player: &mut Player, config: &PlayerConfig) {
    if let Some(velocity) = player.velocity.as_mut() {
        velocity.damp(config.velocity_damping);
        if velocity.is_settled(config.activity_band) {
            player.rotation.active = false;
        }
    }

    if player.rotation.active {
        player.rotation.steer(config.rotation_limits);
    } else {
        player.rotation.settle(config.velocity_damping);
    }
    player.rotation.damp_future(config.rotation_damping);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ModelAsset;
    use crate::components::MaxRadius;
    use approx::assert_relative_eq;

    fn player() -> Player {
        Player::new(Vec3::new(0.0, -300.0, -1000.0), &ModelAsset::new(Vec::new(), MaxRadius::new(10.0)))
    }

    #[test]
    fn test_step_player_damps_velocity() {
        let mut player = player();
        player.velocity = Some(Velocity::new(2.0, 0.0, 0.0));
        player.rotation.active = true;

        step_player(&mut player, &PlayerConfig::default());

        assert_relative_eq!(player.velocity.unwrap().0.x, 1.98);
        assert!(player.rotation.active);
    }

    #[test]
    fn test_inactive_rotation_settles_towards_zero() {
        let mut player = player();
        player.rotation.rot = Vec3::new(0.1, 0.2, 0.0);

        for _ in 0..1000 {
            step_player(&mut player, &PlayerConfig::default());
        }

        assert!(player.rotation.rot.norm() < 1e-3);
    }
}
