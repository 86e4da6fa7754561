//! Entity construction with randomized initial state

use rand::Rng;
use void_engine::ecs::EntityId;
use void_engine::foundation::math::Vec3;

use super::Game;
use crate::components::{Lifetime, Velocity};
use crate::config::Span;
use crate::entities::{Asteroid, Bullet, Entity, ExplosionParticle, Player};

impl Game {
    /// Spawn a fresh player at the start position
    pub(super) fn spawn_player(&mut self) -> EntityId {
        let player = Player::new(self.config.player.start, &self.assets.player);
        self.insert(player)
    }

    /// Spawn one asteroid behind the play volume
    ///
    /// The position is uniform over the X/Y bounds and the spawn Z band; the
    /// asteroid flies towards a random point on the aim plane, which lies past
    /// the camera.
    pub fn spawn_asteroid(&mut self) -> EntityId {
        let world = &self.config.world;
        let x_span = Span::symmetric(world.bound_x);
        let y_span = Span::symmetric(world.bound_y);

        let position = Vec3::new(
            x_span.sample(&mut self.rng),
            y_span.sample(&mut self.rng),
            world.spawn_z.sample(&mut self.rng),
        );
        let aim = Vec3::new(x_span.sample(&mut self.rng), y_span.sample(&mut self.rng), world.aim_z);
        let speed = self.config.asteroid.speed.sample(&mut self.rng);
        let spin = random_vec(&self.config.asteroid.spin, &mut self.rng);
        let variant = self.rng.gen_range(0..self.assets.asteroids.len());

        let asteroid = Asteroid::new(
            position,
            Velocity::towards(position, aim, speed),
            spin,
            &self.assets.asteroids[variant],
        );
        let id = self.insert(asteroid);
        log::trace!("Spawned asteroid {:?} at {:?}", id, position);
        id
    }

    /// Spawn asteroids until the live count reaches the rounded difficulty
    pub(super) fn top_up_asteroids(&mut self) {
        // Saturating float-to-int cast; negative difficulty spawns nothing
        let target = self.difficulty.round() as usize;
        while self.asteroid_count < target {
            self.spawn_asteroid();
        }
    }

    /// Spawn a bullet travelling along -Z
    pub(super) fn spawn_bullet(&mut self, origin: Vec3) -> EntityId {
        let bullet = &self.config.bullet;
        let position = origin - Vec3::new(0.0, 0.0, bullet.muzzle_offset);
        let velocity = Velocity::new(0.0, 0.0, -bullet.speed);
        let bullet = Bullet::new(position, velocity, &self.assets.bullet);
        self.insert(bullet)
    }

    /// Spawn a radial burst of explosion particles
    pub(super) fn spawn_explosion(&mut self, center: Vec3) {
        let explosion = self.config.explosion.clone();
        for _ in 0..explosion.particles {
            let direction = random_vec(&Span::symmetric(1.0), &mut self.rng);
            let speed = explosion.speed.sample(&mut self.rng);
            let spin = random_vec(&explosion.spin, &mut self.rng);
            let particle = ExplosionParticle::new(
                center,
                Velocity::towards(Vec3::zeros(), direction, speed),
                spin,
                Lifetime::new(explosion.lifetime_ticks),
                &self.assets.particle,
            );
            self.world.spawn(Entity::from(particle));
        }
        log::debug!("Explosion of {} particles at {:?}", explosion.particles, center);
    }

    /// Remove an asteroid, bursting it into particles if it is still in front of the camera
    ///
    /// Returns false if the handle no longer refers to an asteroid.
    pub(super) fn destroy_asteroid(&mut self, id: EntityId) -> bool {
        let Some(position) = self
            .world
            .get(id)
            .filter(|entity| entity.is_asteroid())
            .map(|entity| entity.position().0)
        else {
            return false;
        };

        self.remove(id);
        if position.z < 0.0 {
            self.spawn_explosion(position);
        }
        log::trace!("Destroyed asteroid {:?} at z = {:.0}", id, position.z);
        true
    }
}

fn random_vec<R: Rng + ?Sized>(span: &Span, rng: &mut R) -> Vec3 {
    Vec3::new(span.sample(rng), span.sample(rng), span.sample(rng))
}
