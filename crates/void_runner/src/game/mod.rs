//! # Game
//!
//! The simulation core. [`Game`] is the sole owner of the entity store; the
//! scheduler, input handler and UI reach it only through the methods here.
//!
//! Hooks are split across submodules:
//!
//! - `spawn`: asteroid, bullet and explosion construction
//! - `movement`: input handling and the per-tick simulation step
//! - `collision`: collision tests, scoring and the difficulty ramp
//! - `render`: the frame's draw submission

mod collision;
mod movement;
mod render;
mod spawn;

#[cfg(test)]
mod tests;

pub use collision::BoundingSphere;

use rand::rngs::StdRng;
use rand::SeedableRng;
use void_engine::ecs::{EntityId, World};
use void_engine::render::{Camera, PointLight, RenderBackend, RenderError};

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::entities::{Entity, EntityKind, Player};
use crate::schedule::Hook;
use crate::state::GameState;
use crate::GameError;

/// Entity counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Player entities (0 or 1)
    pub players: usize,
    /// Live asteroids
    pub asteroids: usize,
    /// Live bullets
    pub bullets: usize,
    /// Live explosion particles
    pub particles: usize,
}

impl GameStats {
    /// Total entity count
    pub fn total(&self) -> usize {
        self.players + self.asteroids + self.bullets + self.particles
    }
}

/// The running game
pub struct Game {
    world: World<Entity>,
    rng: StdRng,
    score: u32,
    difficulty: f32,
    asteroid_count: usize,
    state: GameState,
    config: GameConfig,
    assets: GameAssets,
    camera: Camera,
    light: PointLight,
}

impl Game {
    /// Start a game seeded from system entropy
    pub fn new(config: GameConfig, assets: GameAssets) -> Result<Self, GameError> {
        Self::with_rng(config, assets, StdRng::from_entropy())
    }

    /// Start a reproducible game
    pub fn with_seed(config: GameConfig, assets: GameAssets, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, assets, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, assets: GameAssets, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        if assets.asteroids.is_empty() {
            return Err(GameError::MissingAsteroidModels);
        }

        let render = &config.render;
        let camera = Camera::new(
            render.eye,
            render.center,
            render.up,
            render.fov_y_degrees,
            render.near,
            render.far,
        );
        let light = PointLight::new(render.light_position, render.light_color);

        let mut game = Self {
            world: World::new(),
            rng,
            score: 0,
            difficulty: config.difficulty.initial,
            asteroid_count: 0,
            state: GameState::Playing,
            config,
            assets,
            camera,
            light,
        };
        game.spawn_player();
        game.top_up_asteroids();

        log::info!(
            "Game started with difficulty {} and {} asteroids",
            game.difficulty,
            game.asteroid_count
        );
        Ok(game)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Overwrite the score (UI reset)
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Current difficulty, the target number of live asteroids
    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Overwrite the difficulty (UI reset)
    pub fn set_difficulty(&mut self, difficulty: f32) {
        self.difficulty = difficulty;
    }

    /// Number of asteroids the spawner counts as live
    pub fn asteroid_count(&self) -> usize {
        self.asteroid_count
    }

    /// Current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check for game over
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fixed camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Read-only view of the entity store
    pub fn world(&self) -> &World<Entity> {
        &self.world
    }

    /// Look up one entity
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.world.get(id)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.world.len()
    }

    /// Handle of the player, if present
    pub fn player_id(&self) -> Option<EntityId> {
        self.world
            .iter()
            .find_map(|(id, entity)| entity.is_player().then_some(id))
    }

    /// The player, if present
    pub fn player(&self) -> Option<&Player> {
        self.world.iter().find_map(|(_, entity)| entity.as_player())
    }

    fn player_mut(&mut self) -> Option<&mut Player> {
        self.world.iter_mut().find_map(|(_, entity)| entity.as_player_mut())
    }

    /// Entity counts per kind
    pub fn stats(&self) -> GameStats {
        let mut stats = GameStats::default();
        for (_, entity) in self.world.iter() {
            match entity.kind() {
                EntityKind::Player => stats.players += 1,
                EntityKind::Asteroid => stats.asteroids += 1,
                EntityKind::Bullet => stats.bullets += 1,
                EntityKind::ExplosionParticle => stats.particles += 1,
            }
        }
        stats
    }

    /// Add an entity directly, keeping the live-asteroid count in step
    ///
    /// Adding a second player is refused; the existing player's handle is
    /// returned instead.
    pub fn insert(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        if entity.is_player() {
            if let Some(existing) = self.player_id() {
                log::warn!("Refusing to add a second player");
                return existing;
            }
        }
        if entity.is_asteroid() {
            self.asteroid_count += 1;
        }
        self.world.spawn(entity)
    }

    /// Remove an entity, keeping the live-asteroid count in step
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.world.despawn(id)?;
        if removed.is_asteroid() {
            self.asteroid_count = self.asteroid_count.saturating_sub(1);
        }
        Some(removed)
    }

    /// Leave game over: reset score and difficulty and resume play
    ///
    /// Does nothing while playing. Asteroids come back through
    /// [`Game::change_difficulty`].
    pub fn restart(&mut self) {
        if self.state != GameState::GameOver {
            return;
        }
        self.score = 0;
        self.difficulty = self.config.difficulty.initial;
        self.state = GameState::Playing;
        log::info!("Game restarted");
    }

    /// Run one scheduled hook
    pub fn run_hook(&mut self, hook: Hook, backend: &mut dyn RenderBackend) -> Result<(), RenderError> {
        match hook {
            Hook::AutoMove => self.auto_move(),
            Hook::Collision => self.check_collisions(),
            Hook::Difficulty => self.change_difficulty(),
            Hook::Draw => return self.draw(backend),
        }
        Ok(())
    }

    fn enter_game_over(&mut self) {
        log::info!("Game over with score {}", self.score);
        self.state = GameState::GameOver;
        self.world.clear();
        self.asteroid_count = 0;
        self.difficulty = self.config.difficulty.initial;
        self.spawn_player();
    }
}
