//! Game-level tests driving the hooks directly

mod scenarios;
mod simulation;

use void_engine::foundation::math::Vec3;
use void_engine::render::{GeometryHandle, Material, MeshGroup, ProgramHandle};

use crate::assets::{GameAssets, ModelAsset};
use crate::components::{MaxRadius, Velocity};
use crate::config::GameConfig;
use crate::entities::Asteroid;
use crate::game::Game;

pub(super) const PLAYER_RADIUS: f32 = 80.0;
pub(super) const ASTEROID_RADIUS: f32 = 100.0;

pub(super) fn model(geometry: u64, radius: f32) -> ModelAsset {
    let material = Material::new()
        .with_diffuse(Vec3::new(0.6, 0.6, 0.6))
        .with_shininess(32.0);
    ModelAsset::new(
        vec![MeshGroup::new(GeometryHandle(geometry), 36, material)],
        MaxRadius::new(radius),
    )
}

pub(super) fn assets() -> GameAssets {
    GameAssets::new(
        ProgramHandle(1),
        model(1, PLAYER_RADIUS),
        vec![model(2, ASTEROID_RADIUS), model(3, ASTEROID_RADIUS)],
        model(4, 5.0),
        model(5, 2.0),
    )
    .unwrap()
}

/// Config whose initial difficulty spawns no asteroids
pub(super) fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.difficulty.initial = 0.0;
    config
}

pub(super) fn game_with(config: GameConfig) -> Game {
    Game::with_seed(config, assets(), 42).unwrap()
}

/// A game holding only the player
pub(super) fn quiet_game() -> Game {
    game_with(quiet_config())
}

pub(super) fn asteroid_at(position: Vec3, velocity: Vec3) -> Asteroid {
    Asteroid::new(
        position,
        Velocity(velocity),
        Vec3::new(0.01, 0.0, -0.01),
        &model(2, ASTEROID_RADIUS),
    )
}

#[test]
fn test_new_game_spawns_player_and_initial_batch() {
    let game = game_with(GameConfig::default());
    let stats = game.stats();

    assert_eq!(stats.players, 1);
    assert_eq!(stats.asteroids, 5);
    assert_eq!(game.asteroid_count(), 5);
    assert_eq!(game.score(), 0);
    assert!(!game.is_game_over());
}

#[test]
fn test_initial_asteroids_spawn_inside_the_band() {
    let game = game_with(GameConfig::default());
    let world = &game.config().world;

    for (_, entity) in game.world().iter().filter(|(_, entity)| entity.is_asteroid()) {
        let position = entity.position().0;
        assert!(world.spawn_z.contains(position.z));
        assert!(position.x.abs() <= world.bound_x);
        assert!(position.y.abs() <= world.bound_y);
        // Flying towards the camera
        assert!(entity.velocity().unwrap().0.z > 0.0);
    }
}

#[test]
fn test_same_seed_same_field() {
    let first = game_with(GameConfig::default());
    let second = game_with(GameConfig::default());

    let positions = |game: &Game| -> Vec<Vec3> {
        let mut positions: Vec<Vec3> = game.world().iter().map(|(_, e)| e.position().0).collect();
        positions.sort_by(|a, b| a.z.total_cmp(&b.z));
        positions
    };
    assert_eq!(positions(&first), positions(&second));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = GameConfig::default();
    config.schedule.draw_ms = 0;
    assert!(Game::with_seed(config, assets(), 1).is_err());
}

#[test]
fn test_missing_asteroid_models_is_rejected() {
    let mut assets = assets();
    assets.asteroids.clear();
    assert!(matches!(
        Game::with_seed(GameConfig::default(), assets, 1),
        Err(crate::GameError::MissingAsteroidModels)
    ));
}

#[test]
fn test_insert_refuses_second_player() {
    let mut game = quiet_game();
    let existing = game.player_id().unwrap();
    let second = crate::entities::Player::new(Vec3::zeros(), &model(1, PLAYER_RADIUS));

    assert_eq!(game.insert(second), existing);
    assert_eq!(game.stats().players, 1);
}

#[test]
fn test_asteroid_count_follows_insert_and_remove() {
    let mut game = quiet_game();
    let id = game.insert(asteroid_at(Vec3::new(0.0, 0.0, -3000.0), Vec3::zeros()));
    assert_eq!(game.asteroid_count(), 1);

    assert!(game.remove(id).is_some());
    assert!(game.remove(id).is_none());
    assert_eq!(game.asteroid_count(), 0);
}
