//! End-to-end scenarios run through the public hooks

use std::time::Duration;

use void_engine::foundation::math::Vec3;
use void_engine::render::RecordingBackend;

use super::{asteroid_at, game_with, quiet_game};
use crate::components::Velocity;
use crate::config::GameConfig;
use crate::game::Game;
use crate::input::Direction;
use crate::schedule::HookSchedule;

#[test]
fn test_asteroid_passing_the_camera_is_replaced() {
    let mut game = quiet_game();
    let start = Vec3::new(0.0, 0.0, -5500.0);
    let velocity = Velocity::towards(start, Vec3::new(300.0, -200.0, 0.0), 15.0);
    let id = game.insert(asteroid_at(start, velocity.0));

    let mut ticks = 0;
    while game.entity(id).is_some() {
        game.auto_move();
        ticks += 1;
        assert!(ticks < 1000, "asteroid never crossed the near threshold");
    }

    let stats = game.stats();
    assert_eq!(stats.asteroids, 1);
    assert_eq!(game.asteroid_count(), 1);
    assert_eq!(stats.particles, 0);

    let replacement = game
        .world()
        .iter()
        .find(|(_, entity)| entity.is_asteroid())
        .map(|(_, entity)| entity.position().0)
        .unwrap();
    assert!(game.config().world.spawn_z.contains(replacement.z));
}

#[test]
fn test_asteroid_on_the_ship_ends_the_game() {
    let mut game = game_with(GameConfig::default());
    game.insert(asteroid_at(Vec3::new(0.0, -300.0, -1000.0), Vec3::zeros()));

    game.check_collisions();

    assert!(game.is_game_over());
    assert_eq!(game.entity_count(), 1);
    assert!(game.player().is_some());
}

#[test]
fn test_shoot_adds_one_bullet_ahead_of_the_ship() {
    let mut game = game_with(GameConfig::default());
    let before = game.entity_count();
    let player_z = game.player().unwrap().position.0.z;

    let bullet = game.shoot().unwrap();

    assert_eq!(game.entity_count(), before + 1);
    let entity = game.entity(bullet).unwrap();
    assert!(entity.is_bullet());
    assert_eq!(entity.position().0.z, player_z - 50.0);
}

#[test]
fn test_scheduled_session() {
    let mut game = Game::with_seed(GameConfig::default(), super::assets(), 7).unwrap();
    let mut schedule = HookSchedule::new(&game.config().schedule);
    let mut backend = RecordingBackend::new(1280, 720);

    for frame in 0..300u32 {
        match frame % 40 {
            0 => game.move_player(Direction::Left),
            10 => game.move_player(Direction::Up),
            20 => game.move_player(Direction::Right),
            30 => game.move_player(Direction::Down),
            _ => {}
        }
        if frame % 5 == 0 {
            game.shoot();
        }
        for hook in schedule.advance(Duration::from_millis(10)) {
            game.run_hook(hook, &mut backend).unwrap();
        }
    }

    assert_eq!(game.stats().players, 1);
    assert_eq!(game.asteroid_count(), game.stats().asteroids);
    assert!(backend.draw_calls() > 0);
}
