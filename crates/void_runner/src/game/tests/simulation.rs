use approx::assert_relative_eq;
use void_engine::foundation::math::Vec3;

use super::{asteroid_at, quiet_game};
use crate::components::Velocity;
use crate::entities::{Bullet, Entity};
use crate::input::Direction;

#[test]
fn test_euler_step_is_exact() {
    let mut game = quiet_game();
    let asteroid = game.insert(asteroid_at(Vec3::new(0.0, 0.0, -5500.0), Vec3::new(1.5, -2.0, 13.0)));
    let bullet = game.insert(Bullet::new(
        Vec3::new(10.0, 20.0, -1050.0),
        Velocity::new(0.0, 0.0, -100.0),
        &super::model(4, 5.0),
    ));

    game.auto_move();

    assert_eq!(game.entity(asteroid).unwrap().position().0, Vec3::new(1.5, -2.0, -5487.0));
    assert_eq!(game.entity(bullet).unwrap().position().0, Vec3::new(10.0, 20.0, -1150.0));
}

#[test]
fn test_asteroid_spins_without_clamp() {
    let mut game = quiet_game();
    let id = game.insert(asteroid_at(Vec3::new(0.0, 0.0, -5500.0), Vec3::zeros()));

    for _ in 0..100 {
        game.auto_move();
    }

    let rotation = game.entity(id).unwrap().rotation().unwrap();
    assert_relative_eq!(rotation.rot, Vec3::new(1.0, 0.0, -1.0), epsilon = 1e-4);
}

#[test]
fn test_player_velocity_is_replaced_on_move() {
    let mut game = quiet_game();
    for _ in 0..5 {
        game.move_player(Direction::Right);
    }

    let player = game.player().unwrap();
    let velocity = player.velocity.unwrap();
    assert_relative_eq!(player.target.x, 1000.0);
    assert_relative_eq!(velocity.0.norm(), game.config().player.speed_factor, epsilon = 1e-5);
    assert!(velocity.0.x > 0.0);
    assert!(player.rotation.active);
}

#[test]
fn test_move_steps_from_last_target() {
    let mut game = quiet_game();
    game.move_player(Direction::Up);
    game.auto_move();
    game.move_player(Direction::Up);

    // Two steps from the start even though the ship barely moved
    let player = game.player().unwrap();
    assert_relative_eq!(player.target.y, -300.0 + 400.0);
    assert!(player.position.0.y < -290.0);
}

#[test]
fn test_move_clamps_at_world_edge() {
    let mut game = quiet_game();
    if let Some(player) = game.player_mut() {
        player.position.0.x = 2000.0;
        player.target.x = 2000.0;
    }

    game.move_player(Direction::Right);
    assert_relative_eq!(game.player().unwrap().target.x, 2000.0);

    game.move_player(Direction::Left);
    assert_relative_eq!(game.player().unwrap().target.x, 1800.0);
}

#[test]
fn test_damping_settles_player() {
    let mut game = quiet_game();
    game.move_player(Direction::Left);
    game.move_player(Direction::Down);

    let band = game.config().player.activity_band;
    for _ in 0..1000 {
        game.auto_move();
    }

    let player = game.player().unwrap();
    assert!(player.velocity.unwrap().is_settled(band));
    assert!(!player.rotation.active);
    assert!(player.rotation.rot.norm() < 0.01);
}

#[test]
fn test_bullet_far_behind_vanishes_without_replacement() {
    let mut game = quiet_game();
    let bullet = game.insert(Bullet::new(
        Vec3::new(0.0, 0.0, -6950.0),
        Velocity::new(0.0, 0.0, -100.0),
        &super::model(4, 5.0),
    ));

    game.auto_move();

    assert!(game.entity(bullet).is_none());
    assert_eq!(game.stats().asteroids, 0);
    assert_eq!(game.entity_count(), 1);
}

#[test]
fn test_explosion_particles_expire() {
    let mut game = quiet_game();
    game.spawn_explosion(Vec3::new(0.0, 0.0, -3000.0));
    assert_eq!(game.stats().particles, game.config().explosion.particles);

    for _ in 1..game.config().explosion.lifetime_ticks {
        game.auto_move();
    }
    assert_eq!(game.stats().particles, game.config().explosion.particles);

    game.auto_move();
    assert_eq!(game.stats().particles, 0);
}

#[test]
fn test_passing_asteroids_are_replaced_mid_sweep() {
    let mut game = quiet_game();
    let passing: Vec<_> = (0..3)
        .map(|n| game.insert(asteroid_at(Vec3::new(n as f32 * 500.0, 0.0, 495.0), Vec3::new(0.0, 0.0, 10.0))))
        .collect();

    game.auto_move();

    assert!(passing.iter().all(|id| game.entity(*id).is_none()));
    assert_eq!(game.asteroid_count(), 3);
    assert_eq!(game.stats().asteroids, 3);
    // Behind the camera: no explosion
    assert_eq!(game.stats().particles, 0);

    let spawn_z = game.config().world.spawn_z;
    for (_, entity) in game.world().iter().filter(|(_, e)| matches!(e, Entity::Asteroid(_))) {
        assert!(spawn_z.contains(entity.position().0.z));
    }
}

#[test]
fn test_destroy_in_front_of_camera_bursts() {
    let mut game = quiet_game();
    let front = game.insert(asteroid_at(Vec3::new(0.0, 500.0, -2000.0), Vec3::zeros()));
    let behind = game.insert(asteroid_at(Vec3::new(0.0, 500.0, 100.0), Vec3::zeros()));

    assert!(game.destroy_asteroid(behind));
    assert_eq!(game.stats().particles, 0);

    assert!(game.destroy_asteroid(front));
    assert_eq!(game.stats().particles, game.config().explosion.particles);
    assert_eq!(game.asteroid_count(), 0);

    // Stale handle
    assert!(!game.destroy_asteroid(front));
}

#[test]
fn test_auto_move_keeps_running_during_game_over() {
    let mut game = quiet_game();
    let start = game.player().unwrap().position.0;
    game.insert(asteroid_at(start, Vec3::zeros()));
    game.check_collisions();
    assert!(game.is_game_over());

    let bullet = game.insert(Bullet::new(Vec3::zeros(), Velocity::new(0.0, 0.0, -100.0), &super::model(4, 5.0)));
    game.auto_move();
    assert_eq!(game.entity(bullet).unwrap().position().0.z, -100.0);
}
