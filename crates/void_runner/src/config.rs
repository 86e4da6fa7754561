//! Game configuration
//!
//! Every tuning constant of the simulation and the render pass lives here.
//! Files are loaded through [`void_engine::config::Config`]; missing fields
//! fall back to the defaults below, which reproduce the stock game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use void_engine::config::Config;
use void_engine::foundation::math::Vec3;
use void_engine::render::MaterialUploadPolicy;

use crate::GameError;

/// Closed interval `[min, max]` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl Span {
    /// Create a span
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric span `[-extent, extent]`
    pub const fn symmetric(extent: f32) -> Self {
        Self::new(-extent, extent)
    }

    /// Sample a value uniformly; a degenerate span returns its bound
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    /// Check whether `value` lies inside the span
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play volume and despawn thresholds
    pub world: WorldConfig,
    /// Player movement and lean
    pub player: PlayerConfig,
    /// Asteroid spawning
    pub asteroid: AsteroidConfig,
    /// Bullets
    pub bullet: BulletConfig,
    /// Explosion bursts
    pub explosion: ExplosionConfig,
    /// Difficulty ramp
    pub difficulty: DifficultyConfig,
    /// Collision tests
    pub collision: CollisionConfig,
    /// Render pass
    pub render: RenderConfig,
    /// Hook intervals
    pub schedule: ScheduleConfig,
}

impl Config for GameConfig {}

/// Play volume configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Player X bound (the player stays within `±bound_x`)
    pub bound_x: f32,
    /// Player Y bound (the player stays within `±bound_y`)
    pub bound_y: f32,
    /// Asteroids whose z exceeds this have passed the camera
    pub near_despawn_z: f32,
    /// Entities whose z falls below this are too far behind and vanish
    pub far_despawn_z: f32,
    /// Z band asteroids spawn in
    pub spawn_z: Span,
    /// Asteroids fly towards a random point on this Z plane
    pub aim_z: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bound_x: 2000.0,
            bound_y: 1000.0,
            near_despawn_z: 500.0,
            far_despawn_z: -7000.0,
            spawn_z: Span::new(-6000.0, -5000.0),
            aim_z: 1000.0,
        }
    }
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Canonical start position
    pub start: Vec3,
    /// Target displacement per move command
    pub move_step: f32,
    /// Speed of the velocity recomputed on each move
    pub speed_factor: f32,
    /// Per-tick velocity damping, also used to settle the rotation
    pub velocity_damping: f32,
    /// Per-tick damping of the pending rotation delta
    pub rotation_damping: f32,
    /// Velocity band below which the player stops maneuvering
    pub activity_band: f32,
    /// Lean impulse added per move command
    pub lean_step: f32,
    /// Per-axis rotation limits while maneuvering
    pub rotation_limits: Vec3,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, -300.0, -1000.0),
            move_step: 200.0,
            speed_factor: 2.0,
            velocity_damping: 0.99,
            rotation_damping: 0.85,
            activity_band: 0.1,
            lean_step: 0.05,
            rotation_limits: Vec3::new(0.2, 0.4, 0.0),
        }
    }
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Speed range in units per tick
    pub speed: Span,
    /// Spin range per axis in radians per tick
    pub spin: Span,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            speed: Span::new(10.0, 20.0),
            spin: Span::symmetric(0.02),
        }
    }
}

/// Bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Distance in front of the player a bullet spawns at
    pub muzzle_offset: f32,
    /// Forward speed (along -Z) in units per tick
    pub speed: f32,
    /// Nominal collision radius
    pub radius: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            muzzle_offset: 50.0,
            speed: 100.0,
            radius: 50.0,
        }
    }
}

/// Explosion burst configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Particles per burst
    pub particles: usize,
    /// Particle speed range
    pub speed: Span,
    /// Particle spin range per axis
    pub spin: Span,
    /// Particle lifetime in simulation ticks
    pub lifetime_ticks: u32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            particles: 100,
            speed: Span::new(2.0, 10.0),
            spin: Span::symmetric(0.1),
            lifetime_ticks: 60,
        }
    }
}

/// Difficulty ramp configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Difficulty at game start and after a reset
    pub initial: f32,
    /// Score that must be exceeded before difficulty ramps
    pub score_threshold: u32,
    /// `difficulty += score / divisor` on each ramp
    pub divisor: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            initial: 5.0,
            score_threshold: 10,
            divisor: 10.0,
        }
    }
}

/// Collision configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Spheres touch when `distance - (r1 + r2) <= epsilon`
    pub epsilon: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self { epsilon: 1e-3 }
    }
}

/// Render pass configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Camera eye
    pub eye: Vec3,
    /// Camera target
    pub center: Vec3,
    /// Camera up vector
    pub up: Vec3,
    /// Point light position in world space
    pub light_position: Vec3,
    /// Point light color
    pub light_color: Vec3,
    /// Clear color
    pub clear_color: [f32; 4],
    /// Sort opaque draws front to back
    pub depth_sort: bool,
    /// How absent material properties are uploaded
    pub material_upload: MaterialUploadPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 80.0,
            near: 10.0,
            far: 10_000.0,
            eye: Vec3::new(0.0, 0.0, 1.0),
            center: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            light_position: Vec3::new(0.0, 1000.0, 0.0),
            light_color: Vec3::new(1.0, 1.0, 1.0),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            depth_sort: false,
            material_upload: MaterialUploadPolicy::PreservePrevious,
        }
    }
}

/// Hook interval configuration, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Motion integration interval
    pub auto_move_ms: u64,
    /// Collision test interval
    pub collision_ms: u64,
    /// Difficulty ramp interval
    pub difficulty_ms: u64,
    /// Frame interval
    pub draw_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            auto_move_ms: 10,
            collision_ms: 50,
            difficulty_ms: 1000,
            draw_ms: 16,
        }
    }
}

impl GameConfig {
    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| Err(GameError::InvalidConfig(reason.to_string()));

        let world = &self.world;
        if world.bound_x <= 0.0 || world.bound_y <= 0.0 {
            return invalid("world bounds must be positive");
        }
        if !world.spawn_z.is_valid() {
            return invalid("world.spawn_z must be a finite, non-empty range");
        }
        if world.far_despawn_z >= world.near_despawn_z {
            return invalid("world.far_despawn_z must lie below world.near_despawn_z");
        }
        if !(world.far_despawn_z..world.near_despawn_z).contains(&world.spawn_z.min)
            || !(world.far_despawn_z..world.near_despawn_z).contains(&world.spawn_z.max)
        {
            return invalid("asteroids must spawn between the despawn thresholds");
        }

        let player = &self.player;
        if player.move_step <= 0.0 || player.speed_factor <= 0.0 {
            return invalid("player.move_step and player.speed_factor must be positive");
        }
        for (name, factor) in [
            ("player.velocity_damping", player.velocity_damping),
            ("player.rotation_damping", player.rotation_damping),
        ] {
            if !(0.0..1.0).contains(&factor) {
                return Err(GameError::InvalidConfig(format!("{name} must be in [0, 1)")));
            }
        }
        if player.activity_band <= 0.0 {
            return invalid("player.activity_band must be positive");
        }

        for (name, span) in [
            ("asteroid.speed", self.asteroid.speed),
            ("asteroid.spin", self.asteroid.spin),
            ("explosion.speed", self.explosion.speed),
            ("explosion.spin", self.explosion.spin),
        ] {
            if !span.is_valid() {
                return Err(GameError::InvalidConfig(format!("{name} must be a finite, non-empty range")));
            }
        }
        if self.asteroid.speed.min <= 0.0 {
            return invalid("asteroid.speed must be positive");
        }

        if self.bullet.speed <= 0.0 || self.bullet.radius < 0.0 {
            return invalid("bullet.speed must be positive and bullet.radius non-negative");
        }
        if self.explosion.lifetime_ticks == 0 {
            return invalid("explosion.lifetime_ticks must be at least 1");
        }

        if self.difficulty.initial < 0.0 || self.difficulty.divisor <= 0.0 {
            return invalid("difficulty.initial must be non-negative and difficulty.divisor positive");
        }
        if self.collision.epsilon < 0.0 {
            return invalid("collision.epsilon must be non-negative");
        }

        let render = &self.render;
        if render.near <= 0.0 || render.near >= render.far {
            return invalid("render.near must be positive and below render.far");
        }
        if render.fov_y_degrees <= 0.0 || render.fov_y_degrees >= 180.0 {
            return invalid("render.fov_y_degrees must be in (0, 180)");
        }

        let schedule = &self.schedule;
        if [schedule.auto_move_ms, schedule.collision_ms, schedule.difficulty_ms, schedule.draw_ms].contains(&0) {
            return invalid("schedule intervals must be positive");
        }

        Ok(())
    }
}
