//! Game-specific components
//!
//! Plain data bundles attached to entities. The only behavior here is the
//! per-component arithmetic the simulation step applies every tick.

use std::rc::Rc;

use void_engine::foundation::math::Vec3;
use void_engine::render::{LoadedModel, MeshGroup};

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec3);

impl Position {
    /// Create a position
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Explicit Euler step: move by one tick of velocity
    pub fn integrate(&mut self, velocity: &Velocity) {
        self.0 += velocity.0;
    }
}

/// World-space displacement per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec3);

impl Velocity {
    /// Create a velocity
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Velocity of `speed` units per tick pointing from `from` towards `to`
    ///
    /// Coincident points give a zero velocity.
    pub fn towards(from: Vec3, to: Vec3, speed: f32) -> Self {
        Self((to - from).try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros) * speed)
    }

    /// Multiply every axis by a damping factor
    pub fn damp(&mut self, factor: f32) {
        self.0 *= factor;
    }

    /// Check whether every axis lies inside `(-band, band)`
    pub fn is_settled(&self, band: f32) -> bool {
        self.0.iter().all(|axis| axis.abs() < band)
    }
}

/// Euler-like rotation with a pending delta and a maneuvering flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Current rotation in radians about X, Y, Z
    pub rot: Vec3,
    /// Pending rotation delta; constant spin for asteroids, decaying lean for the player
    pub rot_future: Vec3,
    /// Whether the player is currently maneuvering
    pub active: bool,
}

impl Rotation {
    /// Rotation at rest
    pub fn new() -> Self {
        Self {
            rot: Vec3::zeros(),
            rot_future: Vec3::zeros(),
            active: false,
        }
    }

    /// Rotation with a constant spin per tick
    pub fn spinning(spin: Vec3) -> Self {
        Self {
            rot_future: spin,
            ..Self::new()
        }
    }

    /// Unclamped spin: `rot += rot_future`
    pub fn spin(&mut self) {
        self.rot += self.rot_future;
    }

    /// Add a lean impulse and mark the rotation as maneuvering
    pub fn lean(&mut self, delta: Vec3) {
        self.rot_future += delta;
        self.active = true;
    }

    /// Move `rot` by `rot_future` per axis while it stays within `limits`
    ///
    /// An axis only advances while it has not yet passed the limit on the
    /// side it is advancing towards; once past, further pushes that way are
    /// dropped while pushes back towards zero still apply.
    pub fn steer(&mut self, limits: Vec3) {
        for axis in 0..3 {
            let delta = self.rot_future[axis];
            let current = self.rot[axis];
            let limit = limits[axis];
            let within = if delta >= 0.0 { current <= limit } else { current >= -limit };
            if within {
                self.rot[axis] = current + delta;
            }
        }
    }

    /// Decay the pending delta
    pub fn damp_future(&mut self, factor: f32) {
        self.rot_future *= factor;
    }

    /// Ease the current rotation back towards zero
    pub fn settle(&mut self, factor: f32) {
        self.rot *= factor;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-material geometry of a model, shared with the loader
///
/// Cloning is cheap; all entities spawned from one model share the same groups.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInfo {
    groups: Rc<[MeshGroup]>,
}

impl RenderInfo {
    /// Wrap a list of mesh groups
    pub fn new(groups: Vec<MeshGroup>) -> Self {
        Self { groups: groups.into() }
    }

    /// The mesh groups in draw order
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }
}

/// Bounding-sphere radius, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxRadius(f32);

impl MaxRadius {
    /// Create a radius from a known value
    pub fn new(radius: f32) -> Self {
        Self(radius.max(0.0))
    }

    /// Largest vertex distance from the model origin
    pub fn from_model(model: &LoadedModel) -> Self {
        Self::new(model.max_radius())
    }

    /// The radius value
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Remaining lifetime in simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifetime {
    remaining: u32,
}

impl Lifetime {
    /// Create a lifetime of `ticks`
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Count one tick down; returns true once the lifetime has run out
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Ticks left
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_integrate_is_exact_sum() {
        let mut position = Position::new(1.5, -2.0, -5500.0);
        let velocity = Velocity::new(0.25, 0.5, 13.0);
        position.integrate(&velocity);

        assert_eq!(position.0, Vec3::new(1.75, -1.5, -5487.0));
    }

    #[test]
    fn test_velocity_towards_normalizes() {
        let velocity = Velocity::towards(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0), 10.0);
        assert_relative_eq!(velocity.0, Vec3::new(6.0, 8.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_velocity_towards_same_point_is_zero() {
        let velocity = Velocity::towards(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0), 10.0);
        assert_eq!(velocity.0, Vec3::zeros());
    }

    #[test]
    fn test_velocity_settled_band() {
        assert!(Velocity::new(0.05, -0.05, 0.0).is_settled(0.1));
        assert!(!Velocity::new(0.05, -0.2, 0.0).is_settled(0.1));
    }

    #[test]
    fn test_steer_stops_at_limit() {
        let mut rotation = Rotation::new();
        rotation.lean(Vec3::new(0.15, 0.0, 0.0));
        let limits = Vec3::new(0.2, 0.4, 0.0);

        rotation.steer(limits);
        assert_relative_eq!(rotation.rot.x, 0.15);
        rotation.steer(limits);
        assert_relative_eq!(rotation.rot.x, 0.30);
        // Past the limit and still pushing the same way: no further change
        rotation.steer(limits);
        assert_relative_eq!(rotation.rot.x, 0.30);
    }

    #[test]
    fn test_steer_allows_return_past_limit() {
        let mut rotation = Rotation::new();
        rotation.rot = Vec3::new(0.3, 0.0, 0.0);
        rotation.rot_future = Vec3::new(-0.1, 0.0, 0.0);

        rotation.steer(Vec3::new(0.2, 0.4, 0.0));
        assert_relative_eq!(rotation.rot.x, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_spin_is_unclamped() {
        let mut rotation = Rotation::spinning(Vec3::new(0.5, 0.0, 0.0));
        for _ in 0..10 {
            rotation.spin();
        }
        assert_relative_eq!(rotation.rot.x, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_lifetime_counts_down() {
        let mut lifetime = Lifetime::new(2);
        assert!(!lifetime.tick());
        assert!(lifetime.tick());
        assert!(lifetime.tick());
        assert_eq!(lifetime.remaining(), 0);
    }

    #[test]
    fn test_max_radius_is_never_negative() {
        assert_eq!(MaxRadius::new(-3.0).get(), 0.0);
    }
}
