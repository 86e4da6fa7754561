//! # Void Runner
//!
//! A 3D space shooter: the player's ship dodges and shoots asteroids that
//! fly in from the dark, with lighting, per-material models and a skybox.
//!
//! The crate is the simulation core. It owns the entity store and exposes
//! the hooks an external scheduler calls at independent intervals:
//!
//! - [`Game::auto_move`]: integrate motion, rotation and lifetimes
//! - [`Game::check_collisions`]: player and bullet tests against asteroids
//! - [`Game::change_difficulty`]: difficulty ramp and asteroid top-up
//! - [`Game::draw`]: full-frame render through a [`RenderBackend`]
//!
//! Input arrives through [`Game::move_player`] and [`Game::shoot`].
//!
//! [`RenderBackend`]: void_engine::render::RenderBackend

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod components;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod schedule;
pub mod state;

pub use assets::{GameAssets, ModelAsset, ModelSource, ModelSources, SkyboxAsset};
pub use config::GameConfig;
pub use entities::{Entity, EntityKind};
pub use game::{BoundingSphere, Game, GameStats};
pub use input::Direction;
pub use schedule::{Hook, HookSchedule};
pub use state::GameState;

use thiserror::Error;
use void_engine::config::ConfigError;
use void_engine::render::{ModelError, RenderError};

/// Errors raised while setting up or running the game
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A model failed to load
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// The render backend failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// No asteroid model was supplied
    #[error("At least one asteroid model is required")]
    MissingAsteroidModels,

    /// The configuration holds values the simulation cannot run with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
