//! # Void Engine
//!
//! The engine layer underneath the Void Runner space shooter.
//!
//! ## Features
//!
//! - **Math**: nalgebra-based aliases plus camera and normal-matrix helpers
//! - **Entity Arena**: generational handles that survive removal mid-sweep
//! - **Render Submission**: a backend-agnostic draw interface with opaque
//!   geometry, program and texture handles
//! - **Configuration**: TOML/RON loading for any serde-enabled config
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use void_engine::prelude::*;
//!
//! let mut world: World<&'static str> = World::new();
//! let id = world.spawn("asteroid");
//! assert_eq!(world.get(id), Some(&"asteroid"));
//!
//! let camera = Camera::default();
//! let _view = camera.view_matrix();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{EntityId, World},
        foundation::{
            math::{Mat3, Mat4, Mat4Ext, Vec3},
            time::IntervalTimer,
        },
        render::{
            Camera, ClearFlags, DepthFunc, DrawCommand, DrawQueue, GeometryHandle, LoadedModel,
            Material, MaterialUploadPolicy, MeshGroup, ModelError, ModelLoader, PointLight,
            ProgramHandle, RecordingBackend, RenderBackend, RenderError, TextureHandle,
            UniformValue,
        },
    };
}
