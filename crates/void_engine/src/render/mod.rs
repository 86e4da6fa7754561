//! # Render Submission
//!
//! Backend-agnostic rendering layer. The engine never owns GPU resources
//! directly: geometry, shader programs and textures are created by the
//! platform collaborator and handed in as opaque handles. What the engine
//! owns is the per-frame submission logic (camera, lighting, material
//! uploads, draw ordering) expressed against the [`RenderBackend`] trait.
//!
//! ## Architecture
//!
//! - **RenderBackend**: the small set of state-setting and draw calls a frame needs
//! - **Camera / PointLight / Material**: per-frame and per-draw uniform sources
//! - **MeshGroup / LoadedModel**: per-material geometry produced by the model loader
//! - **DrawQueue**: collected draw commands with optional depth sorting
//! - **RecordingBackend**: headless backend used by tests and the demo binary

pub mod backend;
pub mod camera;
pub mod lighting;
pub mod material;
pub mod mesh;
pub mod queue;
pub mod recording;

pub use backend::{
    uniforms, BackendResult, ClearFlags, DepthFunc, GeometryHandle, ProgramHandle, RenderBackend,
    TextureHandle, UniformValue,
};
pub use camera::Camera;
pub use lighting::PointLight;
pub use material::{Material, MaterialUploadPolicy};
pub use mesh::{LoadedModel, MeshGroup, ModelError, ModelLoader};
pub use queue::{DrawCommand, DrawQueue};
pub use recording::{RecordingBackend, RenderCall};

use thiserror::Error;

/// Errors raised while submitting a frame
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The backend rejected a call (lost context, driver error, ...)
    #[error("Backend failure: {0}")]
    BackendFailure(String),

    /// A handle did not refer to a live backend resource
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),
}
