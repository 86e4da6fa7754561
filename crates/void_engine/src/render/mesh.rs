//! Per-material geometry groups produced by the model loader

use crate::foundation::math::Vec3;
use crate::render::backend::GeometryHandle;
use crate::render::material::Material;
use thiserror::Error;

/// One drawable slice of a model: geometry uploaded for a single material
///
/// The geometry handle belongs to the loader; groups only borrow it and never
/// free it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    /// Vertex array handle
    pub geometry: GeometryHandle,
    /// Number of indices to draw
    pub index_count: u32,
    /// Material applied to this group
    pub material: Material,
}

impl MeshGroup {
    /// Create a new mesh group
    pub fn new(geometry: GeometryHandle, index_count: u32, material: Material) -> Self {
        Self {
            geometry,
            index_count,
            material,
        }
    }
}

/// Output of the model loader: per-material groups plus raw vertex positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedModel {
    /// One group per material used by the model
    pub groups: Vec<MeshGroup>,
    /// Flat list of vertex positions (x, y, z, x, y, z, ...)
    pub vertex_positions: Vec<f32>,
}

impl LoadedModel {
    /// Create a loaded model
    pub fn new(groups: Vec<MeshGroup>, vertex_positions: Vec<f32>) -> Self {
        Self {
            groups,
            vertex_positions,
        }
    }

    /// Largest distance from the model origin to any vertex
    ///
    /// A trailing partial triple is ignored. Empty models have radius zero.
    pub fn max_radius(&self) -> f32 {
        self.vertex_positions
            .chunks_exact(3)
            .map(|xyz| Vec3::new(xyz[0], xyz[1], xyz[2]).magnitude())
            .fold(0.0, f32::max)
    }

    /// Total number of indices across all groups
    pub fn index_count(&self) -> u32 {
        self.groups.iter().map(|group| group.index_count).sum()
    }
}

/// Errors reported by the model loading collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The OBJ/MTL text could not be parsed or uploaded
    #[error("Failed to load model '{name}': {reason}")]
    LoadFailed {
        /// Model name
        name: String,
        /// Loader-provided reason
        reason: String,
    },

    /// The model loaded but has nothing to draw
    #[error("Model '{0}' has no geometry groups")]
    Empty(String),
}

/// The external model loader: OBJ + MTL text in, uploaded geometry out
pub trait ModelLoader {
    /// Parse and upload a model
    fn load_model(&mut self, name: &str, obj_text: &str, mtl_text: &str) -> Result<LoadedModel, ModelError>;
}
