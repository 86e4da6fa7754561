//! Lighting system

use crate::foundation::math::{Mat4, Vec3};
use crate::render::backend::{uniforms, BackendResult, RenderBackend, UniformValue};
use serde::{Deserialize, Serialize};

/// Single point light shared by every draw in a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Light color
    pub color: Vec3,
}

impl PointLight {
    /// Create a point light
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Upload position (transformed into view space) and color
    pub fn upload(&self, backend: &mut dyn RenderBackend, view: &Mat4) -> BackendResult<()> {
        let view_position = view.transform_point(&self.position.into()).coords;
        backend.set_uniform(uniforms::LIGHT_POSITION, UniformValue::Vec3(view_position))?;
        backend.set_uniform(uniforms::LIGHT_COLOR, UniformValue::Vec3(self.color))
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1000.0, 0.0), Vec3::new(1.0, 1.0, 1.0))
    }
}
