//! Material properties for Wavefront-style (MTL) materials
//!
//! Every property is optional because MTL files only list what they define.
//! How absent properties are uploaded is governed by [`MaterialUploadPolicy`].

use crate::foundation::math::Vec3;
use crate::render::backend::{uniforms, BackendResult, RenderBackend, UniformValue};
use serde::{Deserialize, Serialize};

/// How absent material properties reach the shader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialUploadPolicy {
    /// Upload only the properties the material defines.
    ///
    /// Absent properties keep whatever value the previous draw bound, so one
    /// material's state can carry over into the next draw.
    #[default]
    PreservePrevious,
    /// Upload every property, writing zero for the ones the material lacks
    ZeroFill,
}

/// Material resource with optional Phong properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Optional name for debugging
    pub name: Option<String>,
    /// Diffuse color (Kd)
    pub diffuse: Option<Vec3>,
    /// Ambient color (Ka)
    pub ambient: Option<Vec3>,
    /// Specular color (Ks)
    pub specular: Option<Vec3>,
    /// Emissive color (Ke)
    pub emissive: Option<Vec3>,
    /// Specular exponent (Ns)
    pub shininess: Option<f32>,
    /// Optical density (Ni)
    pub optical_density: Option<f32>,
    /// Opacity / dissolve (d)
    pub opacity: Option<f32>,
    /// Illumination model (illum)
    pub illum: Option<i32>,
}

impl Material {
    /// Create an empty material
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the diffuse color
    pub fn with_diffuse(mut self, color: Vec3) -> Self {
        self.diffuse = Some(color);
        self
    }

    /// Set the ambient color
    pub fn with_ambient(mut self, color: Vec3) -> Self {
        self.ambient = Some(color);
        self
    }

    /// Set the specular color
    pub fn with_specular(mut self, color: Vec3) -> Self {
        self.specular = Some(color);
        self
    }

    /// Set the emissive color
    pub fn with_emissive(mut self, color: Vec3) -> Self {
        self.emissive = Some(color);
        self
    }

    /// Set the specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = Some(shininess);
        self
    }

    /// Set the optical density
    pub fn with_optical_density(mut self, density: f32) -> Self {
        self.optical_density = Some(density);
        self
    }

    /// Set the opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the illumination model
    pub fn with_illum(mut self, illum: i32) -> Self {
        self.illum = Some(illum);
        self
    }

    /// Upload the material's properties to the current program
    pub fn upload(&self, backend: &mut dyn RenderBackend, policy: MaterialUploadPolicy) -> BackendResult<()> {
        let zero_fill = policy == MaterialUploadPolicy::ZeroFill;

        let colors = [
            (uniforms::DIFFUSE, self.diffuse),
            (uniforms::AMBIENT, self.ambient),
            (uniforms::SPECULAR, self.specular),
            (uniforms::EMISSIVE, self.emissive),
        ];
        for (name, value) in colors {
            match value {
                Some(color) => backend.set_uniform(name, UniformValue::Vec3(color))?,
                None if zero_fill => backend.set_uniform(name, UniformValue::Vec3(Vec3::zeros()))?,
                None => {}
            }
        }

        let scalars = [
            (uniforms::SHININESS, self.shininess),
            (uniforms::OPTICAL_DENSITY, self.optical_density),
            (uniforms::OPACITY, self.opacity),
        ];
        for (name, value) in scalars {
            match value {
                Some(scalar) => backend.set_uniform(name, UniformValue::Float(scalar))?,
                None if zero_fill => backend.set_uniform(name, UniformValue::Float(0.0))?,
                None => {}
            }
        }

        match self.illum {
            Some(illum) => backend.set_uniform(uniforms::ILLUM, UniformValue::Int(illum)),
            None if zero_fill => backend.set_uniform(uniforms::ILLUM, UniformValue::Int(0)),
            None => Ok(()),
        }
    }
}
