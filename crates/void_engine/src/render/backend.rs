//! Backend abstraction traits for the rendering system
//!
//! This module defines the trait that rendering backends must implement
//! to provide a consistent interface for frame submission.

use crate::foundation::math::{Mat3, Mat4, Vec3};
use crate::render::RenderError;
use bitflags::bitflags;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a vertex array (geometry) owned by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// Handle to a compiled and linked shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u64);

/// Handle to a texture (the skybox cubemap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

bitflags! {
    /// Buffers cleared at the start of a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
    }
}

/// Depth comparison function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthFunc {
    /// Pass when the incoming depth is strictly less
    Less,
    /// Pass when the incoming depth is less or equal (skybox at the far plane)
    LessEqual,
}

/// Value uploaded to a named shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// 4x4 matrix
    Mat4(Mat4),
    /// 3x3 matrix
    Mat3(Mat3),
    /// 3-component vector
    Vec3(Vec3),
    /// Scalar float
    Float(f32),
    /// Scalar integer
    Int(i32),
}

/// Uniform names shared by the engine and the shaders
pub mod uniforms {
    /// Projection matrix
    pub const PROJECTION: &str = "uProjectionMatrix";
    /// Model-view matrix
    pub const MODEL_VIEW: &str = "uModelViewMatrix";
    /// Normal matrix (inverse-transpose of the model-view upper 3x3)
    pub const NORMAL: &str = "uNormalMatrix";
    /// Skybox view matrix (translation stripped)
    pub const SKYBOX_VIEW: &str = "uViewDirectionMatrix";
    /// Point light position in view space
    pub const LIGHT_POSITION: &str = "uLightPosition";
    /// Point light color
    pub const LIGHT_COLOR: &str = "uLightColor";
    /// Material diffuse color (Kd)
    pub const DIFFUSE: &str = "uDiffuse";
    /// Material ambient color (Ka)
    pub const AMBIENT: &str = "uAmbient";
    /// Material specular color (Ks)
    pub const SPECULAR: &str = "uSpecular";
    /// Material emissive color (Ke)
    pub const EMISSIVE: &str = "uEmissive";
    /// Material specular exponent (Ns)
    pub const SHININESS: &str = "uShininess";
    /// Material optical density (Ni)
    pub const OPTICAL_DENSITY: &str = "uOpticalDensity";
    /// Material opacity (d)
    pub const OPACITY: &str = "uOpacity";
    /// Material illumination model (illum)
    pub const ILLUM: &str = "uIllum";
    /// Cubemap sampler
    pub const SKYBOX: &str = "uSkybox";
}

/// Main rendering backend trait
///
/// Mirrors the handful of immediate-mode calls the frame needs. State set
/// through this trait persists until overwritten, exactly like bound GL state.
pub trait RenderBackend {
    /// Current drawable size (width, height) in pixels
    fn viewport_size(&self) -> (u32, u32);

    /// Set the clear color used by [`RenderBackend::clear`]
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clear the selected buffers
    fn clear(&mut self, flags: ClearFlags) -> BackendResult<()>;

    /// Enable depth testing with the given compare function, or disable it with `None`
    fn set_depth_test(&mut self, func: Option<DepthFunc>) -> BackendResult<()>;

    /// Make a shader program current
    fn use_program(&mut self, program: ProgramHandle) -> BackendResult<()>;

    /// Upload a value to a named uniform of the current program
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> BackendResult<()>;

    /// Bind a geometry handle for the next draw
    fn bind_geometry(&mut self, geometry: GeometryHandle) -> BackendResult<()>;

    /// Bind a cubemap texture to the skybox sampler
    fn bind_cubemap(&mut self, texture: TextureHandle) -> BackendResult<()>;

    /// Issue an indexed triangle draw using the bound geometry
    fn draw_indexed_triangles(&mut self, index_count: u32) -> BackendResult<()>;

    /// Aspect ratio of the drawable (width / height), 1.0 for a degenerate viewport
    fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.viewport_size();
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }
}
