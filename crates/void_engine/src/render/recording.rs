//! Headless render backend that records every call
//!
//! Used by tests and by the demo binary when no GPU context is available.
//! Besides the raw call log it tracks the state a real context would hold:
//! current program, bound geometry, depth test and the last value uploaded
//! to each uniform.

use std::collections::HashMap;

use crate::render::backend::{
    BackendResult, ClearFlags, DepthFunc, GeometryHandle, ProgramHandle, RenderBackend, TextureHandle,
    UniformValue,
};
use crate::render::RenderError;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// Buffers cleared
    Clear(ClearFlags),
    /// Depth test changed
    DepthTest(Option<DepthFunc>),
    /// Program made current
    UseProgram(ProgramHandle),
    /// Uniform uploaded
    Uniform(String, UniformValue),
    /// Geometry bound
    BindGeometry(GeometryHandle),
    /// Cubemap bound
    BindCubemap(TextureHandle),
    /// Indexed draw issued
    DrawIndexed {
        /// Geometry bound at draw time
        geometry: GeometryHandle,
        /// Number of indices
        index_count: u32,
        /// Depth test active at draw time
        depth: Option<DepthFunc>,
    },
}

/// Backend that records calls instead of talking to a GPU
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    size: (u32, u32),
    clear_color: [f32; 4],
    calls: Vec<RenderCall>,
    uniforms: HashMap<String, UniformValue>,
    program: Option<ProgramHandle>,
    geometry: Option<GeometryHandle>,
    depth: Option<DepthFunc>,
    fail_draws: bool,
}

impl RecordingBackend {
    /// Create a backend with the given drawable size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            calls: Vec::new(),
            uniforms: HashMap::new(),
            program: None,
            geometry: None,
            depth: None,
            fail_draws: false,
        }
    }

    /// Make every subsequent draw fail, simulating a lost context
    pub fn set_fail_draws(&mut self, fail: bool) {
        self.fail_draws = fail;
    }

    /// Change the drawable size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// All recorded calls in order
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forget recorded calls but keep bound state (uniforms, program, ...)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Last value uploaded to a uniform
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    /// Currently bound program
    pub fn current_program(&self) -> Option<ProgramHandle> {
        self.program
    }

    /// Current depth test state
    pub fn depth_test(&self) -> Option<DepthFunc> {
        self.depth
    }

    /// Current clear color
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Number of recorded draws
    pub fn draw_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::DrawIndexed { .. }))
            .count()
    }

    /// Number of recorded uniform uploads
    pub fn uniform_upload_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::Uniform(..)))
            .count()
    }

    /// Recorded draws as (geometry, index count, depth test) triples
    pub fn draws(&self) -> Vec<(GeometryHandle, u32, Option<DepthFunc>)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::DrawIndexed { geometry, index_count, depth } => Some((*geometry, *index_count, *depth)),
                _ => None,
            })
            .collect()
    }
}

impl RenderBackend for RecordingBackend {
    fn viewport_size(&self) -> (u32, u32) {
        self.size
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    fn clear(&mut self, flags: ClearFlags) -> BackendResult<()> {
        self.calls.push(RenderCall::Clear(flags));
        Ok(())
    }

    fn set_depth_test(&mut self, func: Option<DepthFunc>) -> BackendResult<()> {
        self.depth = func;
        self.calls.push(RenderCall::DepthTest(func));
        Ok(())
    }

    fn use_program(&mut self, program: ProgramHandle) -> BackendResult<()> {
        self.program = Some(program);
        self.calls.push(RenderCall::UseProgram(program));
        Ok(())
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> BackendResult<()> {
        if self.program.is_none() {
            return Err(RenderError::InvalidHandle(format!("uniform '{name}' set with no program bound")));
        }
        self.uniforms.insert(name.to_string(), value);
        self.calls.push(RenderCall::Uniform(name.to_string(), value));
        Ok(())
    }

    fn bind_geometry(&mut self, geometry: GeometryHandle) -> BackendResult<()> {
        self.geometry = Some(geometry);
        self.calls.push(RenderCall::BindGeometry(geometry));
        Ok(())
    }

    fn bind_cubemap(&mut self, texture: TextureHandle) -> BackendResult<()> {
        self.calls.push(RenderCall::BindCubemap(texture));
        Ok(())
    }

    fn draw_indexed_triangles(&mut self, index_count: u32) -> BackendResult<()> {
        if self.fail_draws {
            return Err(RenderError::BackendFailure("context lost".to_string()));
        }
        let geometry = self
            .geometry
            .ok_or_else(|| RenderError::InvalidHandle("draw issued with no geometry bound".to_string()))?;
        self.calls.push(RenderCall::DrawIndexed {
            geometry,
            index_count,
            depth: self.depth,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_without_geometry_fails() {
        let mut backend = RecordingBackend::new(1, 1);
        assert!(matches!(
            backend.draw_indexed_triangles(3),
            Err(RenderError::InvalidHandle(_))
        ));
    }

    #[test]
    fn test_uniform_without_program_fails() {
        let mut backend = RecordingBackend::new(1, 1);
        assert!(backend.set_uniform("uX", UniformValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_draw_records_bound_state() {
        let mut backend = RecordingBackend::new(800, 400);
        backend.set_depth_test(Some(DepthFunc::Less)).unwrap();
        backend.bind_geometry(GeometryHandle(9)).unwrap();
        backend.draw_indexed_triangles(6).unwrap();

        assert_eq!(backend.draws(), vec![(GeometryHandle(9), 6, Some(DepthFunc::Less))]);
        assert_eq!(backend.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_failing_draws() {
        let mut backend = RecordingBackend::new(1, 1);
        backend.bind_geometry(GeometryHandle(1)).unwrap();
        backend.set_fail_draws(true);
        assert!(matches!(
            backend.draw_indexed_triangles(3),
            Err(RenderError::BackendFailure(_))
        ));
    }
}
