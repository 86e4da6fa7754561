//! # Draw Queue
//!
//! Collects one command per (entity, material group) for a frame and submits
//! them in order. Commands stay in submission order unless the caller asks
//! for a front-to-back sort.

use crate::foundation::math::{normal_matrix, Mat3, Mat4};
use crate::render::backend::{uniforms, BackendResult, GeometryHandle, RenderBackend, UniformValue};
use crate::render::lighting::PointLight;
use crate::render::material::{Material, MaterialUploadPolicy};

/// Individual draw command containing everything needed for one indexed draw
#[derive(Debug, Clone)]
pub struct DrawCommand<'a> {
    /// Model-view matrix
    pub model_view: Mat4,
    /// Normal matrix derived from the model-view matrix
    pub normal: Mat3,
    /// Geometry to bind
    pub geometry: GeometryHandle,
    /// Number of indices to draw
    pub index_count: u32,
    /// Material to upload
    pub material: &'a Material,
    /// Distance in front of the camera, used for sorting
    pub depth_key: f32,
}

impl<'a> DrawCommand<'a> {
    /// Create a draw command; the normal matrix and depth key are derived here
    pub fn new(model_view: Mat4, geometry: GeometryHandle, index_count: u32, material: &'a Material) -> Self {
        Self {
            model_view,
            normal: normal_matrix(&model_view),
            geometry,
            index_count,
            material,
            depth_key: -model_view[(2, 3)],
        }
    }

    /// Upload per-draw uniforms, bind geometry and draw
    pub fn submit(
        &self,
        backend: &mut dyn RenderBackend,
        light: &PointLight,
        view: &Mat4,
        policy: MaterialUploadPolicy,
    ) -> BackendResult<()> {
        backend.set_uniform(uniforms::MODEL_VIEW, UniformValue::Mat4(self.model_view))?;
        backend.set_uniform(uniforms::NORMAL, UniformValue::Mat3(self.normal))?;
        self.material.upload(backend, policy)?;
        light.upload(backend, view)?;
        backend.bind_geometry(self.geometry)?;
        backend.draw_indexed_triangles(self.index_count)
    }
}

/// Collection of draw commands for one frame
#[derive(Debug, Default)]
pub struct DrawQueue<'a> {
    commands: Vec<DrawCommand<'a>>,
}

impl<'a> DrawQueue<'a> {
    /// Create a new empty draw queue
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a draw queue with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Add a draw command to the queue
    pub fn push(&mut self, command: DrawCommand<'a>) {
        self.commands.push(command);
    }

    /// Sort commands near to far for early depth rejection
    pub fn sort_front_to_back(&mut self) {
        self.commands
            .sort_by(|a, b| a.depth_key.partial_cmp(&b.depth_key).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Get all commands in their current order
    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }

    /// Get total number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Submit every command in order
    pub fn submit(
        &self,
        backend: &mut dyn RenderBackend,
        light: &PointLight,
        view: &Mat4,
        policy: MaterialUploadPolicy,
    ) -> BackendResult<()> {
        for command in &self.commands {
            command.submit(backend, light, view, policy)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::{ProgramHandle, RecordingBackend, RenderCall};

    fn at_depth(z: f32, material: &Material) -> DrawCommand<'_> {
        DrawCommand::new(
            Mat4::new_translation(&Vec3::new(0.0, 0.0, z)),
            GeometryHandle(z.abs() as u64),
            3,
            material,
        )
    }

    #[test]
    fn test_queue_keeps_submission_order() {
        let material = Material::new();
        let mut queue = DrawQueue::new();
        queue.push(at_depth(-500.0, &material));
        queue.push(at_depth(-100.0, &material));

        assert_eq!(queue.commands()[0].geometry, GeometryHandle(500));
    }

    #[test]
    fn test_sort_front_to_back() {
        let material = Material::new();
        let mut queue = DrawQueue::with_capacity(3);
        queue.push(at_depth(-500.0, &material));
        queue.push(at_depth(-100.0, &material));
        queue.push(at_depth(-300.0, &material));

        queue.sort_front_to_back();

        let order: Vec<_> = queue.commands().iter().map(|c| c.geometry.0).collect();
        assert_eq!(order, vec![100, 300, 500]);
    }

    #[test]
    fn test_submit_binds_and_draws() {
        let material = Material::new().with_diffuse(Vec3::new(1.0, 0.0, 0.0));
        let mut queue = DrawQueue::new();
        queue.push(at_depth(-100.0, &material));

        let mut backend = RecordingBackend::new(640, 480);
        backend.use_program(ProgramHandle(1)).unwrap();
        queue
            .submit(&mut backend, &PointLight::default(), &Mat4::identity(), MaterialUploadPolicy::PreservePrevious)
            .unwrap();

        assert_eq!(backend.draw_calls(), 1);
        assert!(backend
            .calls()
            .contains(&RenderCall::BindGeometry(GeometryHandle(100))));
        assert!(backend.uniform(uniforms::NORMAL).is_some());
    }
}
