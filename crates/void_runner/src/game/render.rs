//! Frame submission
//!
//! One draw per (entity, material group), followed by the skybox at the
//! far plane.

use void_engine::foundation::math::{Mat4, Mat4Ext};
use void_engine::render::{
    uniforms, ClearFlags, DepthFunc, DrawCommand, DrawQueue, RenderBackend, RenderError, UniformValue,
};

use super::Game;
use crate::entities::Entity;

/// Model matrix: translation, then the negated rotation about X, Y and Z
pub(crate) fn model_matrix(entity: &Entity) -> Mat4 {
    let translation = Mat4::new_translation(&entity.position().0);
    match entity.rotation() {
        Some(rotation) => {
            translation
                * Mat4::rotation_x(-rotation.rot.x)
                * Mat4::rotation_y(-rotation.rot.y)
                * Mat4::rotation_z(-rotation.rot.z)
        }
        None => translation,
    }
}

impl Game {
    /// Render one frame
    ///
    /// Clears, draws every entity group with the main program under a
    /// less-than depth test, then draws the skybox with a less-or-equal test
    /// and restores less-than. Nothing in the game state changes.
    pub fn draw(&self, backend: &mut dyn RenderBackend) -> Result<(), RenderError> {
        let render = &self.config.render;

        backend.set_clear_color(render.clear_color);
        backend.clear(ClearFlags::COLOR | ClearFlags::DEPTH)?;
        backend.set_depth_test(Some(DepthFunc::Less))?;

        let projection = self.camera.projection_matrix(backend.aspect_ratio());
        let view = self.camera.view_matrix();

        backend.use_program(self.assets.program)?;
        backend.set_uniform(uniforms::PROJECTION, UniformValue::Mat4(projection))?;

        let mut queue = DrawQueue::with_capacity(self.world.len());
        for (_, entity) in self.world.iter() {
            let model_view = view * model_matrix(entity);
            for group in entity.render().groups() {
                queue.push(DrawCommand::new(model_view, group.geometry, group.index_count, &group.material));
            }
        }
        if render.depth_sort {
            queue.sort_front_to_back();
        }
        queue.submit(backend, &self.light, &view, render.material_upload)?;

        self.draw_skybox(backend, &projection)
    }

    fn draw_skybox(&self, backend: &mut dyn RenderBackend, projection: &Mat4) -> Result<(), RenderError> {
        let Some(skybox) = self.assets.skybox else {
            log::debug!("No skybox loaded, skipping skybox pass");
            return Ok(());
        };

        backend.set_depth_test(Some(DepthFunc::LessEqual))?;
        backend.use_program(skybox.program)?;
        backend.set_uniform(uniforms::SKYBOX_VIEW, UniformValue::Mat4(self.camera.skybox_view_matrix()))?;
        backend.set_uniform(uniforms::PROJECTION, UniformValue::Mat4(*projection))?;
        backend.set_uniform(uniforms::SKYBOX, UniformValue::Int(0))?;
        backend.bind_cubemap(skybox.cubemap)?;
        backend.bind_geometry(skybox.geometry)?;
        backend.draw_indexed_triangles(skybox.index_count)?;
        backend.set_depth_test(Some(DepthFunc::Less))
    }
}
