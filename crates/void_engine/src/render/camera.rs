//! Fixed perspective camera
//!
//! The camera never moves during play: eye, target and up are fixed at
//! construction and the projection only depends on the drawable aspect.

use crate::foundation::math::{strip_translation, utils, Mat4, Mat4Ext, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera looking from `eye` towards `target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position in world space
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Camera {
    /// Create a camera with a look-at pose and projection parameters
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_degrees,
            near,
            far,
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// View matrix with translation removed, for geometry at infinity
    pub fn skybox_view_matrix(&self) -> Mat4 {
        strip_translation(&self.view_matrix())
    }

    /// Projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(utils::deg_to_rad(self.fov_y_degrees), aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
            80.0,
            10.0,
            10_000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_moves_eye_to_origin() {
        let camera = Camera::default();
        let eye_in_view = camera.view_matrix().transform_point(&camera.eye.into());

        assert_relative_eq!(eye_in_view.coords, Vec3::zeros(), epsilon = 1e-6);
    }

    #[test]
    fn test_points_ahead_have_negative_view_depth() {
        let camera = Camera::default();
        let ahead = camera
            .view_matrix()
            .transform_point(&nalgebra::Point3::new(0.0, 0.0, -1000.0));

        assert!(ahead.z < 0.0);
    }

    #[test]
    fn test_skybox_view_ignores_eye_translation() {
        let camera = Camera::new(
            Vec3::new(5.0, 6.0, 7.0),
            Vec3::new(5.0, 6.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            60.0,
            1.0,
            100.0,
        );
        let skybox_view = camera.skybox_view_matrix();

        assert_relative_eq!(
            skybox_view.transform_point(&nalgebra::Point3::origin()).coords,
            Vec3::zeros()
        );
    }
}
