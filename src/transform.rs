//! Matrix helpers used when filling uniforms.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::error::UniformError;

const DEFAULT_FOV_Y_RADIANS: f32 = std::f32::consts::PI / 5.0;
const DEFAULT_NEAR_PLANE: f32 = 0.1;
const DEFAULT_FAR_PLANE: f32 = 160.0;

/// Below this determinant the upper-left 3x3 is treated as non-invertible.
pub const SINGULAR_EPSILON: f32 = 1.0e-8;

/// Inverse-transpose of the upper-left 3x3 of `model_view`.
///
/// Keeps normals perpendicular to surfaces under non-uniform scaling. A
/// singular block (e.g. zero scale on one axis) has no inverse; the block is
/// returned unchanged in that case.
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let upper_left = Mat3::from_mat4(model_view);
    let det = upper_left.determinant();
    if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
        log::warn!("model-view matrix is singular (det = {det}), using it for normals as-is");
        return upper_left;
    }
    upper_left.inverse().transpose()
}

/// Object transform: scale, then rotate, then translate.
pub fn model_matrix(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

/// Right-handed perspective projection with a [0, 1] depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_radians: DEFAULT_FOV_Y_RADIANS,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<(), UniformError> {
        let Self {
            fov_y_radians,
            near,
            far,
        } = *self;

        if !(fov_y_radians.is_finite() && near.is_finite() && far.is_finite()) {
            return Err(UniformError::InvalidProjection(
                "parameters must be finite".to_string(),
            ));
        }
        if fov_y_radians <= 0.0 || fov_y_radians >= std::f32::consts::PI {
            return Err(UniformError::InvalidProjection(format!(
                "vertical fov {fov_y_radians} rad is outside (0, pi)"
            )));
        }
        if near <= 0.0 {
            return Err(UniformError::InvalidProjection(format!(
                "near plane {near} must be positive"
            )));
        }
        if far <= near {
            return Err(UniformError::InvalidProjection(format!(
                "far plane {far} must lie beyond near plane {near}"
            )));
        }
        Ok(())
    }

    /// Width over height must be finite and positive, or the matrix fills with inf/NaN.
    pub fn validate_aspect(aspect_ratio: f32) -> Result<(), UniformError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(UniformError::InvalidProjection(format!(
                "aspect ratio {aspect_ratio} must be finite and positive"
            )));
        }
        Ok(())
    }

    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, aspect_ratio, self.near, self.far)
    }
}
