//! Orbit camera with spherical coordinates.
//!
//! Y-up coordinate system. Theta = horizontal, Phi = vertical (clamped away
//! from the poles so `look_at` never degenerates). The default pose puts the
//! eye at (0, 0, 4) looking at the origin.

use glam::{Mat4, Vec3};

use crate::transform::ProjectionConfig;
use crate::uniforms::VertexUniforms;

const DEFAULT_RADIUS: f32 = 4.0;
const UP_VECTOR: Vec3 = Vec3::Y;
const MIN_PHI: f32 = 0.1;
const MAX_PHI: f32 = std::f32::consts::PI - 0.1;
const MIN_RADIUS: f32 = 1.0;

/// Orbit camera around a target point.
#[derive(Debug, Clone)]
pub struct Camera {
    target: Vec3,
    radius: f32,
    theta: f32, // Horizontal angle
    phi: f32,   // Vertical angle
    aspect_ratio: f32,
    projection: ProjectionConfig,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    pub fn new(aspect_ratio: f32) -> Self {
        Self::with_projection(aspect_ratio, ProjectionConfig::default())
    }

    pub fn with_projection(aspect_ratio: f32, projection: ProjectionConfig) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            radius: DEFAULT_RADIUS,
            theta: std::f32::consts::FRAC_PI_2, // On +Z
            phi: std::f32::consts::FRAC_PI_2,   // Level with the target
            aspect_ratio,
            projection,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_matrices();
        camera
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.theta += delta_x;
        self.phi = (self.phi + delta_y).clamp(MIN_PHI, MAX_PHI);
        self.update_matrices();
    }

    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius - delta).max(MIN_RADIUS);
        self.update_matrices();
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.update_matrices();
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn eye_position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.target.x + self.radius * sin_phi * self.theta.cos(),
            self.target.y + self.radius * self.phi.cos(),
            self.target.z + self.radius * sin_phi * self.theta.sin(),
        )
    }

    /// Uniforms for one draw of an object placed by `model`.
    pub fn vertex_uniforms(&self, model: Mat4) -> VertexUniforms {
        VertexUniforms::from_model_view(self.view_matrix * model, self.projection_matrix)
    }

    fn update_matrices(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.eye_position(), self.target, UP_VECTOR);
        self.projection_matrix = self.projection.matrix(self.aspect_ratio);
    }
}
