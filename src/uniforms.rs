//! Uniform structs shared with `shaders/uniforms.wgsl`.
//!
//! Matrices are stored column-major. WGSL pads every `mat3x3<f32>` column and
//! every `vec3<f32>` member to 16 bytes, so those are spelled out as
//! `[f32; 4]` here with an explicit pad lane.

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

use crate::error::UniformError;
use crate::layout::{FieldLayout, UniformLayout};
use crate::transform::normal_matrix;

pub const MAX_LIGHTS: usize = 3;

/// Per-draw vertex stage transforms (176 bytes).
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VertexUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3], // mat3x3 columns, w unused
}

impl VertexUniforms {
    pub const IDENTITY: Self = Self {
        model_view: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        projection: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        normal: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
    };

    /// Stores the three matrices exactly as given.
    pub fn new(model_view: Mat4, projection: Mat4, normal: Mat3) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal: pad_mat3(normal),
        }
    }

    /// Derives the normal matrix from `model_view`.
    pub fn from_model_view(model_view: Mat4, projection: Mat4) -> Self {
        Self::new(model_view, projection, normal_matrix(model_view))
    }

    pub fn model_view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model_view)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }

    pub fn normal_matrix(&self) -> Mat3 {
        let [x, y, z] = self.normal;
        Mat3::from_cols(
            Vec3::new(x[0], x[1], x[2]),
            Vec3::new(y[0], y[1], y[2]),
            Vec3::new(z[0], z[1], z[2]),
        )
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a struct back out of uploaded or mapped memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, UniformError> {
        read_exact(bytes)
    }
}

impl Default for VertexUniforms {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UniformLayout for VertexUniforms {
    const NAME: &'static str = "VertexUniforms";
    const FIELDS: &'static [FieldLayout] = &[
        FieldLayout::new("model_view_matrix", offset_of!(VertexUniforms, model_view), 64, 16),
        FieldLayout::new("projection_matrix", offset_of!(VertexUniforms, projection), 64, 16),
        FieldLayout::new("normal_matrix", offset_of!(VertexUniforms, normal), 48, 16),
    ];
}

/// Point light, 32 bytes.
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Light {
    /// Position in whatever space the shader lights in; eye space once
    /// passed through `to_eye_space`.
    pub world_position: [f32; 3],
    pub _pad0: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
}

impl Light {
    pub fn new(world_position: Vec3, color: Vec3) -> Self {
        Self {
            world_position: world_position.to_array(),
            color: color.to_array(),
            ..Self::zeroed()
        }
    }

    /// The shader lights in eye space, so positions go through the view matrix.
    pub fn to_eye_space(&self, view: Mat4) -> Self {
        let position = view.transform_point3(Vec3::from_array(self.world_position));
        Self {
            world_position: position.to_array(),
            ..*self
        }
    }
}

impl UniformLayout for Light {
    const NAME: &'static str = "Light";
    const FIELDS: &'static [FieldLayout] = &[
        FieldLayout::new("world_position", offset_of!(Light, world_position), 12, 16),
        FieldLayout::new("color", offset_of!(Light, color), 12, 16),
    ];
}

/// Per-draw fragment stage shading inputs (144 bytes).
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FragmentUniforms {
    /// Not read by the bundled shader; part of the layout for shaders that light in world space.
    pub camera_world_position: [f32; 3],
    pub _pad0: f32,
    pub ambient_light: [f32; 3],
    pub _pad1: f32,
    pub specular_color: [f32; 3],
    pub specular_power: f32, // fills the vec3 tail, as WGSL lays it out
    pub lights: [Light; MAX_LIGHTS],
}

impl Default for FragmentUniforms {
    fn default() -> Self {
        Self {
            specular_color: [1.0, 1.0, 1.0],
            specular_power: 1.0,
            ..Self::zeroed()
        }
    }
}

impl FragmentUniforms {
    pub fn with_light(mut self, index: usize, light: Light) -> Result<Self, UniformError> {
        let slot = self
            .lights
            .get_mut(index)
            .ok_or(UniformError::LightIndex(index))?;
        *slot = light;
        Ok(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, UniformError> {
        read_exact(bytes)
    }
}

impl UniformLayout for FragmentUniforms {
    const NAME: &'static str = "FragmentUniforms";
    const FIELDS: &'static [FieldLayout] = &[
        FieldLayout::new(
            "camera_world_position",
            offset_of!(FragmentUniforms, camera_world_position),
            12,
            16,
        ),
        FieldLayout::new("ambient_light", offset_of!(FragmentUniforms, ambient_light), 12, 16),
        FieldLayout::new("specular_color", offset_of!(FragmentUniforms, specular_color), 12, 16),
        FieldLayout::new("specular_power", offset_of!(FragmentUniforms, specular_power), 4, 4),
        FieldLayout::new(
            "lights",
            offset_of!(FragmentUniforms, lights),
            size_of::<Light>() * MAX_LIGHTS,
            16,
        ),
    ];
}

fn pad_mat3(m: Mat3) -> [[f32; 4]; 3] {
    [
        m.x_axis.extend(0.0).to_array(),
        m.y_axis.extend(0.0).to_array(),
        m.z_axis.extend(0.0).to_array(),
    ]
}

fn read_exact<T: Pod>(bytes: &[u8]) -> Result<T, UniformError> {
    let expected = size_of::<T>();
    if bytes.len() != expected {
        return Err(UniformError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
}
