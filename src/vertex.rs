//! Interleaved mesh vertex matching `VertexInput` in the shader.

use bytemuck::{Pod, Zeroable};

/// 32-byte vertex: position, normal, texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// One face: four corners (top-left, bottom-left, bottom-right, top-right)
// with a shared normal and the face's cell in the 4x3 cross texture atlas.
struct Face {
    corners: [[f32; 3]; 4],
    normal: [f32; 3],
    uv_origin: [f32; 2],
}

const CELL: f32 = 0.25;

const FACES: [Face; 6] = [
    // Front
    Face {
        corners: [[-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]],
        normal: [0.0, 0.0, 1.0],
        uv_origin: [0.25, 0.25],
    },
    // Left
    Face {
        corners: [[-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0]],
        normal: [-1.0, 0.0, 0.0],
        uv_origin: [0.0, 0.25],
    },
    // Right
    Face {
        corners: [[1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0]],
        normal: [1.0, 0.0, 0.0],
        uv_origin: [0.5, 0.25],
    },
    // Top
    Face {
        corners: [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        normal: [0.0, 1.0, 0.0],
        uv_origin: [0.25, 0.0],
    },
    // Bottom
    Face {
        corners: [[-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0]],
        normal: [0.0, -1.0, 0.0],
        uv_origin: [0.25, 0.5],
    },
    // Back
    Face {
        corners: [[1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]],
        normal: [0.0, 0.0, -1.0],
        uv_origin: [0.75, 0.25],
    },
];

/// Unit-extent cube (corners at ±1), 36 vertices as a triangle list.
pub fn cube() -> Vec<Vertex> {
    FACES
        .iter()
        .flat_map(|face| {
            let [u, v] = face.uv_origin;
            let uvs = [[u, v], [u, v + CELL], [u + CELL, v + CELL], [u + CELL, v]];
            let corner = |i: usize| Vertex::new(face.corners[i], face.normal, uvs[i]);
            [0, 1, 2, 0, 2, 3].map(corner)
        })
        .collect()
}
