//! Host-side data contract for per-draw shader uniforms.
//!
//! `VertexUniforms` carries the model-view, projection and normal matrices in
//! the exact byte layout `shaders/uniforms.wgsl` declares. The rest of the
//! crate fills, stages, uploads and checks that layout.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod layout;
pub mod ring;
pub mod shaders;
pub mod transform;
pub mod uniforms;
pub mod vertex;

pub use camera::Camera;
pub use error::UniformError;
pub use layout::{FieldLayout, UniformLayout};
pub use ring::UniformRing;
pub use transform::{normal_matrix, ProjectionConfig};
pub use uniforms::{FragmentUniforms, Light, VertexUniforms};
