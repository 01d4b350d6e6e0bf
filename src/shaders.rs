//! WGSL source for the uniform structs.

/// Declarations of `VertexUniforms`, `Light` and `FragmentUniforms`, plus the
/// `vs_main` / `fs_main` entry points that read them.
pub const UNIFORMS_WGSL: &str = include_str!("shaders/uniforms.wgsl");

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

pub const VERTEX_UNIFORMS_BINDING: u32 = 0;
pub const FRAGMENT_UNIFORMS_BINDING: u32 = 1;
