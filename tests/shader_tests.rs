use std::path::Path;

use naga::{proc::Layouter, Module, TypeInner};
use vertex_uniforms::{
    shaders::{
        FRAGMENT_ENTRY_POINT, FRAGMENT_UNIFORMS_BINDING, UNIFORMS_WGSL, VERTEX_ENTRY_POINT,
        VERTEX_UNIFORMS_BINDING,
    },
    FragmentUniforms, Light, UniformLayout, VertexUniforms,
};

fn parse_shader() -> Module {
    naga::front::wgsl::parse_str(UNIFORMS_WGSL).expect("uniforms.wgsl should parse")
}

/// Checks every member of the WGSL struct `T::NAME` against the Rust table.
fn assert_matches_shader<T: UniformLayout>(module: &Module, layouter: &Layouter) {
    let (_, ty) = module
        .types
        .iter()
        .find(|(_, ty)| ty.name.as_deref() == Some(T::NAME))
        .unwrap_or_else(|| panic!("shader should declare struct {}", T::NAME));

    let TypeInner::Struct { members, span } = &ty.inner else {
        panic!("{} should be a struct", T::NAME);
    };

    assert_eq!(
        *span as usize,
        std::mem::size_of::<T>(),
        "{} size differs between Rust and WGSL",
        T::NAME
    );
    assert_eq!(members.len(), T::FIELDS.len(), "{} member count", T::NAME);

    for (member, field) in members.iter().zip(T::FIELDS) {
        assert_eq!(member.name.as_deref(), Some(field.name), "{} member order", T::NAME);
        assert_eq!(
            member.offset as usize, field.offset,
            "{}.{} offset",
            T::NAME, field.name
        );
        assert_eq!(
            layouter[member.ty].size as usize, field.size,
            "{}.{} size",
            T::NAME, field.name
        );
    }
}

#[test]
fn test_shader_file_exists() {
    let shader_path = Path::new("src/shaders/uniforms.wgsl");
    assert!(shader_path.exists(), "Shader file should exist at {:?}", shader_path);
}

#[test]
fn test_shader_validates() {
    let module = parse_shader();
    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .expect("uniforms.wgsl should validate");
}

#[test]
fn test_shader_entry_points() {
    let module = parse_shader();
    let names: Vec<&str> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&VERTEX_ENTRY_POINT), "missing {VERTEX_ENTRY_POINT}");
    assert!(names.contains(&FRAGMENT_ENTRY_POINT), "missing {FRAGMENT_ENTRY_POINT}");
}

#[test]
fn test_rust_layouts_match_shader() {
    let module = parse_shader();
    let mut layouter = Layouter::default();
    layouter
        .update(module.to_ctx())
        .expect("shader types should have a layout");

    assert_matches_shader::<VertexUniforms>(&module, &layouter);
    assert_matches_shader::<Light>(&module, &layouter);
    assert_matches_shader::<FragmentUniforms>(&module, &layouter);
}

#[test]
fn test_uniform_bindings() {
    let module = parse_shader();
    let binding_of = |name: &str| {
        module
            .global_variables
            .iter()
            .find(|(_, var)| var.name.as_deref() == Some(name))
            .and_then(|(_, var)| var.binding.clone())
            .map(|binding| (binding.group, binding.binding))
    };

    assert_eq!(binding_of("vertex_uniforms"), Some((0, VERTEX_UNIFORMS_BINDING)));
    assert_eq!(binding_of("fragment_uniforms"), Some((0, FRAGMENT_UNIFORMS_BINDING)));
}

#[test]
fn test_shader_uses_every_vertex_matrix() {
    assert!(UNIFORMS_WGSL.contains("vertex_uniforms.model_view_matrix"));
    assert!(UNIFORMS_WGSL.contains("vertex_uniforms.projection_matrix"));
    assert!(UNIFORMS_WGSL.contains("vertex_uniforms.normal_matrix"));
}
