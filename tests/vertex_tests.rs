use std::mem::{offset_of, size_of};

use glam::Vec3;
use vertex_uniforms::vertex::{cube, Vertex};

#[test]
fn test_vertex_layout_matches_struct() {
    let layout = Vertex::layout();
    assert_eq!(layout.array_stride, 32);
    assert_eq!(layout.array_stride as usize, size_of::<Vertex>());

    let offsets: Vec<(u32, u64)> = layout
        .attributes
        .iter()
        .map(|attr| (attr.shader_location, attr.offset))
        .collect();
    assert_eq!(
        offsets,
        vec![
            (0, offset_of!(Vertex, position) as u64),
            (1, offset_of!(Vertex, normal) as u64),
            (2, offset_of!(Vertex, tex_coords) as u64),
        ]
    );
}

#[test]
fn test_cube_vertex_count() {
    assert_eq!(cube().len(), 36);
}

#[test]
fn test_cube_triangles_face_their_normals() {
    for triangle in cube().chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|i| Vec3::from_array(triangle[i].position));
        let normal = Vec3::from_array(triangle[0].normal);

        assert_eq!(normal.length(), 1.0);
        assert!(triangle.iter().all(|v| v.normal == triangle[0].normal));

        // Counter-clockwise when seen from outside.
        let winding = (b - a).cross(c - a).normalize();
        assert_eq!(winding, normal);
    }
}

#[test]
fn test_cube_positions_lie_on_their_face() {
    for vertex in cube() {
        let position = Vec3::from_array(vertex.position);
        let normal = Vec3::from_array(vertex.normal);
        assert_eq!(position.dot(normal), 1.0);
        assert_eq!(position.abs(), Vec3::ONE);
    }
}

#[test]
fn test_cube_texture_coordinates_stay_in_atlas() {
    for vertex in cube() {
        let [u, v] = vertex.tex_coords;
        assert!((0.0..=1.0).contains(&u));
        assert!((0.0..=0.75).contains(&v));
    }
}
