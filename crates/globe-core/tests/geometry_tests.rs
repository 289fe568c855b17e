// Host-side tests for the generated meshes and star field.

use globe_core::mesh::{unit_box, uv_sphere, MeshData};
use globe_core::stars::generate_stars;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn triangles(mesh: &MeshData) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    mesh.indices.chunks_exact(3).map(|t| {
        [0, 1, 2].map(|k| Vec3::from_array(mesh.vertices[t[k] as usize].position))
    })
}

#[test]
fn sphere_has_expected_counts() {
    let mesh = uv_sphere(5.0, 50, 50);
    assert_eq!(mesh.vertices.len(), 51 * 51);
    assert_eq!(mesh.indices.len(), 6 * 50 * 49);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn sphere_vertices_lie_on_the_radius() {
    let mesh = uv_sphere(5.0, 50, 50);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!((p.length() - 5.0).abs() < 1e-4);
        // pole rows are shifted half a segment in u
        assert!(v.uv[0] >= -0.01 - 1e-6 && v.uv[0] <= 1.01 + 1e-6);
        assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
    }
    let top = Vec3::from_array(mesh.vertices[0].position);
    assert!((top - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-4);
}

#[test]
fn sphere_triangles_face_outward() {
    let mesh = uv_sphere(5.0, 50, 50);
    for [a, b, c] in triangles(&mesh) {
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0, "inward triangle at {:?}", centroid);
    }
}

#[test]
fn box_is_a_unit_cube_with_outward_faces() {
    let mesh = unit_box();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        assert!(v.position.iter().all(|c| c.abs() == 0.5));
    }
    for [a, b, c] in triangles(&mesh) {
        let n = (b - a).cross(c - a);
        assert!(n.dot((a + b + c) / 3.0) > 0.0);
    }
}

#[test]
fn stars_fill_the_box_behind_the_globe() {
    let mut rng = StdRng::seed_from_u64(11);
    let stars = generate_stars(10_000, 2000.0, &mut rng);
    assert_eq!(stars.len(), 10_000);
    for s in &stars {
        assert!(s.x >= -1000.0 && s.x < 1000.0);
        assert!(s.y >= -1000.0 && s.y < 1000.0);
        assert!(s.z <= 0.0 && s.z > -2000.0);
    }
    assert!(generate_stars(0, 2000.0, &mut rng).is_empty());
}

#[test]
fn star_fields_are_reproducible_from_a_seed() {
    let a = generate_stars(100, 2000.0, &mut StdRng::seed_from_u64(5));
    let b = generate_stars(100, 2000.0, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
}
