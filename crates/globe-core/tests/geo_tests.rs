// Host-side tests for the lat/lng projection.

use globe_core::geo::{angle_to_radians, project, surface_normal};
use glam::Vec3;

const R: f32 = 5.0;

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
}

#[test]
fn degrees_map_through_half_turn() {
    assert_eq!(angle_to_radians(0.0), 0.0);
    assert!((angle_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    assert!((angle_to_radians(-90.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn every_projected_point_lies_on_the_sphere() {
    for lat in (-90..=90).step_by(15) {
        for lng in (-180..=180).step_by(20) {
            let p = project(lat as f64, lng as f64, R);
            assert!(
                (p.length() - R).abs() < 1e-4,
                "({}, {}) projected to radius {}",
                lat,
                lng,
                p.length()
            );
        }
    }
}

#[test]
fn reference_points_land_on_expected_axes() {
    assert_vec_close(project(0.0, 0.0, R), Vec3::new(0.0, 0.0, R));
    assert_vec_close(project(90.0, 0.0, R), Vec3::new(0.0, R, 0.0));
    assert_vec_close(project(-90.0, 45.0, R), Vec3::new(0.0, -R, 0.0));
    assert_vec_close(project(0.0, 90.0, R), Vec3::new(R, 0.0, 0.0));
    assert_vec_close(project(0.0, -90.0, R), Vec3::new(-R, 0.0, 0.0));
    assert_vec_close(project(0.0, 180.0, R), Vec3::new(0.0, 0.0, -R));
}

#[test]
fn normals_are_unit_and_radial() {
    let n = surface_normal(35.0, 105.0);
    assert!((n.length() - 1.0).abs() < 1e-5);
    let p = project(35.0, 105.0, R);
    assert!(n.dot(p.normalize()) > 0.9999);
}
