// Host-side tests for the perspective camera and orbit controls.

use globe_core::{
    Camera, OrbitControls, CAMERA_FOV_DEG, CAMERA_Z, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE,
};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

fn start_camera() -> Camera {
    Camera::perspective(CAMERA_FOV_DEG, 1.0, Vec3::new(0.0, 0.0, CAMERA_Z))
}

#[test]
fn centre_ray_looks_down_negative_z() {
    let cam = start_camera();
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-5);
    assert!((ray.at(CAMERA_Z) - Vec3::ZERO).length() < 1e-3);
}

#[test]
fn edge_rays_follow_the_field_of_view() {
    let cam = start_camera();
    let ray = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
    let half_fov = (CAMERA_FOV_DEG * 0.5).to_radians();
    let angle = ray.dir.angle_between(Vec3::NEG_Z);
    assert!((angle - half_fov).abs() < 1e-3);
    assert!(ray.dir.y > 0.0);
}

#[test]
fn resize_updates_aspect_and_ignores_empty_sizes() {
    let mut cam = start_camera();
    cam.set_viewport(800.0, 400.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0.0, 400.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn billboard_axes_are_orthonormal() {
    let cam = start_camera();
    let (right, up) = cam.billboard_axes();
    assert!((right - Vec3::X).length() < 1e-5);
    assert!((up - Vec3::Y).length() < 1e-5);
}

#[test]
fn controls_start_from_the_initial_eye() {
    let orbit = OrbitControls::new(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, ORBIT_DAMPING);
    assert!((orbit.distance() - CAMERA_Z).abs() < 1e-5);
    assert!(orbit.azimuth().abs() < 1e-6);
    assert!((orbit.polar() - PI / 2.0).abs() < 1e-6);

    let mut cam = start_camera();
    let mut orbit = orbit;
    orbit.update(&mut cam);
    assert!((cam.eye - Vec3::new(0.0, 0.0, CAMERA_Z)).length() < 1e-4);
}

#[test]
fn damped_rotation_converges_to_the_full_drag() {
    let mut cam = start_camera();
    let mut orbit = OrbitControls::new(cam.eye, Vec3::ZERO, ORBIT_DAMPING);
    orbit.drag(100.0, 0.0, 1000.0);

    orbit.update(&mut cam);
    let first = orbit.azimuth();
    assert!(first < 0.0 && first > -TAU * 0.1);

    for _ in 0..1000 {
        orbit.update(&mut cam);
    }
    assert!((orbit.azimuth() + TAU * 0.1).abs() < 1e-4);
    assert!((cam.eye.length() - CAMERA_Z).abs() < 1e-3);
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let mut cam = start_camera();
    let mut orbit = OrbitControls::new(cam.eye, Vec3::ZERO, 0.0);
    orbit.rotate_up(-10.0);
    orbit.update(&mut cam);
    assert!(orbit.polar() < PI && orbit.polar() > PI - 1e-3);
    assert!(cam.eye.is_finite());

    orbit.rotate_up(20.0);
    orbit.update(&mut cam);
    assert!(orbit.polar() > 0.0 && orbit.polar() < 1e-3);
    assert!(cam.eye.is_finite());
}

#[test]
fn zoom_is_clamped_to_the_distance_range() {
    let mut cam = start_camera();
    let mut orbit = OrbitControls::new(cam.eye, Vec3::ZERO, ORBIT_DAMPING);
    orbit.zoom(-1.0);
    orbit.update(&mut cam);
    assert!(orbit.distance() < CAMERA_Z);

    for _ in 0..100 {
        orbit.zoom(-120.0);
    }
    orbit.update(&mut cam);
    assert_eq!(orbit.distance(), ORBIT_MIN_DISTANCE);

    for _ in 0..100 {
        orbit.zoom(120.0);
    }
    orbit.update(&mut cam);
    assert_eq!(orbit.distance(), ORBIT_MAX_DISTANCE);
    assert!((cam.eye.length() - ORBIT_MAX_DISTANCE).abs() < 1e-3);
}
