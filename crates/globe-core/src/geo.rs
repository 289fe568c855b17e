use glam::Vec3;
use std::f64::consts::PI;

/// Degrees to radians as used for both axes of the projection.
///
/// Latitude and longitude go through the same `/ 180 * PI` mapping. Marker
/// positions depend on this exact formula; keep it in step with the globe
/// texture orientation ([`crate::constants::GLOBE_ROTATION_Y`]).
#[inline]
pub fn angle_to_radians(deg: f64) -> f64 {
    deg / 180.0 * PI
}

/// Project latitude/longitude (degrees) onto a sphere of `radius`.
///
/// `(0, 0)` maps to `(0, 0, radius)`, north is +Y and positive longitude
/// moves towards +X.
#[inline]
pub fn project(lat_deg: f64, lng_deg: f64, radius: f32) -> Vec3 {
    let lat = angle_to_radians(lat_deg);
    let lng = angle_to_radians(lng_deg);
    let r = radius as f64;
    Vec3::new(
        (r * lat.cos() * lng.sin()) as f32,
        (r * lat.sin()) as f32,
        (r * lat.cos() * lng.cos()) as f32,
    )
}

/// Unit normal at a projected point.
#[inline]
pub fn surface_normal(lat_deg: f64, lng_deg: f64) -> Vec3 {
    project(lat_deg, lng_deg, 1.0).normalize()
}
