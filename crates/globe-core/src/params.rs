use crate::constants::*;

/// Scene tuning handed to [`crate::AppState::new`].
///
/// Everything defaults to the values in [`crate::constants`]; tests build
/// smaller scenes by overriding individual fields.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub globe_radius: f32,
    pub marker_width: f32,
    pub marker_min_depth: f32,
    pub dim_opacity: f32,
    pub highlight_opacity: f32,
    pub camera_fov_deg: f32,
    pub camera_z: f32,
    pub orbit_damping: f32,
    pub star_count: usize,
    /// Animate marker depth. Disabled in tests that need fixed geometry.
    pub pulse_enabled: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            marker_width: MARKER_WIDTH,
            marker_min_depth: MARKER_MIN_DEPTH,
            dim_opacity: DIM_OPACITY,
            highlight_opacity: HIGHLIGHT_OPACITY,
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_z: CAMERA_Z,
            orbit_damping: ORBIT_DAMPING,
            star_count: STAR_COUNT,
            pulse_enabled: true,
        }
    }
}
