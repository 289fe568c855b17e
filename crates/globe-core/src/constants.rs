// Shared scene/interaction tuning constants used by the web frontend.

// Globe
pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_SEGMENTS: u32 = 50;
pub const GLOBE_ROTATION_Y: f32 = -std::f32::consts::FRAC_PI_2; // aligns the texture with the projection
pub const ATMOSPHERE_SCALE: f32 = 1.1;
pub const ATMOSPHERE_COLOR: [f32; 3] = [0.3, 0.6, 1.0];

// Markers
pub const MARKER_WIDTH: f32 = 0.2;
pub const MARKER_MIN_DEPTH: f32 = 0.4; // keeps tiny populations visible
pub const POPULATION_DEPTH_FACTOR: f32 = 0.8;
pub const POPULATION_UNIT: f64 = 1_000_000_000.0;
pub const MARKER_COLOR: [f32; 3] = [0x3B as f32 / 255.0, 0xF7 as f32 / 255.0, 1.0]; // #3BF7FF

// Highlight
pub const DIM_OPACITY: f32 = 0.4;
pub const HIGHLIGHT_OPACITY: f32 = 1.0;

// Pulse (depth-scale yoyo)
pub const PULSE_LEG_SEC: f32 = 2.0;
pub const PULSE_MAX_DELAY_SEC: f32 = 3.0;
pub const PULSE_MAX_SCALE: f32 = 0.8;
pub const PULSE_MIN_SCALE: f32 = 0.05;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 6.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Layout
pub const LAYOUT_BREAKPOINT_PX: f64 = 500.0; // stacked mobile layout at or below this width

// Stars
pub const STAR_COUNT: usize = 10_000;
pub const STAR_SPREAD: f32 = 2000.0;
pub const STAR_SIZE: f32 = 1.0;

// Remote textures
pub const GLOBE_TEXTURE_URL: &str =
    "https://res.cloudinary.com/dxxx1wdbm/image/upload/v1653302568/threejs/globe_sxzp7e.jpg";
pub const STAR_TEXTURE_URL: &str =
    "https://res.cloudinary.com/dxxx1wdbm/image/upload/v1653302568/threejs/star_qbpaxl.png";
