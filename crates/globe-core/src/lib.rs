pub mod camera;
pub mod constants;
pub mod country;
pub mod error;
pub mod format;
pub mod geo;
pub mod input;
pub mod marker;
pub mod mesh;
pub mod params;
pub mod picking;
pub mod pulse;
pub mod stars;
pub mod state;

pub use camera::*;
pub use constants::*;
pub use country::*;
pub use error::{Error, Result};
pub use format::*;
pub use input::*;
pub use marker::*;
pub use params::*;
pub use picking::*;
pub use pulse::*;
pub use state::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static ATMOSPHERE_WGSL: &str = include_str!("../shaders/atmosphere.wgsl");
pub static MARKERS_WGSL: &str = include_str!("../shaders/markers.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
