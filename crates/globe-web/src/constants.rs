// DOM hooks and GPU settings for the web frontend.

// Page structure
pub const CONTAINER_SELECTOR: &str = ".right"; // render container; canvas fills it
pub const CANVAS_SELECTOR: &str = "canvas";
pub const POPUP_ID: &str = "popup";
pub const COUNTRY_NAME_IDS: [&str; 2] = ["countryName", "country"];
pub const POPULATION_IDS: [&str; 2] = ["population-number", "population-number-2"];
pub const FLAG_ID: &str = "flag"; // optional <img>

pub const DEFAULT_LOCALE: &str = "en-US";

// GPU
pub const MSAA_SAMPLES: u32 = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const MAX_TEXTURE_DIM: u32 = 8192;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

// Bound until the remote images arrive (or if they never do)
pub const GLOBE_PLACEHOLDER_RGBA: [u8; 4] = [30, 60, 120, 255];
pub const STAR_PLACEHOLDER_RGBA: [u8; 4] = [255, 255, 255, 255];
