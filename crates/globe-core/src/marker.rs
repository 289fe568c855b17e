use crate::constants::{POPULATION_DEPTH_FACTOR, POPULATION_UNIT};
use crate::country::{CountryRecord, ValidCountry};
use crate::format::{format_population, NumberFormat};
use crate::geo;
use crate::params::SceneParams;
use crate::pulse::PulseTrack;
use crate::state::PopupContent;
use glam::{Mat3, Mat4, Quat, Vec3};
use rand::Rng;

/// One country's column on the globe.
///
/// `position` is the base point on the sphere surface. The body is a box of
/// `width x width x extent()` that starts at the base and grows outward
/// along `outward`.
#[derive(Clone, Debug)]
pub struct Marker {
    pub country: String,
    pub population: u64,
    pub population_display: String,
    pub flag_url: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub position: Vec3,
    pub outward: Vec3,
    pub orientation: Quat,
    pub width: f32,
    /// Base depth from population, already clamped to the minimum.
    pub depth: f32,
    /// Animated multiplier on `depth`.
    pub depth_scale: f32,
    pub opacity: f32,
    pub pickable: bool,
    pub pulse: PulseTrack,
}

#[inline]
pub fn marker_depth(population: u64, min_depth: f32) -> f32 {
    let scaled = POPULATION_DEPTH_FACTOR as f64 * population as f64 / POPULATION_UNIT;
    (scaled as f32).max(min_depth)
}

/// Rotation whose local +Z is `outward`, keeping world +Y as up where
/// possible (look-at away from the centre).
pub fn outward_orientation(outward: Vec3) -> Quat {
    let z = outward.normalize();
    let up = if z.cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

impl Marker {
    pub fn from_country(
        country: &ValidCountry<'_>,
        params: &SceneParams,
        format: &NumberFormat,
        pulse: PulseTrack,
    ) -> Self {
        let position = geo::project(country.lat, country.lng, params.globe_radius);
        let outward = position.normalize();
        Self {
            country: country.name.to_string(),
            population: country.population,
            population_display: format_population(country.population, format),
            flag_url: country.flag_url.map(str::to_string),
            lat: country.lat,
            lng: country.lng,
            position,
            outward,
            orientation: outward_orientation(outward),
            width: params.marker_width,
            depth: marker_depth(country.population, params.marker_min_depth),
            depth_scale: 1.0,
            opacity: params.dim_opacity,
            pickable: true,
            pulse,
        }
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        self.depth * self.depth_scale
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.position + self.outward * (self.extent() * 0.5)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width * 0.5, self.width * 0.5, self.extent() * 0.5)
    }

    /// Transform for a unit cube centred on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.width, self.width, self.extent()),
            self.orientation,
            self.center(),
        )
    }

    pub fn popup_content(&self) -> PopupContent {
        PopupContent {
            country: self.country.clone(),
            population_display: self.population_display.clone(),
            flag_url: self.flag_url.clone(),
        }
    }
}

/// Build markers for every record that validates; the rest are logged and
/// skipped. One pulse track is drawn from `rng` per kept marker.
pub fn build_markers<R: Rng + ?Sized>(
    records: &[CountryRecord],
    params: &SceneParams,
    format: &NumberFormat,
    rng: &mut R,
) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        match record.validate(i) {
            Ok(country) => {
                let pulse = if params.pulse_enabled {
                    PulseTrack::random(rng)
                } else {
                    PulseTrack::still()
                };
                markers.push(Marker::from_country(&country, params, format, pulse));
            }
            Err(e) => log::warn!("[markers] skipping record: {}", e),
        }
    }
    markers
}
