/// Errors raised while turning country data into markers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("country data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("country record {index} has no common name")]
    MissingName { index: usize },
    #[error("country {name:?} has no latitude/longitude pair")]
    MissingCoordinates { name: String },
    #[error("country {name:?} has non-finite coordinates ({lat}, {lng})")]
    NonFiniteCoordinates { name: String, lat: f64, lng: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
