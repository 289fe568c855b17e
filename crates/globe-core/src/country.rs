//! Country records as shipped in `data/countries.json`.
//!
//! The file follows the REST Countries layout, of which only the fields
//! below are read. Every field is optional at the serde level, and an
//! explicit `null` reads the same as an absent key, so one bad record never
//! rejects the whole list; [`CountryRecord::validate`] decides per record
//! whether it can become a marker.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};

pub static COUNTRIES_JSON: &str = include_str!("../data/countries.json");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CountryName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub name: Option<CountryName>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latlng: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<Option<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The subset of a record that survived validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidCountry<'a> {
    pub name: &'a str,
    pub population: u64,
    pub lat: f64,
    pub lng: f64,
    pub flag_url: Option<&'a str>,
}

impl CountryRecord {
    /// `index` is the record's position in the source list, used for
    /// reporting records that have no name to report.
    pub fn validate(&self, index: usize) -> Result<ValidCountry<'_>> {
        let name = self
            .name
            .as_ref()
            .map(|n| n.common.trim())
            .filter(|n| !n.is_empty())
            .ok_or(Error::MissingName { index })?;
        let (lat, lng) = match self.latlng.as_slice() {
            [Some(lat), Some(lng), ..] => (*lat, *lng),
            _ => {
                return Err(Error::MissingCoordinates {
                    name: name.to_string(),
                })
            }
        };
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::NonFiniteCoordinates {
                name: name.to_string(),
                lat,
                lng,
            });
        }
        Ok(ValidCountry {
            name,
            population: self.population,
            lat,
            lng,
            flag_url: self
                .flags
                .iter()
                .flatten()
                .map(|f| f.trim())
                .find(|f| !f.is_empty()),
        })
    }
}

pub fn parse_countries(json: &str) -> Result<Vec<CountryRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn bundled_countries() -> Result<Vec<CountryRecord>> {
    parse_countries(COUNTRIES_JSON)
}
