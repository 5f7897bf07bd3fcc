use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resolved point with the provider's formatted address.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub place_id: Option<String>,
}

impl Location {
    pub fn coordinates(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Bare coordinates as the provider nests them under `geometry.location`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

#[derive(Deserialize, Debug)]
struct GeocodeRecord {
    geometry: Geometry,
    formatted_address: String,
    place_id: Option<String>,
}

impl TryFrom<Value> for Location {
    type Error = serde_json::Error;

    /// Parses one geocoding result record.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let record: GeocodeRecord = serde_json::from_value(value)?;

        Ok(Location {
            lat: record.geometry.location.lat,
            lng: record.geometry.location.lng,
            address: record.formatted_address,
            place_id: record.place_id,
        })
    }
}
