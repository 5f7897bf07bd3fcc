use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use crate::models::location::{LatLng, Location};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    #[default]
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "bicycling" => Ok(TravelMode::Bicycling),
            "transit" => Ok(TravelMode::Transit),
            other => Err(format!("Unsupported travel mode: {}", other)),
        }
    }
}

/// The first leg of the first itinerary the provider returned.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RouteInfo {
    pub origin: Location,
    pub destination: Location,
    pub distance: String,
    pub duration: String,
    pub steps: Vec<Value>,
    pub polyline: String,
}

#[derive(Deserialize, Debug)]
struct RouteRecord {
    legs: Vec<LegRecord>,
    overview_polyline: PolylineRecord,
}

#[derive(Deserialize, Debug)]
struct LegRecord {
    start_location: LatLng,
    end_location: LatLng,
    start_address: String,
    end_address: String,
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    steps: Vec<Value>,
}

#[derive(Deserialize, Debug)]
struct TextValue {
    text: String,
}

#[derive(Deserialize, Debug)]
struct PolylineRecord {
    points: String,
}

#[derive(Error, Debug)]
pub enum RouteParseError {
    #[error("{0}")]
    Record(#[from] serde_json::Error),

    #[error("route has no legs")]
    NoLegs,
}

impl TryFrom<Value> for RouteInfo {
    type Error = RouteParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let record: RouteRecord = serde_json::from_value(value)?;
        let leg = record
            .legs
            .into_iter()
            .next()
            .ok_or(RouteParseError::NoLegs)?;

        Ok(RouteInfo {
            origin: Location {
                lat: leg.start_location.lat,
                lng: leg.start_location.lng,
                address: leg.start_address,
                place_id: None,
            },
            destination: Location {
                lat: leg.end_location.lat,
                lng: leg.end_location.lng,
                address: leg.end_address,
                place_id: None,
            },
            distance: leg.distance.text,
            duration: leg.duration.text,
            steps: leg.steps,
            polyline: record.overview_polyline.points,
        })
    }
}
