use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::location::{Geometry, Location};

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    pub weekday_text: Option<Vec<String>>,
}

/// One place returned by the provider's search endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceInfo {
    pub name: String,
    pub address: String,
    pub location: Location,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    pub types: Vec<String>,
    pub photos: Vec<String>,
    pub opening_hours: Option<OpeningHours>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub business_status: Option<String>,
}

impl PlaceInfo {
    pub fn is_open_now(&self) -> bool {
        self.opening_hours
            .as_ref()
            .and_then(|hours| hours.open_now)
            .unwrap_or(false)
    }

    pub fn meets_rating(&self, rating_min: f64) -> bool {
        matches!(self.rating, Some(rating) if rating >= rating_min)
    }
}

/// Keeps the places rated at or above `rating_min`, in their original order.
/// Unrated places are dropped whenever a non-zero threshold is given; a
/// threshold of zero leaves the list untouched.
pub fn filter_by_rating(places: Vec<PlaceInfo>, rating_min: Option<f64>) -> Vec<PlaceInfo> {
    match rating_min {
        Some(rating_min) if rating_min != 0.0 => places
            .into_iter()
            .filter(|place| place.meets_rating(rating_min))
            .collect(),
        _ => places,
    }
}

#[derive(Deserialize, Debug)]
struct PlaceRecord {
    geometry: Geometry,
    #[serde(default)]
    name: String,
    #[serde(default)]
    formatted_address: String,
    place_id: Option<String>,
    rating: Option<f64>,
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<PhotoRecord>,
    opening_hours: Option<OpeningHours>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    business_status: Option<String>,
}

#[derive(Deserialize, Debug)]
struct PhotoRecord {
    #[serde(default)]
    photo_reference: String,
}

impl TryFrom<Value> for PlaceInfo {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let record: PlaceRecord = serde_json::from_value(value)?;

        let location = Location {
            lat: record.geometry.location.lat,
            lng: record.geometry.location.lng,
            address: record.formatted_address.clone(),
            place_id: record.place_id,
        };

        Ok(PlaceInfo {
            name: record.name,
            address: record.formatted_address,
            location,
            rating: record.rating,
            price_level: record.price_level,
            types: record.types,
            photos: record
                .photos
                .into_iter()
                .map(|photo| photo.photo_reference)
                .collect(),
            opening_hours: record.opening_hours,
            phone: record.formatted_phone_number,
            website: record.website,
            business_status: record.business_status,
        })
    }
}
