use serde::Serialize;
use crate::errors::ToolResult;
use crate::models::{filter_by_rating, LatLng, OpeningHours, PlaceInfo, PlaceQuery};
use crate::repositories::GoogleMapsRepo;

pub const RESULT_LANGUAGE: &str = "en";
pub const MAX_PRICE_LEVEL: u8 = 4;
pub const MAX_CATEGORY_TAGS: usize = 3;

pub(crate) fn default_radius() -> u32 {
    crate::models::DEFAULT_SEARCH_RADIUS
}

/// Parses a `"<min>-<max>"` price range. Anything malformed or outside the
/// provider's 0-4 scale yields `None` and the price filter is left off.
pub fn parse_price_level(price_level: Option<&str>) -> Option<(u8, u8)> {
    let (min, max) = price_level?.split_once('-')?;
    let min: u8 = min.trim().parse().ok()?;
    let max: u8 = max.trim().parse().ok()?;

    if min > MAX_PRICE_LEVEL || max > MAX_PRICE_LEVEL || min > max {
        return None;
    }
    Some((min, max))
}

/// Treats blank strings the same as a missing argument.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn describe_business_status(status: Option<&str>) -> &'static str {
    match status {
        Some("CLOSED_TEMPORARILY") => "Temporarily closed",
        Some("CLOSED_PERMANENTLY") => "Permanently closed",
        _ => "Operating",
    }
}

/// Compact record handed to the agent for one place.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: LatLng,
    pub operating_hours: &'static str,
    pub opening_hours: OpeningHours,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recommendation_reason: String,
    pub place_id: Option<String>,
    pub types: Vec<String>,
    pub photos: usize,
}

impl PlaceSummary {
    pub fn new(kind: &'static str, place: &PlaceInfo, recommendation_reason: String) -> Self {
        PlaceSummary {
            kind,
            name: place.name.clone(),
            address: place.address.clone(),
            rating: place.rating,
            price_level: place.price_level,
            cuisine_type: None,
            phone: place.phone.clone(),
            website: place.website.clone(),
            location: place.location.coordinates(),
            operating_hours: if place.is_open_now() { "Open now" } else { "Closed" },
            opening_hours: place.opening_hours.clone().unwrap_or_default(),
            business_status: None,
            description: None,
            recommendation_reason,
            place_id: place.location.place_id.clone(),
            types: place.types.iter().take(MAX_CATEGORY_TAGS).cloned().collect(),
            photos: place.photos.len(),
        }
    }
}

/// Shared flow of the place search tools: query the provider, apply the
/// rating threshold locally, shape each place and encode the list.
pub(crate) async fn search_and_summarize<F>(
    repo: &GoogleMapsRepo,
    query: PlaceQuery,
    rating_min: Option<f64>,
    summarize: F,
) -> ToolResult<String>
where
    F: Fn(&PlaceInfo) -> PlaceSummary,
{
    let places = repo.try_search_places(&query).await?;
    let summaries: Vec<PlaceSummary> = filter_by_rating(places, rating_min)
        .iter()
        .map(summarize)
        .collect();

    Ok(serde_json::to_string(&summaries)?)
}

/// Fills the price bounds and result language shared by the place search tools.
pub(crate) fn place_query(
    query: String,
    place_type: &str,
    radius: u32,
    price_level: Option<&str>,
) -> PlaceQuery {
    let price_range = parse_price_level(price_level);

    PlaceQuery {
        place_type: Some(place_type.to_string()),
        language: Some(RESULT_LANGUAGE.to_string()),
        radius,
        min_price: price_range.map(|(min, _)| min),
        max_price: price_range.map(|(_, max)| max),
        ..PlaceQuery::new(query)
    }
}
