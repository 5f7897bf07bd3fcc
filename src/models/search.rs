use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::location::LatLng;

pub const DEFAULT_SEARCH_RADIUS: u32 = 5000;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    #[default]
    Prominence,
    Distance,
}

/// A place search as callers describe it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceQuery {
    pub query: String,
    pub location: Option<LatLng>,
    pub radius: u32,
    pub place_type: Option<String>,
    pub language: Option<String>,
    pub min_price: Option<u8>,
    pub max_price: Option<u8>,
    pub open_now: Option<bool>,
    pub rank_by: Option<RankBy>,
    pub page_token: Option<String>,
}

impl PlaceQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
            radius: DEFAULT_SEARCH_RADIUS,
            place_type: None,
            language: None,
            min_price: None,
            max_price: None,
            open_now: None,
            rank_by: None,
            page_token: None,
        }
    }

    pub fn to_params(&self) -> PlaceSearchParams {
        PlaceSearchParams::from(self)
    }
}

/// Query string parameters sent to the text search endpoint. Unset fields are
/// left out of the request entirely.
#[skip_serializing_none]
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct PlaceSearchParams {
    pub query: String,
    pub location: Option<String>,
    pub radius: Option<u32>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub language: Option<String>,
    pub minprice: Option<u8>,
    pub maxprice: Option<u8>,
    pub opennow: Option<bool>,
    pub rankby: Option<RankBy>,
    pub pagetoken: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl From<&PlaceQuery> for PlaceSearchParams {
    fn from(query: &PlaceQuery) -> Self {
        // The provider rejects a fixed radius combined with distance ranking.
        let radius = match query.rank_by {
            Some(RankBy::Distance) => None,
            _ if query.radius == 0 => None,
            _ => Some(query.radius),
        };

        PlaceSearchParams {
            query: query.query.clone(),
            location: query.location.map(|point| point.to_string()),
            radius,
            place_type: non_empty(&query.place_type),
            language: non_empty(&query.language),
            minprice: query.min_price,
            maxprice: query.max_price,
            opennow: query.open_now,
            rankby: query.rank_by,
            pagetoken: non_empty(&query.page_token),
        }
    }
}
