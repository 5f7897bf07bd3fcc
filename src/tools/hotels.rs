use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use crate::errors::ToolResult;
use crate::models::PlaceQuery;
use crate::repositories::GoogleMapsRepo;
use crate::tools::common::{
    default_radius, describe_business_status, place_query, present, search_and_summarize,
    PlaceSummary,
};
use crate::tools::traits::{parse_arguments, Tool};

#[derive(Clone, Deserialize, Debug)]
pub struct HotelSearch {
    pub area: String,
    pub hotel_type: Option<String>,
    pub price_level: Option<String>,
    pub rating_min: Option<f64>,
    #[serde(default = "default_radius")]
    pub radius: u32,
}

impl HotelSearch {
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            hotel_type: None,
            price_level: None,
            rating_min: None,
            radius: default_radius(),
        }
    }

    pub fn to_query(&self) -> PlaceQuery {
        let mut query = format!("hotels in {}", self.area);
        if let Some(hotel_type) = present(&self.hotel_type) {
            query.push(' ');
            query.push_str(hotel_type);
        }
        place_query(query, "lodging", self.radius, self.price_level.as_deref())
    }
}

pub struct HotelSearchTool {
    repo: Arc<GoogleMapsRepo>,
}

impl HotelSearchTool {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        Self { repo }
    }

    pub async fn search(&self, input: &HotelSearch) -> ToolResult<String> {
        debug!("Searching hotels in {}", input.area);
        let kind = present(&input.hotel_type).unwrap_or("hotel");

        search_and_summarize(&self.repo, input.to_query(), input.rating_min, |place| {
            PlaceSummary {
                business_status: Some(describe_business_status(place.business_status.as_deref())),
                ..PlaceSummary::new("hotel", place, format!("Great {} in {}", kind, input.area))
            }
        })
        .await
    }
}

#[async_trait]
impl Tool for HotelSearchTool {
    fn name(&self) -> &'static str {
        "search_hotels"
    }

    fn description(&self) -> &'static str {
        "Search for hotels in an area, optionally by hotel type, price range and minimum rating"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area": {
                    "type": "string",
                    "description": "Area name, such as \"Shinjuku\", \"Tokyo\", \"London\""
                },
                "hotel_type": {
                    "type": "string",
                    "description": "Hotel type, such as \"luxury\", \"budget\", \"business\", \"resort\""
                },
                "price_level": {
                    "type": "string",
                    "description": "Price range on the 0-4 scale, such as \"2-3\" (mid-range)"
                },
                "rating_min": {
                    "type": "number",
                    "description": "Minimum rating, such as 4.0"
                },
                "radius": {
                    "type": "integer",
                    "description": "Search radius in meters",
                    "default": 5000
                }
            },
            "required": ["area"]
        })
    }

    fn action(&self) -> &'static str {
        "search hotels"
    }

    async fn execute(&self, arguments: Value) -> ToolResult<String> {
        let input: HotelSearch = parse_arguments(arguments)?;
        self.search(&input).await
    }
}
