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
pub struct RestaurantSearch {
    pub area: String,
    pub cuisine: Option<String>,
    pub price_level: Option<String>,
    pub rating_min: Option<f64>,
    #[serde(default = "default_radius")]
    pub radius: u32,
}

impl RestaurantSearch {
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            cuisine: None,
            price_level: None,
            rating_min: None,
            radius: default_radius(),
        }
    }

    pub fn to_query(&self) -> PlaceQuery {
        let query = match present(&self.cuisine) {
            Some(cuisine) => format!("{} restaurant in {}", cuisine, self.area),
            None => format!("restaurant in {}", self.area),
        };
        place_query(query, "restaurant", self.radius, self.price_level.as_deref())
    }
}

pub struct RestaurantSearchTool {
    repo: Arc<GoogleMapsRepo>,
}

impl RestaurantSearchTool {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        Self { repo }
    }

    pub async fn search(&self, input: &RestaurantSearch) -> ToolResult<String> {
        debug!("Searching restaurants in {}", input.area);
        let cuisine = present(&input.cuisine).unwrap_or("restaurant");

        search_and_summarize(&self.repo, input.to_query(), input.rating_min, |place| {
            PlaceSummary {
                cuisine_type: Some(cuisine.to_string()),
                business_status: Some(describe_business_status(place.business_status.as_deref())),
                ..PlaceSummary::new(
                    "restaurant",
                    place,
                    format!("Great {} in {}", cuisine, input.area),
                )
            }
        })
        .await
    }
}

#[async_trait]
impl Tool for RestaurantSearchTool {
    fn name(&self) -> &'static str {
        "search_restaurants"
    }

    fn description(&self) -> &'static str {
        "Search for restaurants in an area, optionally by cuisine, price range and minimum rating"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area": {
                    "type": "string",
                    "description": "Area name, such as \"Shibuya\", \"Shinjuku\", \"New York\""
                },
                "cuisine": {
                    "type": "string",
                    "description": "Cuisine type, such as \"sushi\", \"ramen\", \"tempura\""
                },
                "price_level": {
                    "type": "string",
                    "description": "Price range on the 0-4 scale, such as \"0-2\" (budget) or \"3-4\" (high-end)"
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
        "search restaurants"
    }

    async fn execute(&self, arguments: Value) -> ToolResult<String> {
        let input: RestaurantSearch = parse_arguments(arguments)?;
        self.search(&input).await
    }
}
