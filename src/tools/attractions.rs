use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use crate::errors::ToolResult;
use crate::models::PlaceQuery;
use crate::repositories::GoogleMapsRepo;
use crate::tools::common::{default_radius, place_query, present, search_and_summarize, PlaceSummary};
use crate::tools::traits::{parse_arguments, Tool};

#[derive(Clone, Deserialize, Debug)]
pub struct AttractionSearch {
    pub area: String,
    pub attraction_type: Option<String>,
    pub price_level: Option<String>,
    pub rating_min: Option<f64>,
    #[serde(default = "default_radius")]
    pub radius: u32,
}

impl AttractionSearch {
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            attraction_type: None,
            price_level: None,
            rating_min: None,
            radius: default_radius(),
        }
    }

    pub fn to_query(&self) -> PlaceQuery {
        let mut query = format!("tourist attractions in {}", self.area);
        if let Some(attraction_type) = present(&self.attraction_type) {
            query.push(' ');
            query.push_str(attraction_type);
        }
        place_query(query, "tourist_attraction", self.radius, self.price_level.as_deref())
    }
}

pub struct AttractionSearchTool {
    repo: Arc<GoogleMapsRepo>,
}

impl AttractionSearchTool {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        Self { repo }
    }

    pub async fn search(&self, input: &AttractionSearch) -> ToolResult<String> {
        debug!("Searching attractions in {}", input.area);
        let kind = present(&input.attraction_type).unwrap_or("attraction");

        search_and_summarize(&self.repo, input.to_query(), input.rating_min, |place| {
            PlaceSummary {
                description: Some(format!("Popular {} in {}", kind, input.area)),
                ..PlaceSummary::new(
                    "attraction",
                    place,
                    format!("Highly rated {} in {}", kind, input.area),
                )
            }
        })
        .await
    }
}

#[async_trait]
impl Tool for AttractionSearchTool {
    fn name(&self) -> &'static str {
        "search_attractions"
    }

    fn description(&self) -> &'static str {
        "Search for tourist attractions in an area, optionally by attraction type, price range and minimum rating"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "area": {
                    "type": "string",
                    "description": "Area name, such as \"Asakusa\", \"Tokyo\", \"London\""
                },
                "attraction_type": {
                    "type": "string",
                    "description": "Attraction type, such as \"museum\", \"temple\", \"park\""
                },
                "price_level": {
                    "type": "string",
                    "description": "Price range on the 0-4 scale, such as \"0-2\""
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
        "search attractions"
    }

    async fn execute(&self, arguments: Value) -> ToolResult<String> {
        let input: AttractionSearch = parse_arguments(arguments)?;
        self.search(&input).await
    }
}
