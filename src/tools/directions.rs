use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::errors::{ToolError, ToolResult};
use crate::models::{Location, RouteInfo, TravelMode};
use crate::repositories::GoogleMapsRepo;
use crate::tools::common::present;
use crate::tools::traits::{parse_arguments, Tool};

pub const NO_ROUTE: &str = "Unable to get route information";

#[derive(Clone, Deserialize, Debug)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub mode: Option<String>,
}

impl DirectionsRequest {
    pub fn travel_mode(&self) -> ToolResult<TravelMode> {
        match present(&self.mode) {
            Some(mode) => mode.parse().map_err(ToolError::InvalidArguments),
            None => Ok(TravelMode::default()),
        }
    }
}

#[derive(Serialize)]
struct Endpoint<'a> {
    address: &'a str,
    lat: f64,
    lng: f64,
}

impl<'a> From<&'a Location> for Endpoint<'a> {
    fn from(location: &'a Location) -> Self {
        Endpoint {
            address: &location.address,
            lat: location.lat,
            lng: location.lng,
        }
    }
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    origin: Endpoint<'a>,
    destination: Endpoint<'a>,
    distance: &'a str,
    duration: &'a str,
    steps: &'a [Value],
    mode: TravelMode,
}

pub fn render_route(route: &RouteInfo, mode: TravelMode) -> ToolResult<String> {
    let summary = RouteSummary {
        origin: Endpoint::from(&route.origin),
        destination: Endpoint::from(&route.destination),
        distance: &route.distance,
        duration: &route.duration,
        steps: &route.steps,
        mode,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

pub struct DirectionsTool {
    repo: Arc<GoogleMapsRepo>,
}

impl DirectionsTool {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        Self { repo }
    }

    pub async fn directions(&self, request: &DirectionsRequest) -> ToolResult<String> {
        let mode = request.travel_mode()?;
        let route = self
            .repo
            .try_get_directions(&request.origin, &request.destination, mode)
            .await?;

        return match route {
            Some(route) => render_route(&route, mode),
            None => Ok(json!({ "error": NO_ROUTE }).to_string()),
        };
    }
}

#[async_trait]
impl Tool for DirectionsTool {
    fn name(&self) -> &'static str {
        "get_directions"
    }

    fn description(&self) -> &'static str {
        "Get a route from an origin to a destination"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Starting point, such as \"Tokyo Station\""
                },
                "destination": {
                    "type": "string",
                    "description": "Destination, such as \"Tokyo Tower\""
                },
                "mode": {
                    "type": "string",
                    "enum": ["transit", "driving", "walking", "bicycling"],
                    "default": "transit"
                }
            },
            "required": ["origin", "destination"]
        })
    }

    fn action(&self) -> &'static str {
        "get directions"
    }

    async fn execute(&self, arguments: Value) -> ToolResult<String> {
        let request: DirectionsRequest = parse_arguments(arguments)?;
        self.directions(&request).await
    }
}
