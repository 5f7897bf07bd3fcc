use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use crate::errors::ToolResult;
use crate::repositories::GoogleMapsRepo;
use crate::tools::traits::{parse_arguments, Tool};

pub const NO_ADDRESS: &str = "Unable to find this address";

#[derive(Clone, Deserialize, Debug)]
pub struct LocationLookup {
    pub address: String,
}

pub struct LocationInfoTool {
    repo: Arc<GoogleMapsRepo>,
}

impl LocationInfoTool {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        Self { repo }
    }

    pub async fn lookup(&self, request: &LocationLookup) -> ToolResult<String> {
        return match self.repo.try_geocode(&request.address).await? {
            Some(location) => Ok(serde_json::to_string_pretty(&location)?),
            None => Ok(json!({ "error": NO_ADDRESS }).to_string()),
        };
    }
}

#[async_trait]
impl Tool for LocationInfoTool {
    fn name(&self) -> &'static str {
        "get_location_info"
    }

    fn description(&self) -> &'static str {
        "Resolve an address or landmark to coordinates and a formatted address"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "address": {
                    "type": "string",
                    "description": "Address or landmark, such as \"Tokyo Tower, Tokyo, Japan\""
                }
            },
            "required": ["address"]
        })
    }

    fn action(&self) -> &'static str {
        "get location information"
    }

    async fn execute(&self, arguments: Value) -> ToolResult<String> {
        let request: LocationLookup = parse_arguments(arguments)?;
        self.lookup(&request).await
    }
}
