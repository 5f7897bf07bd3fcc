use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use crate::errors::{ToolError, ToolResult};

/// A callable entry point exposed to the agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name the agent invokes the tool by (e.g. "search_restaurants")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// The JSON Schema for the tool's arguments
    fn parameters(&self) -> Value;

    /// Completes "Failed to <action>" when the tool fails.
    fn action(&self) -> &'static str;

    async fn execute(&self, arguments: Value) -> ToolResult<String>;

    /// Always yields a string: the JSON result, or a plain-text failure line.
    async fn call(&self, arguments: Value) -> String {
        respond(self.action(), self.execute(arguments).await)
    }
}

/// Collapses a tool outcome into the single string the agent receives.
pub fn respond(action: &str, outcome: ToolResult<String>) -> String {
    match outcome {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to {} due to: {}", action, e);
            format!("Failed to {}: {}", action, e)
        }
    }
}

pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> ToolResult<T> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}
