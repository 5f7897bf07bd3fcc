use std::sync::Arc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use crate::errors::{ToolError, ToolResult};
use crate::repositories::GoogleMapsRepo;
use crate::tools::traits::Tool;
use crate::tools::{
    AttractionSearchTool, DirectionsTool, HotelSearchTool, LocationInfoTool, RestaurantSearchTool,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

/// The maps tools offered to the agent, in a stable order.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(repo: Arc<GoogleMapsRepo>) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(RestaurantSearchTool::new(Arc::clone(&repo))),
            Arc::new(AttractionSearchTool::new(Arc::clone(&repo))),
            Arc::new(HotelSearchTool::new(Arc::clone(&repo))),
            Arc::new(DirectionsTool::new(Arc::clone(&repo))),
            Arc::new(LocationInfoTool::new(repo)),
        ];
        info!("Registered {} maps tools", tools.len());

        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name(),
                description: tool.description(),
                parameters: tool.parameters(),
            })
            .collect()
    }

    /// Only an unknown tool name is an error; tool failures come back as the
    /// tool's plain-text failure line.
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolResult<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        Ok(tool.call(arguments).await)
    }
}
