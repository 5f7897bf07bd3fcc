use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapsError {
    #[error("Google Maps API key is required")]
    MissingApiKey,

    #[error("Request to the maps provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Maps provider returned {status}: {message}")]
    Api { status: String, message: String },

    #[error("Malformed provider response: {0}")]
    Malformed(String),

    #[error("Provider worker failed: {0}")]
    Worker(String),
}

pub type MapsResult<T> = Result<T, MapsError>;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Provider(#[from] MapsError),

    #[error("Failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
