use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use crate::errors::{MapsError, MapsResult};
use crate::models::{PlaceSearchParams, TravelMode};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Blocking access to the mapping provider's web services. Each call returns
/// the raw result records of one response.
pub trait MapsApi: Send + Sync {
    fn geocode(&self, address: &str) -> MapsResult<Vec<Value>>;

    fn places(&self, params: &PlaceSearchParams) -> MapsResult<Vec<Value>>;

    fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> MapsResult<Vec<Value>>;
}

pub struct HttpMapsApi {
    api_key: String,
    base_url: String,
    http_client: reqwest::blocking::Client,
}

impl HttpMapsApi {
    /// Must be called outside of an async context; the blocking client owns
    /// its own runtime.
    pub fn new(api_key: &str, base_url: &str) -> MapsResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MapsError::MissingApiKey);
        }

        let http_client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        info!("Google Maps client initialized successfully");
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn fetch<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        records_field: &str,
        query: &Q,
    ) -> MapsResult<Vec<Value>> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("Calling maps provider endpoint: {}", path);

        let body: Value = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(transport)?;

        records_from_envelope(body, records_field)
    }
}

impl MapsApi for HttpMapsApi {
    fn geocode(&self, address: &str) -> MapsResult<Vec<Value>> {
        self.fetch("geocode/json", "results", &[("address", address)])
    }

    fn places(&self, params: &PlaceSearchParams) -> MapsResult<Vec<Value>> {
        self.fetch("place/textsearch/json", "results", params)
    }

    fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> MapsResult<Vec<Value>> {
        self.fetch(
            "directions/json",
            "routes",
            &[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
            ],
        )
    }
}

/// The request URL carries the API key, so it never makes it into an error.
fn transport(e: reqwest::Error) -> MapsError {
    MapsError::Transport(e.without_url())
}

/// Unwraps the provider's `{status, <records_field>: [...]}` envelope.
pub(crate) fn records_from_envelope(mut body: Value, records_field: &str) -> MapsResult<Vec<Value>> {
    let status = body
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| MapsError::Malformed("missing status".to_string()))?;

    return match status.as_str() {
        "OK" => match body.get_mut(records_field).map(Value::take) {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(MapsError::Malformed(format!("missing {} array", records_field))),
        },
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(Vec::new()),
        _ => Err(MapsError::Api {
            message: body
                .get("error_message")
                .and_then(Value::as_str)
                .unwrap_or("no error message")
                .to_string(),
            status,
        }),
    };
}
