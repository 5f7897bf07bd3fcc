#![allow(dead_code)]

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use travel_maps_tools::errors::{MapsError, MapsResult};
use travel_maps_tools::models::{PlaceSearchParams, TravelMode};
use travel_maps_tools::repositories::{GoogleMapsRepo, MapsApi};
use travel_maps_tools::tools::ToolRegistry;

/// What the fake provider answers for one endpoint.
#[derive(Clone, Debug)]
pub enum Canned {
    Records(Vec<Value>),
    Failure { status: String, message: String },
}

impl Canned {
    fn answer(&self) -> MapsResult<Vec<Value>> {
        match self {
            Canned::Records(records) => Ok(records.clone()),
            Canned::Failure { status, message } => Err(MapsError::Api {
                status: status.clone(),
                message: message.clone(),
            }),
        }
    }
}

/// In-memory provider that records every outgoing request.
pub struct FakeMapsApi {
    geocode: Canned,
    places: Canned,
    directions: Canned,
    pub geocode_calls: Mutex<Vec<String>>,
    pub place_calls: Mutex<Vec<PlaceSearchParams>>,
    pub direction_calls: Mutex<Vec<(String, String, TravelMode)>>,
    place_gate: Option<Mutex<Receiver<()>>>,
}

impl FakeMapsApi {
    pub fn new() -> Self {
        Self {
            geocode: Canned::Records(Vec::new()),
            places: Canned::Records(Vec::new()),
            directions: Canned::Records(Vec::new()),
            geocode_calls: Mutex::new(Vec::new()),
            place_calls: Mutex::new(Vec::new()),
            direction_calls: Mutex::new(Vec::new()),
            place_gate: None,
        }
    }

    pub fn with_geocode(mut self, records: Vec<Value>) -> Self {
        self.geocode = Canned::Records(records);
        self
    }

    pub fn with_places(mut self, records: Vec<Value>) -> Self {
        self.places = Canned::Records(records);
        self
    }

    pub fn with_directions(mut self, routes: Vec<Value>) -> Self {
        self.directions = Canned::Records(routes);
        self
    }

    /// Place searches block until a message arrives on the returned sender.
    pub fn gated(mut self) -> (Self, Sender<()>) {
        let (release, gate) = channel();
        self.place_gate = Some(Mutex::new(gate));
        (self, release)
    }

    /// Every endpoint fails with the given provider status.
    pub fn failing(status: &str, message: &str) -> Self {
        let failure = Canned::Failure {
            status: status.to_string(),
            message: message.to_string(),
        };
        Self {
            geocode: failure.clone(),
            places: failure.clone(),
            directions: failure,
            ..Self::new()
        }
    }

    pub fn last_place_params(&self) -> PlaceSearchParams {
        self.place_calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no place search was issued")
    }
}

impl MapsApi for FakeMapsApi {
    fn geocode(&self, address: &str) -> MapsResult<Vec<Value>> {
        self.geocode_calls.lock().unwrap().push(address.to_string());
        self.geocode.answer()
    }

    fn places(&self, params: &PlaceSearchParams) -> MapsResult<Vec<Value>> {
        self.place_calls.lock().unwrap().push(params.clone());
        if let Some(gate) = &self.place_gate {
            gate.lock().unwrap().recv().unwrap();
        }
        self.places.answer()
    }

    fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> MapsResult<Vec<Value>> {
        self.direction_calls
            .lock()
            .unwrap()
            .push((origin.to_string(), destination.to_string(), mode));
        self.directions.answer()
    }
}

pub fn repo(api: &Arc<FakeMapsApi>) -> Arc<GoogleMapsRepo> {
    let api: Arc<dyn MapsApi> = api.clone();
    Arc::new(GoogleMapsRepo::new(api))
}

pub fn registry(api: &Arc<FakeMapsApi>) -> ToolRegistry {
    ToolRegistry::new(repo(api))
}

pub fn place(name: &str, rating: Option<f64>) -> Value {
    let mut record = json!({
        "name": name,
        "formatted_address": format!("{}, Shibuya City, Tokyo", name),
        "geometry": { "location": { "lat": 35.6595, "lng": 139.7005 } },
        "place_id": format!("id-{}", name),
        "price_level": 2,
        "types": ["restaurant", "food", "point_of_interest", "establishment"],
        "photos": [{ "photo_reference": "ref-1" }, { "photo_reference": "ref-2" }],
        "opening_hours": { "open_now": true },
        "business_status": "OPERATIONAL"
    });
    if let Some(rating) = rating {
        record["rating"] = json!(rating);
    }
    record
}

pub fn route(legs: Vec<Value>) -> Value {
    json!({
        "legs": legs,
        "overview_polyline": { "points": "kiw~FpoavObBA" }
    })
}

pub fn leg(start: &str, end: &str) -> Value {
    json!({
        "start_address": start,
        "end_address": end,
        "start_location": { "lat": 35.6812, "lng": 139.7671 },
        "end_location": { "lat": 35.6586, "lng": 139.7454 },
        "distance": { "text": "3.4 km", "value": 3400 },
        "duration": { "text": "17 mins", "value": 1020 },
        "steps": [
            { "html_instructions": "Walk to Otemachi", "travel_mode": "WALKING" },
            { "html_instructions": "Subway towards Meguro", "travel_mode": "TRANSIT" }
        ]
    })
}
