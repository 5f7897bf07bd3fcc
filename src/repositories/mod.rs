pub mod google_maps_repo;
pub mod maps_api;

pub use google_maps_repo::{GoogleMapsRepo, NearbyQuery};
pub use maps_api::{HttpMapsApi, MapsApi};
