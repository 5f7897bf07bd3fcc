pub mod location;
pub mod place;
pub mod route;
pub mod search;

pub use location::{LatLng, Location};
pub use place::{filter_by_rating, OpeningHours, PlaceInfo};
pub use route::{RouteInfo, TravelMode};
pub use search::{PlaceQuery, PlaceSearchParams, RankBy, DEFAULT_SEARCH_RADIUS};
