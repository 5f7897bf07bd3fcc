use std::sync::Arc;
use tracing::{debug, error};
use crate::errors::{MapsError, MapsResult};
use crate::models::{
    filter_by_rating, Location, PlaceInfo, PlaceQuery, RankBy, RouteInfo, TravelMode,
};
use crate::repositories::maps_api::MapsApi;

pub const DEFAULT_NEARBY_RADIUS: u32 = 1000;

/// Parameters for [`GoogleMapsRepo::get_nearby_places`].
#[derive(Clone, Debug)]
pub struct NearbyQuery {
    pub location: Location,
    pub place_type: String,
    pub radius: u32,
    pub price_range: Option<(u8, u8)>,
    pub rating_min: Option<f64>,
    pub rank_by: RankBy,
    pub language: String,
}

impl NearbyQuery {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            place_type: "restaurant".to_string(),
            radius: DEFAULT_NEARBY_RADIUS,
            price_range: None,
            rating_min: None,
            rank_by: RankBy::Prominence,
            language: "en".to_string(),
        }
    }
}

/// Single point of contact with the mapping provider. Provider calls are
/// blocking and always run on the blocking worker pool.
///
/// The `try_*` operations report provider failures; the others log them and
/// degrade to an absent or empty result.
pub struct GoogleMapsRepo {
    api: Arc<dyn MapsApi>,
}

impl GoogleMapsRepo {
    pub fn new(api: Arc<dyn MapsApi>) -> Self {
        Self { api }
    }

    async fn run_blocking<T, F>(&self, call: F) -> MapsResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn MapsApi) -> MapsResult<T> + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || call(api.as_ref()))
            .await
            .map_err(|e| MapsError::Worker(e.to_string()))?
    }

    pub async fn try_geocode(&self, address: &str) -> MapsResult<Option<Location>> {
        let address = address.to_string();
        let records = self.run_blocking(move |api| api.geocode(&address)).await?;

        return match records.into_iter().next() {
            Some(record) => Location::try_from(record)
                .map(Some)
                .map_err(|e| MapsError::Malformed(format!("geocoding result: {}", e))),
            None => Ok(None),
        };
    }

    pub async fn geocode(&self, address: &str) -> Option<Location> {
        match self.try_geocode(address).await {
            Ok(location) => location,
            Err(e) => {
                error!("Geocoding failed: {}", e);
                None
            }
        }
    }

    /// Records the provider returns that cannot be parsed are skipped.
    pub async fn try_search_places(&self, query: &PlaceQuery) -> MapsResult<Vec<PlaceInfo>> {
        let params = query.to_params();
        let records = self.run_blocking(move |api| api.places(&params)).await?;

        let places = records
            .into_iter()
            .filter_map(|record| match PlaceInfo::try_from(record) {
                Ok(place) => Some(place),
                Err(e) => {
                    debug!("Failed to parse place data: {}", e);
                    None
                }
            })
            .collect();

        Ok(places)
    }

    pub async fn search_places(&self, query: &PlaceQuery) -> Vec<PlaceInfo> {
        match self.try_search_places(query).await {
            Ok(places) => places,
            Err(e) => {
                error!("Place search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Only the first route's first leg is considered.
    pub async fn try_get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> MapsResult<Option<RouteInfo>> {
        let origin = origin.to_string();
        let destination = destination.to_string();
        let routes = self
            .run_blocking(move |api| api.directions(&origin, &destination, mode))
            .await?;

        return match routes.into_iter().next() {
            Some(route) => RouteInfo::try_from(route)
                .map(Some)
                .map_err(|e| MapsError::Malformed(format!("directions route: {}", e))),
            None => Ok(None),
        };
    }

    pub async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Option<RouteInfo> {
        match self.try_get_directions(origin, destination, mode).await {
            Ok(route) => route,
            Err(e) => {
                error!("Route planning failed: {}", e);
                None
            }
        }
    }

    /// The provider has no minimum rating parameter, so the threshold is
    /// applied to the results here.
    pub async fn try_get_nearby_places(&self, nearby: &NearbyQuery) -> MapsResult<Vec<PlaceInfo>> {
        let query = PlaceQuery {
            location: Some(nearby.location.coordinates()),
            radius: nearby.radius,
            place_type: Some(nearby.place_type.clone()),
            language: Some(nearby.language.clone()),
            min_price: nearby.price_range.map(|(min, _)| min),
            max_price: nearby.price_range.map(|(_, max)| max),
            rank_by: Some(nearby.rank_by),
            ..PlaceQuery::new(nearby.place_type.clone())
        };

        let places = self.try_search_places(&query).await?;
        Ok(filter_by_rating(places, nearby.rating_min))
    }

    pub async fn get_nearby_places(&self, nearby: &NearbyQuery) -> Vec<PlaceInfo> {
        match self.try_get_nearby_places(nearby).await {
            Ok(places) => places,
            Err(e) => {
                error!("Nearby place search failed: {}", e);
                Vec::new()
            }
        }
    }
}
