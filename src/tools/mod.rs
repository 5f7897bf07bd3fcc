pub mod attractions;
pub mod common;
pub mod directions;
pub mod hotels;
pub mod location;
pub mod registry;
pub mod restaurants;
pub mod traits;

pub use attractions::{AttractionSearch, AttractionSearchTool};
pub use common::{parse_price_level, PlaceSummary};
pub use directions::{DirectionsRequest, DirectionsTool};
pub use hotels::{HotelSearch, HotelSearchTool};
pub use location::{LocationInfoTool, LocationLookup};
pub use registry::{ToolDescriptor, ToolRegistry};
pub use restaurants::{RestaurantSearch, RestaurantSearchTool};
pub use traits::{respond, Tool};
