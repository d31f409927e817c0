pub mod error;
pub mod geo;
pub mod heading;
pub mod models;
pub mod route;
pub mod zones;

pub use error::CoreError;
pub use geo::{bearing_deg, great_circle_distance_km, point_to_segment_distance_km};
pub use heading::{HeadingRisk, HeadingRiskEvaluator};
pub use models::{AircraftState, Coordinate, HazardZone, RiskMatch};
pub use route::{RouteRiskEvaluator, DEFAULT_THRESHOLD_KM};
pub use zones::ZoneCatalog;
