//! Data collaborators for the SafeTrip risk engine.
//!
//! Everything here is I/O plumbing: it fetches or loads external data
//! and hands typed records to `safetrip-core`. Parsing validation lives
//! at this boundary so the evaluators never see raw feed rows.

pub mod airports;
pub mod centroids;
pub mod error;
pub mod opensky;
pub mod store;

pub use airports::AirportIndex;
pub use centroids::assign_centroids;
pub use error::FeedError;
pub use opensky::OpenSkyClient;
pub use store::{load_zones, load_zones_or_empty};
