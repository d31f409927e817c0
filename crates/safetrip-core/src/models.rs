//! Core data models for the risk engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Immutable value type. `new` enforces the coordinate-range contract;
/// everything downstream may assume a `Coordinate` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Coordinate {
    /// Create a coordinate, validating lat ∈ [-90, 90] and lon ∈ [-180, 180].
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(CoreError::InvalidLatitude(lat_deg));
        }
        if !(-180.0..=180.0).contains(&lon_deg) {
            return Err(CoreError::InvalidLongitude(lon_deg));
        }
        Ok(Self { lat_deg, lon_deg })
    }
}

/// A geographic area flagged as risky ("red zone").
///
/// `coordinates: None` means the zone has no known center. Such a zone
/// cannot participate in circular containment or route distance checks,
/// but it is still a real zone. Callers must treat it as "not
/// evaluable", never as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardZone {
    pub country: String,
    /// Free-text advisory describing the hazard.
    pub alert: String,
    pub coordinates: Option<Coordinate>,
    pub radius_km: f64,
    pub severity: String,
    pub source: String,
    pub last_updated: DateTime<Utc>,
}

/// One aircraft row from a live-traffic snapshot.
///
/// Built at the ingestion boundary from the feed's positional arrays.
/// Any of position/track/speed may be missing in a noisy feed; the
/// evaluators treat absence as "not evaluable" and skip the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftState {
    #[serde(default)]
    pub callsign: Option<String>,
    pub origin_country: String,
    #[serde(default)]
    pub position: Option<Coordinate>,
    #[serde(default)]
    pub altitude_m: Option<f64>,
    #[serde(default)]
    pub ground_speed_ms: Option<f64>,
    /// Direction of travel over ground, compass degrees (0 = north).
    #[serde(default)]
    pub track_deg: Option<f64>,
}

/// A hazard zone flagged as close to a planned route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMatch {
    pub zone: HazardZone,
    /// Minimum of the distance measures used by the evaluator, km,
    /// rounded to one decimal place.
    pub distance_km: f64,
}
