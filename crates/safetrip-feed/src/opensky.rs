//! OpenSky live-traffic snapshot client.
//!
//! Single-shot queries only: one GET of `/api/states/all` for a
//! bounding box, parsed into typed [`AircraftState`] records. The feed
//! serves state vectors as positional JSON arrays; the index layout is
//! documented at <https://openskynetwork.github.io/opensky-api/rest.html>.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use safetrip_core::models::{AircraftState, Coordinate};

use crate::error::FeedError;

const DEFAULT_BASE_URL: &str = "https://opensky-network.org";

// State-vector array indices per the OpenSky REST schema.
const IDX_CALLSIGN: usize = 1;
const IDX_ORIGIN_COUNTRY: usize = 2;
const IDX_LONGITUDE: usize = 5;
const IDX_LATITUDE: usize = 6;
const IDX_BARO_ALTITUDE: usize = 7;
const IDX_VELOCITY: usize = 9;
const IDX_TRUE_TRACK: usize = 10;

#[derive(Debug, Deserialize)]
struct StatesResponse {
    #[serde(default)]
    states: Option<Vec<Value>>,
}

/// HTTP client for the OpenSky `states/all` endpoint.
pub struct OpenSkyClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for OpenSkyClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OpenSkyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the current state vectors inside a lat/lon bounding box.
    ///
    /// Rows the feed reports in a shape we cannot type (not an array,
    /// out-of-range coordinates) are dropped with a debug log; the rest
    /// of the snapshot is returned.
    pub async fn states_in_bbox(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Vec<AircraftState>, FeedError> {
        let url = format!(
            "{}/api/states/all?lamin={min_lat}&lamax={max_lat}&lomin={min_lon}&lomax={max_lon}",
            self.base_url
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { status, url });
        }

        let body: StatesResponse = response.json().await?;
        let raw = body.states.unwrap_or_default();
        let total = raw.len();

        let states: Vec<AircraftState> = raw.iter().filter_map(parse_state_row).collect();
        if states.len() < total {
            tracing::debug!(
                dropped = total - states.len(),
                kept = states.len(),
                "dropped malformed state vectors from snapshot"
            );
        }
        tracing::info!(count = states.len(), "fetched live-traffic snapshot");

        Ok(states)
    }
}

/// Convert one positional state-vector row into a typed record.
///
/// Returns `None` only when the row itself is unusable (not an array,
/// no origin country, coordinates out of range). Missing optional
/// fields map to `None` on the record, they do not reject the row.
pub(crate) fn parse_state_row(row: &Value) -> Option<AircraftState> {
    let fields = row.as_array()?;

    let origin_country = fields.get(IDX_ORIGIN_COUNTRY)?.as_str()?.to_string();

    let callsign = fields
        .get(IDX_CALLSIGN)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let lat = fields.get(IDX_LATITUDE).and_then(Value::as_f64);
    let lon = fields.get(IDX_LONGITUDE).and_then(Value::as_f64);
    let position = match (lat, lon) {
        // A present-but-invalid coordinate makes the whole row suspect.
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon).ok()?),
        _ => None,
    };

    Some(AircraftState {
        callsign,
        origin_country,
        position,
        altitude_m: fields.get(IDX_BARO_ALTITUDE).and_then(Value::as_f64),
        ground_speed_ms: fields.get(IDX_VELOCITY).and_then(Value::as_f64),
        track_deg: fields.get(IDX_TRUE_TRACK).and_then(Value::as_f64),
    })
}
