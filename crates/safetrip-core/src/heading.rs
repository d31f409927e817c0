//! Heading-risk evaluation for live aircraft snapshots.
//!
//! Given one aircraft row and a destination, decides whether the
//! aircraft is flying toward the destination and, if so, whether its
//! current position sits inside a hazard zone.

use serde::{Deserialize, Serialize};

use crate::geo::bearing_deg;
use crate::models::{AircraftState, Coordinate};
use crate::zones::ZoneCatalog;

/// Result record for one aircraft heading toward the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRisk {
    /// Trimmed callsign, if the feed carried one.
    pub callsign: Option<String>,
    pub origin_country: String,
    pub position: Coordinate,
    pub altitude_m: Option<f64>,
    /// Ground speed in km/h, rounded to 2 decimals; `None` when the
    /// feed had no speed (reported as not-available, never zero).
    pub velocity_kmph: Option<f64>,
    /// Alert text of the containing hazard zone, if any.
    pub zone_alert: Option<String>,
}

/// Evaluates live aircraft rows against a destination and zone catalog.
#[derive(Debug, Clone, Copy)]
pub struct HeadingRiskEvaluator {
    /// Maximum angular difference between target bearing and track for
    /// the aircraft to count as heading toward the destination.
    pub heading_tolerance_deg: f64,
}

impl Default for HeadingRiskEvaluator {
    fn default() -> Self {
        Self {
            heading_tolerance_deg: 45.0,
        }
    }
}

impl HeadingRiskEvaluator {
    /// Evaluate a single aircraft row.
    ///
    /// Returns `None` when the row is not evaluable (no position or no
    /// track) or when the aircraft is not heading toward `destination`.
    ///
    /// The angular test is a plain `|target - track|` subtraction, not
    /// a circular difference. An aircraft tracking 359° toward a target
    /// bearing of 1° is therefore NOT flagged. This mirrors the feed
    /// behavior downstream consumers were calibrated against; see the
    /// design notes before changing it.
    pub fn evaluate(
        &self,
        aircraft: &AircraftState,
        destination: Coordinate,
        catalog: &ZoneCatalog,
    ) -> Option<HeadingRisk> {
        let position = aircraft.position?;
        let track_deg = aircraft.track_deg?;

        let target_bearing = bearing_deg(position, destination);
        if (target_bearing - track_deg).abs() >= self.heading_tolerance_deg {
            return None;
        }

        let zone_alert = catalog
            .containing_zone(position)
            .map(|zone| zone.alert.clone());

        Some(HeadingRisk {
            callsign: aircraft
                .callsign
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            origin_country: aircraft.origin_country.clone(),
            position,
            altitude_m: aircraft.altitude_m,
            velocity_kmph: aircraft
                .ground_speed_ms
                .map(|ms| (ms * 3.6 * 100.0).round() / 100.0),
            zone_alert,
        })
    }

    /// Evaluate a snapshot batch. Rows that are not evaluable are
    /// skipped; one bad row never aborts the rest of the batch.
    pub fn evaluate_batch(
        &self,
        aircraft: &[AircraftState],
        destination: Coordinate,
        catalog: &ZoneCatalog,
    ) -> Vec<HeadingRisk> {
        aircraft
            .iter()
            .filter_map(|row| self.evaluate(row, destination, catalog))
            .collect()
    }
}
