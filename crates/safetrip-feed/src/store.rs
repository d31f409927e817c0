//! Hazard-zone JSON loading.
//!
//! Reads the `red_zones.json` document produced by the upstream zone
//! scraper. Record order in the file is preserved: the catalog's
//! first-match tie-break depends on it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use safetrip_core::models::{Coordinate, HazardZone};

use crate::error::FeedError;

/// Wire shape of one zone record. Kept separate from the engine type so
/// the array-coordinate and loose-timestamp conventions stay at this
/// boundary.
#[derive(Debug, Deserialize)]
struct ZoneRecord {
    country: String,
    alert: String,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    coordinates: Option<[f64; 2]>,
    radius_km: f64,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
}

/// Load hazard zones from a JSON file, preserving record order.
///
/// Individual records with out-of-range coordinates are dropped with a
/// debug log; a file that cannot be read or is not a JSON array is an
/// error.
pub fn load_zones(path: impl AsRef<Path>) -> Result<Vec<HazardZone>, FeedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records: Vec<ZoneRecord> = serde_json::from_str(&raw)?;

    let zones: Vec<HazardZone> = records.into_iter().filter_map(into_zone).collect();
    tracing::info!(count = zones.len(), path = %path.display(), "loaded hazard zones");
    Ok(zones)
}

/// Like [`load_zones`], but a missing or unreadable file yields an
/// empty list instead of an error. Matches the evaluator contract that
/// an unavailable upstream means "no zones", not a failure.
pub fn load_zones_or_empty(path: impl AsRef<Path>) -> Vec<HazardZone> {
    match load_zones(&path) {
        Ok(zones) => zones,
        Err(err) => {
            tracing::warn!(path = %path.as_ref().display(), error = %err, "no hazard zones loaded");
            Vec::new()
        }
    }
}

fn into_zone(record: ZoneRecord) -> Option<HazardZone> {
    let coordinates = match record.coordinates {
        Some([lat, lon]) => match Coordinate::new(lat, lon) {
            Ok(coordinate) => Some(coordinate),
            Err(err) => {
                tracing::debug!(country = %record.country, error = %err, "dropping zone record");
                return None;
            }
        },
        None => None,
    };

    Some(HazardZone {
        country: record.country,
        alert: record.alert,
        coordinates,
        radius_km: record.radius_km,
        severity: record.severity.unwrap_or_else(|| "Unknown".to_string()),
        source: record.source.unwrap_or_default(),
        last_updated: record
            .last_updated
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_else(Utc::now),
    })
}

/// The scraper writes naive ISO-8601 timestamps without an offset;
/// newer files may carry RFC 3339. Accept both, as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
