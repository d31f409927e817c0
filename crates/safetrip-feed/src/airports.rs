//! Airport coordinate index from an OurAirports-style CSV.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use safetrip_core::models::Coordinate;

use crate::error::FeedError;

/// Columns we care about; the CSV carries many more, which serde
/// ignores.
#[derive(Debug, Deserialize)]
struct AirportRow {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(default)]
    municipality: Option<String>,
    iso_country: String,
    #[serde(default)]
    latitude_deg: Option<f64>,
    #[serde(default)]
    longitude_deg: Option<f64>,
}

/// Label → coordinate lookup for large and medium airports.
///
/// Labels read "Municipality - CC" (airport name when the municipality
/// column is empty). The first row claiming a label wins; later
/// duplicates are dropped, matching the upstream dataset convention.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    by_label: HashMap<String, Coordinate>,
    labels: Vec<String>,
}

impl AirportIndex {
    /// Read the index from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(FeedError::from)?;
        let index = Self::from_reader(reader)?;
        tracing::info!(count = index.len(), path = %path.display(), "loaded airport index");
        Ok(index)
    }

    /// Read the index from CSV text (used by tests and embedded data).
    pub fn from_csv_str(data: &str) -> Result<Self, FeedError> {
        Self::from_reader(csv::Reader::from_reader(data.as_bytes()))
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, FeedError> {
        let mut index = Self::default();
        for row in reader.deserialize() {
            let row: AirportRow = row?;
            if row.kind != "large_airport" && row.kind != "medium_airport" {
                continue;
            }
            let (Some(lat), Some(lon)) = (row.latitude_deg, row.longitude_deg) else {
                continue;
            };
            let Ok(coordinate) = Coordinate::new(lat, lon) else {
                tracing::debug!(airport = %row.name, "dropping airport with bad coordinates");
                continue;
            };

            let place = row
                .municipality
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(row.name);
            let label = format!("{place} - {}", row.iso_country);

            if !index.by_label.contains_key(&label) {
                index.labels.push(label.clone());
                index.by_label.insert(label, coordinate);
            }
        }
        Ok(index)
    }

    pub fn lookup(&self, label: &str) -> Option<Coordinate> {
        self.by_label.get(label).copied()
    }

    /// Labels in file order (selection lists depend on it).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
