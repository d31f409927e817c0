//! Country centroid table for zones scraped without coordinates.
//!
//! The upstream advisory scraper knows the country a warning applies to
//! but not a center point. This table pins the countries currently
//! carrying advisories to a representative centroid so the route
//! evaluator can measure distances to them.

use safetrip_core::models::{Coordinate, HazardZone};

const COUNTRY_CENTROIDS: &[(&str, f64, f64)] = &[
    ("Afghanistan", 33.9391, 67.7100),
    ("Armenia", 40.0691, 45.0382),
    ("Azerbaijan", 40.1431, 47.5769),
    ("Belarus", 53.7098, 27.9534),
    ("Burkina Faso", 12.2383, -1.5616),
    ("Ethiopia", 9.1450, 40.4897),
    ("Gaza", 31.5018, 34.4663),
    ("Iran", 32.4279, 53.6880),
    ("Iraq", 33.3152, 44.3661),
    ("Israel", 31.0461, 34.8516),
    ("Lebanon", 33.8547, 35.8623),
    ("Libya", 26.3351, 17.2283),
    ("Mali", 17.5707, -3.9962),
    ("Niger", 17.6078, 8.0817),
    ("North Korea", 40.3399, 127.5101),
    ("Russia", 61.5240, 105.3188),
    ("Somalia", 5.1521, 46.1996),
    ("South Sudan", 6.8770, 31.3070),
    ("Sudan", 12.8628, 30.2176),
    ("Syria", 34.8021, 38.9968),
    ("Ukraine", 48.3794, 31.1656),
];

/// Centroid for a country, if it is in the table.
pub fn centroid_for(country: &str) -> Option<Coordinate> {
    COUNTRY_CENTROIDS
        .iter()
        .find(|(name, _, _)| *name == country)
        .map(|&(_, lat, lon)| {
            Coordinate::new(lat, lon).expect("centroid table holds in-range coordinates")
        })
}

/// Fill in missing zone centers from the centroid table.
///
/// Zones that already have coordinates are left untouched, as are
/// zones for countries the table does not know (they stay
/// not-evaluable). Order is preserved.
pub fn assign_centroids(zones: Vec<HazardZone>) -> Vec<HazardZone> {
    zones
        .into_iter()
        .map(|mut zone| {
            if zone.coordinates.is_none() {
                zone.coordinates = centroid_for(&zone.country);
            }
            zone
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn zone(country: &str, coordinates: Option<Coordinate>) -> HazardZone {
        HazardZone {
            country: country.to_string(),
            alert: "advisory".to_string(),
            coordinates,
            radius_km: 300.0,
            severity: "High".to_string(),
            source: "test".to_string(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn every_table_entry_is_a_valid_coordinate() {
        for &(country, _, _) in COUNTRY_CENTROIDS {
            assert!(
                centroid_for(country).is_some(),
                "centroid for {country} failed coordinate validation"
            );
        }
    }

    #[test]
    fn known_country_gets_centroid() {
        let zones = assign_centroids(vec![zone("Ukraine", None)]);
        let coordinate = zones[0].coordinates.unwrap();
        assert!((coordinate.lat_deg - 48.3794).abs() < 1e-6);
        assert!((coordinate.lon_deg - 31.1656).abs() < 1e-6);
    }

    #[test]
    fn unknown_country_stays_without_coordinates() {
        let zones = assign_centroids(vec![zone("Atlantis", None)]);
        assert!(zones[0].coordinates.is_none());
    }

    #[test]
    fn existing_coordinates_are_not_overwritten() {
        let original = Coordinate::new(10.0, 10.0).unwrap();
        let zones = assign_centroids(vec![zone("Ukraine", Some(original))]);
        assert_eq!(zones[0].coordinates, Some(original));
    }

    #[test]
    fn order_is_preserved() {
        let zones = assign_centroids(vec![zone("Syria", None), zone("Ukraine", None)]);
        assert_eq!(zones[0].country, "Syria");
        assert_eq!(zones[1].country, "Ukraine");
    }
}
