//! Route-risk evaluation for planned origin/destination pairs.

use crate::geo::{great_circle_distance_km, point_to_segment_distance_km};
use crate::models::{Coordinate, HazardZone, RiskMatch};

/// Default flag threshold in kilometers.
pub const DEFAULT_THRESHOLD_KM: f64 = 500.0;

/// Flags hazard zones within a threshold distance of a planned route.
#[derive(Debug, Clone, Copy)]
pub struct RouteRiskEvaluator {
    pub threshold_km: f64,
}

impl Default for RouteRiskEvaluator {
    fn default() -> Self {
        Self {
            threshold_km: DEFAULT_THRESHOLD_KM,
        }
    }
}

impl RouteRiskEvaluator {
    pub fn new(threshold_km: f64) -> Self {
        Self { threshold_km }
    }

    /// Evaluate every zone against the origin–destination chord.
    ///
    /// For each zone with a known center the distance is the minimum of
    /// three measures: distance to the route chord, distance to the
    /// origin, and distance to the destination. The endpoint distances
    /// are deliberate: a zone close to either city is flagged even when
    /// it sits far off the route line itself.
    ///
    /// Zones without coordinates are skipped. Output preserves input
    /// zone order; matches are not sorted by distance.
    pub fn evaluate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        zones: &[HazardZone],
    ) -> Vec<RiskMatch> {
        zones
            .iter()
            .filter_map(|zone| {
                let center = zone.coordinates?;

                let dist_route = point_to_segment_distance_km(center, origin, destination);
                let dist_from_origin = great_circle_distance_km(center, origin);
                let dist_to_destination = great_circle_distance_km(center, destination);

                let min_dist = dist_route.min(dist_from_origin).min(dist_to_destination);
                if min_dist > self.threshold_km {
                    return None;
                }

                Some(RiskMatch {
                    zone: zone.clone(),
                    distance_km: (min_dist * 10.0).round() / 10.0,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn zone(country: &str, center: Option<(f64, f64)>) -> HazardZone {
        HazardZone {
            country: country.to_string(),
            alert: format!("{country} advisory"),
            coordinates: center.map(|(lat, lon)| coord(lat, lon)),
            radius_km: 300.0,
            severity: "High".to_string(),
            source: "test".to_string(),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn zone_on_route_is_matched_at_zero_distance() {
        let evaluator = RouteRiskEvaluator::default();
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("OnRoute", Some((0.0, 5.0)))],
        );
        assert_eq!(matches.len(), 1);
        assert!(matches[0].distance_km < 0.1, "got {}", matches[0].distance_km);
    }

    #[test]
    fn far_zone_is_not_matched() {
        let evaluator = RouteRiskEvaluator::default();
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("Far", Some((50.0, 50.0)))],
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn zone_near_origin_but_off_route_is_matched() {
        let evaluator = RouteRiskEvaluator::default();
        // ~333 km due north of the origin: off the route but within the
        // 500 km threshold of the departure city.
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("NearOrigin", Some((3.0, 0.0)))],
        );
        assert_eq!(matches.len(), 1);
        // The planar route distance (3 * 111 km) undercuts the
        // great-circle origin distance here.
        assert_eq!(matches[0].distance_km, 333.0);
    }

    #[test]
    fn zones_without_coordinates_are_skipped() {
        let evaluator = RouteRiskEvaluator::default();
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("NoCenter", None), zone("OnRoute", Some((0.0, 5.0)))],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].zone.country, "OnRoute");
    }

    #[test]
    fn output_preserves_input_zone_order() {
        let evaluator = RouteRiskEvaluator::default();
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[
                zone("B-far-but-matched", Some((0.0, 9.0))),
                zone("A-on-route", Some((0.0, 1.0))),
            ],
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].zone.country, "B-far-but-matched");
        assert_eq!(matches[1].zone.country, "A-on-route");
    }

    #[test]
    fn distance_is_rounded_to_one_decimal() {
        let evaluator = RouteRiskEvaluator::default();
        let matches = evaluator.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("Offset", Some((1.0, 5.0)))],
        );
        assert_eq!(matches.len(), 1);
        let d = matches[0].distance_km;
        assert_eq!((d * 10.0).round() / 10.0, d);
    }

    #[test]
    fn custom_threshold_narrows_matches() {
        let tight = RouteRiskEvaluator::new(10.0);
        let matches = tight.evaluate(
            coord(0.0, 0.0),
            coord(0.0, 10.0),
            &[zone("NearOrigin", Some((3.0, 0.0)))],
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = RouteRiskEvaluator::default();
        let zones = vec![
            zone("OnRoute", Some((0.0, 5.0))),
            zone("NearOrigin", Some((3.0, 0.0))),
        ];
        let first = evaluator.evaluate(coord(0.0, 0.0), coord(0.0, 10.0), &zones);
        let second = evaluator.evaluate(coord(0.0, 0.0), coord(0.0, 10.0), &zones);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.zone.country, b.zone.country);
            assert_eq!(a.distance_km, b.distance_km);
        }
    }

    #[test]
    fn empty_zone_list_yields_no_matches() {
        let evaluator = RouteRiskEvaluator::default();
        assert!(evaluator
            .evaluate(coord(0.0, 0.0), coord(0.0, 10.0), &[])
            .is_empty());
    }
}
