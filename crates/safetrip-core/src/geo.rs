//! Spatial math shared by the route and heading evaluators.
//!
//! Pure functions, no I/O. Distances are in kilometers, angles in
//! compass degrees unless noted otherwise.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Planar degrees-to-km scale used by [`point_to_segment_distance_km`].
/// 1 degree ≈ 111 km at the equator.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Initial compass bearing along the great circle from `from` to `to`,
/// in degrees [0, 360), 0 = north.
///
/// Degenerate when `from == to`: returns an unspecified but finite
/// value rather than failing.
pub fn bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat_deg.to_radians();
    let phi2 = to.lat_deg.to_radians();
    let delta_lambda = (to.lon_deg - from.lon_deg).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Great-circle distance between two points in kilometers (haversine,
/// spherical Earth).
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat_deg.to_radians();
    let phi2 = b.lat_deg.to_radians();
    let dphi = (b.lat_deg - a.lat_deg).to_radians();
    let dlambda = (b.lon_deg - a.lon_deg).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Minimum distance from `p` to the segment `a`–`b`, in kilometers.
///
/// Works in a flat lat/lon plane scaled by [`KM_PER_DEGREE`], with the
/// parametric projection clamped to the segment. This is NOT true
/// spherical cross-track distance: the approximation degrades near the
/// poles and for very long routes, and is kept as a known limitation
/// for short/medium routes.
pub fn point_to_segment_distance_km(p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let px = p.lon_deg - a.lon_deg;
    let py = p.lat_deg - a.lat_deg;
    let sx = b.lon_deg - a.lon_deg;
    let sy = b.lat_deg - a.lat_deg;

    let seg_len_sq = sx * sx + sy * sy;
    if seg_len_sq < 1e-12 {
        // Segment is essentially a point
        return (px * px + py * py).sqrt() * KM_PER_DEGREE;
    }

    let t = ((px * sx + py * sy) / seg_len_sq).clamp(0.0, 1.0);

    let dx = px - t * sx;
    let dy = py - t * sy;

    (dx * dx + dy * dy).sqrt() * KM_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn bearing_due_east() {
        let b = bearing_deg(coord(0.0, 0.0), coord(0.0, 10.0));
        assert!((b - 90.0).abs() < 1e-9, "expected ~90, got {b}");
    }

    #[test]
    fn bearing_due_north() {
        let b = bearing_deg(coord(0.0, 0.0), coord(10.0, 0.0));
        assert!(b.abs() < 1e-9 || (b - 360.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_reverses_by_180() {
        // Close enough that meridian convergence stays negligible.
        let a = coord(10.0, 20.0);
        let b = coord(10.5, 20.5);
        let forward = bearing_deg(a, b);
        let back = bearing_deg(b, a);
        let diff = (forward - back).rem_euclid(360.0);
        assert!(
            (diff - 180.0).abs() < 1.0,
            "expected ~180 apart, got forward={forward} back={back}"
        );
    }

    #[test]
    fn bearing_in_range() {
        let b = bearing_deg(coord(50.0, 30.0), coord(-20.0, -100.0));
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn distance_zero_for_same_point() {
        let a = coord(33.6846, -117.8265);
        assert!(great_circle_distance_km(a, a) < 1e-9);
    }

    #[test]
    fn distance_one_degree_latitude() {
        // ~111 km per degree of latitude
        let d = great_circle_distance_km(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = coord(48.3794, 31.1656);
        let b = coord(28.6139, 77.2090);
        let ab = great_circle_distance_km(a, b);
        let ba = great_circle_distance_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn segment_distance_zero_on_route() {
        let d = point_to_segment_distance_km(coord(0.0, 5.0), coord(0.0, 0.0), coord(0.0, 10.0));
        assert!(d < 1e-9, "point on the chord should be ~0, got {d}");
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        // Point beyond the destination end of the segment
        let d = point_to_segment_distance_km(coord(0.0, 12.0), coord(0.0, 0.0), coord(0.0, 10.0));
        assert!((d - 2.0 * KM_PER_DEGREE).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn segment_distance_perpendicular_offset() {
        let d = point_to_segment_distance_km(coord(1.0, 5.0), coord(0.0, 0.0), coord(0.0, 10.0));
        assert!((d - KM_PER_DEGREE).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        let a = coord(10.0, 10.0);
        let d = point_to_segment_distance_km(coord(11.0, 10.0), a, a);
        assert!((d - KM_PER_DEGREE).abs() < 1e-6, "got {d}");
    }
}
