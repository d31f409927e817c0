//! In-memory hazard-zone catalog.

use crate::geo::great_circle_distance_km;
use crate::models::{Coordinate, HazardZone};

/// Holds the hazard zones for one evaluation pass and answers
/// containment queries.
///
/// Catalog order is the input order and is significant: overlapping
/// zones are tie-broken by first-in-list.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: Vec<HazardZone>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<HazardZone>) -> Self {
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones that have a known center, in input order. Zones without
    /// coordinates cannot be tested for containment or distance.
    pub fn zones_with_coordinates(&self) -> impl Iterator<Item = &HazardZone> {
        self.zones.iter().filter(|zone| zone.coordinates.is_some())
    }

    /// First zone (in input order) whose circle contains `point`.
    ///
    /// Zones without coordinates never match. If several circles
    /// overlap the point, the first one in the catalog wins; downstream
    /// consumers rely on this tie-break.
    pub fn containing_zone(&self, point: Coordinate) -> Option<&HazardZone> {
        self.zones.iter().find(|zone| match zone.coordinates {
            Some(center) => great_circle_distance_km(point, center) <= zone.radius_km,
            None => false,
        })
    }
}
