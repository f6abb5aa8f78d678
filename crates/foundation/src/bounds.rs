use crate::geo::LatLon;

/// Geographic bounding box in degrees.
///
/// Containment is inclusive on all four edges, matching the map widget's
/// `bounds.contains` test so that viewport filtering agrees with what the
/// widget actually draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Builds a bounds from two opposite corners, in either order.
    pub fn from_corners(a: LatLon, b: LatLon) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lon.min(b.lon),
            north: a.lat.max(b.lat),
            east: a.lon.max(b.lon),
        }
    }

    pub fn contains(&self, p: LatLon) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lon >= self.west && p.lon <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::GeoBounds;
    use crate::geo::LatLon;

    #[test]
    fn containment_is_inclusive_on_edges() {
        let b = GeoBounds::new(30.0, -100.0, 40.0, -90.0);
        assert!(b.contains(LatLon::new(35.0, -95.0)));
        assert!(b.contains(LatLon::new(30.0, -95.0)));
        assert!(b.contains(LatLon::new(40.0, -90.0)));
        assert!(!b.contains(LatLon::new(29.999, -95.0)));
        assert!(!b.contains(LatLon::new(35.0, -89.999)));
    }

    #[test]
    fn from_corners_normalizes_order() {
        let a = GeoBounds::from_corners(LatLon::new(40.0, -90.0), LatLon::new(30.0, -100.0));
        let b = GeoBounds::from_corners(LatLon::new(30.0, -100.0), LatLon::new(40.0, -90.0));
        assert_eq!(a, b);
        assert_eq!(a.south, 30.0);
        assert_eq!(a.east, -90.0);
    }
}
