use std::fmt;

use foundation::bounds::GeoBounds;
use foundation::geo::LatLon;

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    TooFewVertices { found: usize },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::TooFewVertices { found } => {
                write!(f, "polygon boundary needs at least 3 vertices, got {found}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

/// A user-drawn filter shape. At most one is active per session; drawing
/// a new one replaces the old.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    Rect(GeoBounds),
    Polygon { ring: Vec<LatLon>, bbox: GeoBounds },
}

impl Boundary {
    pub fn rect(bounds: GeoBounds) -> Self {
        Boundary::Rect(bounds)
    }

    /// Builds a polygon boundary from its ring and precomputes the
    /// bounding box used as a cheap rejection test.
    ///
    /// The ring is treated as a single simple loop; self-intersecting
    /// input gives even-odd results without complaint, and points exactly
    /// on an edge are implementation-defined.
    pub fn polygon(ring: Vec<LatLon>) -> Result<Self, BoundaryError> {
        if ring.len() < 3 {
            return Err(BoundaryError::TooFewVertices { found: ring.len() });
        }
        let first = ring[0];
        let mut bbox = GeoBounds::new(first.lat, first.lon, first.lat, first.lon);
        for p in ring.iter().skip(1) {
            bbox.south = bbox.south.min(p.lat);
            bbox.west = bbox.west.min(p.lon);
            bbox.north = bbox.north.max(p.lat);
            bbox.east = bbox.east.max(p.lon);
        }
        Ok(Boundary::Polygon { ring, bbox })
    }

    pub fn bbox(&self) -> GeoBounds {
        match self {
            Boundary::Rect(bounds) => *bounds,
            Boundary::Polygon { bbox, .. } => *bbox,
        }
    }

    pub fn contains(&self, point: LatLon) -> bool {
        match self {
            Boundary::Rect(bounds) => bounds.contains(point),
            Boundary::Polygon { ring, bbox } => {
                bbox.contains(point) && ring_contains(ring, point)
            }
        }
    }
}

// Even-odd ray cast over (lat, lon) as planar coordinates. Fine for the
// city-scale shapes users draw; not meridian-wrap aware.
fn ring_contains(ring: &[LatLon], point: LatLon) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lat, ring[i].lon);
        let (xj, yj) = (ring[j].lat, ring[j].lon);
        let crosses = (yi > point.lon) != (yj > point.lon)
            && point.lat < (xj - xi) * (point.lon - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
