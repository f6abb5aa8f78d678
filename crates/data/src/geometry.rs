use foundation::geo::LatLon;

/// Resolution tier for region outline geometry, selected by zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryTier {
    Ultra,
    Medium,
    Detail,
}

impl GeometryTier {
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom >= 12.0 {
            GeometryTier::Detail
        } else if zoom >= 9.0 {
            GeometryTier::Medium
        } else {
            GeometryTier::Ultra
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GeometryTier::Ultra => "ultra",
            GeometryTier::Medium => "medium",
            GeometryTier::Detail => "detail",
        }
    }
}

/// Resolution tier for the state-border overlay, selected by zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateResolution {
    Low,
    Medium,
    High,
}

impl StateResolution {
    pub fn for_zoom(zoom: f64) -> Self {
        if zoom <= 5.0 {
            StateResolution::Low
        } else if zoom <= 8.0 {
            StateResolution::Medium
        } else {
            StateResolution::High
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StateResolution::Low => "low",
            StateResolution::Medium => "medium",
            StateResolution::High => "high",
        }
    }
}

/// Outline geometry for one region, keyed by the same id as its record.
/// Rings are closed lat/lon loops; the first ring of each polygon is the
/// exterior.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFeature {
    pub id: String,
    pub rings: Vec<Vec<LatLon>>,
}

/// One fetched tier of outline geometry.
#[derive(Debug, Clone, Default)]
pub struct GeometrySet {
    pub features: Vec<GeometryFeature>,
}

impl GeometrySet {
    pub fn feature(&self, id: &str) -> Option<&GeometryFeature> {
        self.features.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeometryTier, StateResolution};

    #[test]
    fn tier_bands_by_zoom() {
        assert_eq!(GeometryTier::for_zoom(4.0), GeometryTier::Ultra);
        assert_eq!(GeometryTier::for_zoom(8.9), GeometryTier::Ultra);
        assert_eq!(GeometryTier::for_zoom(9.0), GeometryTier::Medium);
        assert_eq!(GeometryTier::for_zoom(11.9), GeometryTier::Medium);
        assert_eq!(GeometryTier::for_zoom(12.0), GeometryTier::Detail);
    }

    #[test]
    fn state_resolution_bands_by_zoom() {
        assert_eq!(StateResolution::for_zoom(5.0), StateResolution::Low);
        assert_eq!(StateResolution::for_zoom(5.1), StateResolution::Medium);
        assert_eq!(StateResolution::for_zoom(8.0), StateResolution::Medium);
        assert_eq!(StateResolution::for_zoom(8.1), StateResolution::High);
    }
}
