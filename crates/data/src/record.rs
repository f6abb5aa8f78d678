use std::collections::BTreeMap;

use foundation::geo::LatLon;

use crate::horizon::{Horizon, Metric};

/// One place (ZIP code or metro area) with its centroid and values.
///
/// `changes` is sparse: a missing horizon means "no data" and is excluded
/// from statistics and rendering, never coerced to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub pos: LatLon,
    pub population: u32,
    pub display_name: String,
    /// Producer-precomputed population-tier radius in pixels. Monotonic
    /// non-decreasing in population; never recomputed client-side.
    pub base_radius: f64,
    pub price: Option<f64>,
    pub changes: BTreeMap<Horizon, f64>,
}

impl Record {
    /// Value for the given metric, or `None` when the record has no data.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Price => self.price,
            Metric::Change(h) => self.changes.get(&h).copied(),
        }
    }
}
