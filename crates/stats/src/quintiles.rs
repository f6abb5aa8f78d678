use crate::summary::Statistics;

/// The four interior quintile cut points of a value set, ascending.
///
/// A value `v` belongs to band `i` where `i` is the first cut point with
/// `v <= cut[i]`, or band 4 when it exceeds all four.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quintiles(pub [f64; 4]);

impl Quintiles {
    /// Nearest-rank quintiles: sort a copy ascending and pick the elements
    /// at floor(n * k / 5) for k in 1..=4. At small n the rank indices
    /// collide, which is intentional. Returns `None` only when empty.
    pub fn nearest_rank(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n == 0 {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some(Self([
            sorted[n / 5],
            sorted[n * 2 / 5],
            sorted[n * 3 / 5],
            sorted[n * 4 / 5],
        ]))
    }

    /// Equal-width quintiles: min + range * {0.2, 0.4, 0.6, 0.8}.
    ///
    /// Used for small value sets. Returns `None` on an empty slice; a
    /// degenerate set (range zero) yields all cut points equal to min, so
    /// every value lands in band 0.
    pub fn equal_width(values: &[f64]) -> Option<Self> {
        let (min, max) = Statistics::min_max(values)?;
        let range = max - min;
        Some(Self([
            min + range * 0.2,
            min + range * 0.4,
            min + range * 0.6,
            min + range * 0.8,
        ]))
    }

    /// Band index 0..=4 for a value against these cut points.
    pub fn band(&self, value: f64) -> usize {
        for (i, &cut) in self.0.iter().enumerate() {
            if value <= cut {
                return i;
            }
        }
        4
    }
}
