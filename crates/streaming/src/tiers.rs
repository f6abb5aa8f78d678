use std::collections::BTreeMap;

use data::geometry::{GeometrySet, GeometryTier};

/// Session cache of fetched geometry tiers. Once stored, a tier is
/// immutable and never reloaded.
#[derive(Debug, Default)]
pub struct TierCache {
    tiers: BTreeMap<GeometryTier, (String, GeometrySet)>,
}

impl TierCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a tier keyed by its payload content hash. Returns false when
    /// the same content is already resident (redundant re-delivery).
    pub fn store(&mut self, tier: GeometryTier, content_hash: String, set: GeometrySet) -> bool {
        if let Some((existing, _)) = self.tiers.get(&tier) {
            if *existing == content_hash {
                return false;
            }
        }
        self.tiers.insert(tier, (content_hash, set));
        true
    }

    pub fn get(&self, tier: GeometryTier) -> Option<&GeometrySet> {
        self.tiers.get(&tier).map(|(_, set)| set)
    }

    pub fn contains(&self, tier: GeometryTier) -> bool {
        self.tiers.contains_key(&tier)
    }
}

#[cfg(test)]
mod tests {
    use data::geometry::{GeometrySet, GeometryTier};

    use super::TierCache;

    #[test]
    fn redundant_delivery_is_rejected_by_hash() {
        let mut cache = TierCache::new();
        let stored = cache.store(
            GeometryTier::Ultra,
            "abc".to_string(),
            GeometrySet::default(),
        );
        assert!(stored);
        let again = cache.store(
            GeometryTier::Ultra,
            "abc".to_string(),
            GeometrySet::default(),
        );
        assert!(!again);
        assert!(cache.contains(GeometryTier::Ultra));
        assert!(cache.get(GeometryTier::Medium).is_none());
    }
}
