use std::collections::BTreeMap;

use crate::residency::ResidencyState;
use crate::resource::ResourceKey;

/// Tracks the residency of every resource the session has asked for.
///
/// Keys live in a `BTreeMap` for stable traversal order. `begin` is the
/// in-flight guard: asking again while a fetch is pending, resident, or
/// failed is a no-op and the caller must not issue a second fetch effect.
#[derive(Debug, Default)]
pub struct FetchLedger {
    entries: BTreeMap<ResourceKey, ResidencyState>,
}

impl FetchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records intent to fetch. Returns true when the caller should issue
    /// the fetch effect, false when the resource is already accounted for.
    pub fn begin(&mut self, key: ResourceKey) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, ResidencyState::Requested);
        true
    }

    pub fn mark_resident(&mut self, key: ResourceKey) {
        self.entries.insert(key, ResidencyState::Resident);
    }

    pub fn mark_failed(&mut self, key: ResourceKey) {
        self.entries.insert(key, ResidencyState::Failed);
    }

    pub fn state(&self, key: ResourceKey) -> Option<ResidencyState> {
        self.entries.get(&key).copied()
    }

    pub fn is_resident(&self, key: ResourceKey) -> bool {
        self.state(key) == Some(ResidencyState::Resident)
    }

    pub fn is_in_flight(&self, key: ResourceKey) -> bool {
        self.state(key) == Some(ResidencyState::Requested)
    }
}

#[cfg(test)]
mod tests {
    use data::geometry::GeometryTier;

    use super::FetchLedger;
    use crate::residency::ResidencyState;
    use crate::resource::ResourceKey;

    #[test]
    fn begin_guards_duplicate_fetches() {
        let mut ledger = FetchLedger::new();
        let key = ResourceKey::Tier(GeometryTier::Medium);
        assert!(ledger.begin(key));
        assert!(!ledger.begin(key));
        assert!(ledger.is_in_flight(key));
        ledger.mark_resident(key);
        assert!(!ledger.begin(key));
        assert!(ledger.is_resident(key));
    }

    #[test]
    fn failed_resources_are_not_retried() {
        let mut ledger = FetchLedger::new();
        let key = ResourceKey::LongHorizons;
        assert!(ledger.begin(key));
        ledger.mark_failed(key);
        assert!(!ledger.begin(key));
        assert_eq!(ledger.state(key), Some(ResidencyState::Failed));
    }
}
