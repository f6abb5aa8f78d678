pub mod ledger;
pub mod residency;
pub mod resource;
pub mod tiers;

pub use ledger::FetchLedger;
pub use residency::ResidencyState;
pub use resource::ResourceKey;
pub use tiers::TierCache;
