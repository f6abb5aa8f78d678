use data::geometry::{GeometryTier, StateResolution};

/// Identifies one fetchable resource for the session.
///
/// Small and `Ord` so it can key the fetch ledger deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKey {
    Tier(GeometryTier),
    StateOverlay(StateResolution),
    LongHorizons,
}

impl ResourceKey {
    pub fn describe(self) -> String {
        match self {
            ResourceKey::Tier(tier) => format!("geometry tier '{}'", tier.name()),
            ResourceKey::StateOverlay(res) => format!("state overlay '{}'", res.name()),
            ResourceKey::LongHorizons => "long-horizon changes".to_string(),
        }
    }
}
