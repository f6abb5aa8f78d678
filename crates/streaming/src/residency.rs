/// Lifecycle of one lazily fetched resource.
///
/// Requested → Resident | Failed. The host performs the actual I/O; this
/// crate only tracks where each resource is in the cycle. A `Failed`
/// resource stays failed for the session, there is no automatic retry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidencyState {
    Requested,
    Resident,
    Failed,
}
