use data::horizon::Metric;
use foundation::bounds::GeoBounds;
use foundation::geo::LatLon;
use layers::{BoundaryLayer, MarkerLayer};
use spatial::Boundary;
use stats::Quintiles;
use streaming::ResourceKey;

/// Everything the host can feed the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The map stopped moving; bounds and zoom describe the settled view.
    /// Debounced inside the controller, not by the host.
    ViewportSettled { bounds: GeoBounds, zoom: f64 },
    ToggleScope,
    ToggleVisual,
    SetMetric(Metric),
    StartDraw,
    CancelDraw,
    DrawCompleted(Boundary),
    ClearBoundary,
    Search(String),
}

/// Legend payload pushed alongside layer swaps.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendUpdate {
    pub metric_label: String,
    pub quintiles: Quintiles,
    /// How many records actually fed the quintiles. With the global
    /// fallback this stays the true visible count.
    pub sample_size: usize,
    pub small_sample: bool,
    pub global_fallback: bool,
}

/// Everything the controller asks the host to do. The host owns all real
/// I/O and the map widget; the controller stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the marker layer wholesale. Build-then-swap; the host must
    /// not show an intermediate empty frame.
    SwapMarkers(MarkerLayer),
    SwapBoundaries(BoundaryLayer),
    ClearMarkers,
    ClearBoundaries,
    /// Fetch the named resource and call `deliver` or `fail` with the key.
    Fetch(ResourceKey),
    FlyTo {
        target: LatLon,
        zoom: f64,
        duration_ms: u64,
    },
    ShowPopup { record_id: String },
    Legend(LegendUpdate),
    LoadingStarted,
    LoadingFinished,
    NotFound { query: String },
}
