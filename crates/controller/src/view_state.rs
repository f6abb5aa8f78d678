use data::horizon::Metric;
use spatial::Boundary;
use stats::Quintiles;

/// Which record set drives the quintiles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewScope {
    /// Dataset-wide quintiles, precomputed per metric.
    Global,
    /// Quintiles recomputed over the visible (or bounded) set per view.
    Local,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VisualMode {
    Bubbles,
    Boundaries,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing,
    /// A drawn boundary is active and filtering every view.
    Bound,
}

/// The single mutable view state. The controller is its only writer;
/// everything else reads a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub scope: ViewScope,
    pub visual: VisualMode,
    pub metric: Metric,
    pub draw: DrawState,
    pub boundary: Option<Boundary>,
    pub quintiles: Option<Quintiles>,
    pub pop_range: Option<(u32, u32)>,
}

impl ViewState {
    pub fn new(metric: Metric) -> Self {
        Self {
            scope: ViewScope::Global,
            visual: VisualMode::Bubbles,
            metric,
            draw: DrawState::Idle,
            boundary: None,
            quintiles: None,
            pop_range: None,
        }
    }

    /// The GLOBAL/LOCAL toggle is inert while drawing or bound; a drawn
    /// boundary is inherently local.
    pub fn scope_toggle_enabled(&self) -> bool {
        self.draw == DrawState::Idle
    }
}
