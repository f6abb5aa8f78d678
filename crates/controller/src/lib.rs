pub mod controller;
pub mod events;
pub mod view_state;

pub use controller::MapController;
pub use events::{Effect, InputEvent, LegendUpdate};
pub use view_state::{DrawState, ViewScope, ViewState, VisualMode};
