pub mod debounce;
pub mod event_bus;
pub mod tick;

pub use debounce::*;
pub use event_bus::*;
pub use tick::*;
