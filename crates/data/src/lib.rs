pub mod dataset;
pub mod geometry;
pub mod horizon;
pub mod record;

pub use dataset::*;
pub use geometry::*;
pub use horizon::*;
pub use record::*;
