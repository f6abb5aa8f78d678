pub mod boundary;
pub mod filter;

pub use boundary::{Boundary, BoundaryError};
pub use filter::{records_in_boundary, records_in_boundary_and_viewport, visible_records};
