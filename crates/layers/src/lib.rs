pub mod boundaries;
pub mod markers;
pub mod scale;
pub mod symbology;

pub use boundaries::{BoundaryLayer, BoundaryShape, build_boundary_layer};
pub use markers::{Marker, MarkerLayer, RenderContext, build_marker_layer};
pub use scale::{INTERACTIVE_MIN_ZOOM, fill_opacity, global_radius, local_radius};
pub use symbology::{BAND_COLORS, band_color};
