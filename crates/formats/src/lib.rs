pub mod content_hash;
pub mod geometry;
pub mod horizons;
pub mod records;

pub use content_hash::content_hash;
pub use geometry::{GeometryParseError, parse_geometry};
pub use horizons::{HorizonParseError, parse_long_horizons};
pub use records::{RecordParseError, parse_records};
