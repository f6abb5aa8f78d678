pub mod quintiles;
pub mod summary;

pub use quintiles::Quintiles;
pub use summary::Statistics;
