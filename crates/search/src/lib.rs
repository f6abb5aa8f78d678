pub mod index;

pub use index::{SUGGESTION_LIMIT, SearchIndex, Suggestion};
