pub mod filter;
pub mod listing;
pub mod query;

pub use filter::{evaluate, Evaluation};
pub use listing::Listing;
pub use query::{PriceRange, Query, SearchMode};
