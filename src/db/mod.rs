pub mod connection;
pub mod listings;

pub use connection::{init_db, Database};
pub use listings::{load_listings, save_listings};
