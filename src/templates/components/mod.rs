pub mod error;
pub mod fallback_note;
pub mod listing_card;
pub mod price;
pub mod search_bar;

pub use error::html_error_response;
pub use fallback_note::fallback_note;
pub use listing_card::listing_card;
pub use price::format_price;
pub use search_bar::search_bar;
