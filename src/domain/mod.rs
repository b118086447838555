pub mod filter;
pub mod format;
pub mod listing;

pub use filter::{filter_listings, FilterCriteria, FilterInputs};
pub use listing::Listing;
