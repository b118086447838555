pub mod listings;
pub mod results;

pub use listings::listings_page;
pub use results::results_fragment;
