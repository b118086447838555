pub mod card;
pub mod error;
pub mod filter_form;

pub use card::listing_card;
pub use error::{load_error_alert, no_results_alert, LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
pub use filter_form::filter_form;
