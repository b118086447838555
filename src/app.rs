// app.rs
use crate::domain::{filter_listings, FilterCriteria, FilterInputs};
use crate::loader::DatasetStore;
use crate::render::{render_listings, render_load_error, Display};
use tracing::debug;

/// Filter the current dataset and render the matches.
pub fn show_listings(store: &DatasetStore, criteria: &FilterCriteria) -> Display {
    let matches = filter_listings(store.listings(), criteria);
    debug!(
        city = %criteria.city,
        min_rooms = criteria.min_rooms,
        max_price = criteria.max_price,
        total = store.listings().len(),
        matched = matches.len(),
        "filtered listings"
    );

    let mut display = Display::default();
    render_listings(&mut display, &matches);
    display
}

/// One user filter action: inputs -> criteria -> filter -> render.
/// After a failed load the error message stays in place.
pub fn filter_action(store: &DatasetStore, inputs: &FilterInputs) -> Display {
    if store.is_unavailable() {
        let mut display = Display::default();
        render_load_error(&mut display);
        return display;
    }

    show_listings(store, &FilterCriteria::from_inputs(inputs))
}
