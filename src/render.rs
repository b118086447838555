// render.rs
use crate::domain::Listing;
use crate::templates::components::{listing_card, load_error_alert, no_results_alert};
use maud::{html, Markup};

/// The two output surfaces: the result counter and the display region.
pub trait DisplayTarget {
    fn set_count(&mut self, count: usize);
    /// Replaces everything in the display region.
    fn replace_content(&mut self, content: Markup);
}

/// In-memory display: what the page shows for one filter action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Display {
    /// `None` until a render sets it; a load failure leaves it untouched.
    pub count: Option<usize>,
    pub region: String,
}

impl DisplayTarget for Display {
    fn set_count(&mut self, count: usize) {
        self.count = Some(count);
    }

    fn replace_content(&mut self, content: Markup) {
        self.region = content.into_string();
    }
}

/// Counter first, then a full replacement of the region: one card per
/// listing, or the single "no results" message.
pub fn render_listings<T: DisplayTarget>(target: &mut T, listings: &[&Listing]) {
    target.set_count(listings.len());

    if listings.is_empty() {
        target.replace_content(no_results_alert());
        return;
    }

    target.replace_content(html! {
        @for listing in listings {
            (listing_card(listing))
        }
    });
}

pub fn render_load_error<T: DisplayTarget>(target: &mut T) {
    target.replace_content(load_error_alert());
}
