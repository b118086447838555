// templates/pages/listings.rs

use crate::domain::FilterInputs;
use crate::render::Display;
use crate::templates::{components::filter_form, desktop_layout, pages::results_fragment};
use maud::html;
use maud::Markup;

pub fn listings_page(inputs: &FilterInputs, display: &Display) -> Markup {
    desktop_layout(
        "Immobilien",
        html! {
            h1 class="h3 mb-4" { "Immobiliensuche" }

            (filter_form(inputs))

            div id="ergebnisse" {
                (results_fragment(display))
            }
        },
    )
}
