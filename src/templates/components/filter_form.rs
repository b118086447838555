use crate::domain::FilterInputs;
use maud::{html, Markup};

/// The three filter controls. Submitting without JS reloads `/`; with htmx
/// only the results block is swapped.
pub fn filter_form(inputs: &FilterInputs) -> Markup {
    let city = inputs.city.as_deref().unwrap_or("");
    let min_rooms = inputs.min_rooms.as_deref().unwrap_or("");
    let max_price = inputs.max_price.as_deref().unwrap_or("");

    html! {
        form
            method="get"
            action="/"
            hx-get="/listings"
            hx-target="#ergebnisse"
            hx-swap="innerHTML"
            class="row g-3 align-items-end mb-4"
        {
            div class="col-md-4" {
                label class="form-label" for="stadt-filter" { "Stadt" }
                input
                    type="text"
                    class="form-control"
                    id="stadt-filter"
                    name="city"
                    placeholder="Alle Städte"
                    value=(city);
            }

            div class="col-md-3" {
                label class="form-label" for="zimmer-filter" { "Mindest-Zimmer" }
                input
                    type="number"
                    class="form-control"
                    id="zimmer-filter"
                    name="min_rooms"
                    step="any"
                    value=(min_rooms);
            }

            div class="col-md-3" {
                label class="form-label" for="max-preis-filter" { "Max. Preis (€)" }
                input
                    type="number"
                    class="form-control"
                    id="max-preis-filter"
                    name="max_price"
                    step="any"
                    value=(max_price);
            }

            div class="col-md-2" {
                button type="submit" class="btn btn-primary w-100" { "Filtern" }
            }
        }
    }
}
