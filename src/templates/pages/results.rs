use crate::render::Display;
use maud::{html, Markup, PreEscaped};

/// Counter plus display region. This is what htmx swaps on a filter action.
pub fn results_fragment(display: &Display) -> Markup {
    html! {
        p class="text-muted" {
            "Gefundene Immobilien: "
            strong id="anzahl-ergebnisse" {
                @if let Some(count) = display.count {
                    (count)
                }
            }
        }

        div class="row" id="ergebnisse-container" {
            // Region markup was produced by maud, already escaped.
            (PreEscaped(display.region.as_str()))
        }
    }
}
