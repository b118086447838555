use maud::{html, Markup};

pub const LOAD_ERROR_MESSAGE: &str = "Fehler: Die Immobilien-Daten konnten nicht geladen werden oder sind fehlerhaft.";
pub const NO_RESULTS_MESSAGE: &str = "Leider keine Immobilien gefunden, die den Kriterien entsprechen.";

/// Shown in place of all cards when the dataset could not be loaded.
pub fn load_error_alert() -> Markup {
    alert("alert-danger", LOAD_ERROR_MESSAGE)
}

pub fn no_results_alert() -> Markup {
    alert("alert-warning", NO_RESULTS_MESSAGE)
}

fn alert(kind: &str, message: &str) -> Markup {
    html! {
        div class="col-12" {
            p class=(format!("alert {kind} mt-3")) role="alert" { (message) }
        }
    }
}
