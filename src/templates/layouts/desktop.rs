use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(BOOTSTRAP_ICONS);
                script src=(HTMX_JS) defer {}
            }
            body class="bg-light" {
                header class="navbar navbar-dark bg-primary mb-4" {
                    div class="container" {
                        span class="navbar-brand" { i class="bi bi-house-door-fill" {} " Immobilien" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
