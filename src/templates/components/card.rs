use crate::domain::format::{format_optional, format_price_eur};
use crate::domain::Listing;
use maud::{html, Markup};

/// One listing as a Bootstrap card, wrapped in a third-width grid column.
pub fn listing_card(listing: &Listing) -> Markup {
    let price = listing
        .price
        .map(format_price_eur)
        .unwrap_or_else(|| "–".to_string());

    html! {
        div class="col-md-4 mb-4" {
            div class="card h-100 shadow-sm" {
                img src=(listing.image_url)
                    class="card-img-top"
                    alt=(format!("Bild von {}", listing.title))
                    style="height: 200px; object-fit: cover;";

                div class="card-body" {
                    h5 class="card-title text-primary" { (listing.title) }
                    p class="card-text mb-1" {
                        span class="fw-bold fs-5" { (price) }
                    }
                    ul class="list-unstyled small text-muted" {
                        li { i class="bi bi-geo-alt-fill" {} " " (listing.city) }
                        li { i class="bi bi-key-fill" {} " " (format_optional(listing.rooms)) " Zimmer" }
                        li { i class="bi bi-aspect-ratio" {} " " (format_optional(listing.size_sqm)) " m²" }
                    }
                }

                div class="card-footer bg-light" {
                    p class="card-text small m-0 text-truncate" { (listing.key_facts_line()) }
                }
            }
        }
    }
}
