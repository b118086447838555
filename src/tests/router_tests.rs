// src/tests/router_tests.rs

use super::utils::fixture_listings;
use crate::errors::ServerError;
use crate::loader::{DatasetStore, LoadOutcome};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::templates::components::{LOAD_ERROR_MESSAGE, NO_RESULTS_MESSAGE};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

fn card_count(html: &str) -> usize {
    html.matches("class=\"card h-100 shadow-sm\"").count()
}

#[test]
fn index_shows_every_listing_without_filters() {
    let store = DatasetStore::with_listings(fixture_listings());

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(card_count(&body), 2);
    assert!(body.contains(r#"<strong id="anzahl-ergebnisse">2</strong>"#));
    assert!(body.contains(r#"id="ergebnisse-container""#));
    assert!(body.contains(r#"id="stadt-filter""#));
}

#[test]
fn rooms_and_price_query_filters() {
    let store = DatasetStore::with_listings(fixture_listings());

    let body = body_string(handle(get("/?city=&min_rooms=3&max_price=500000"), &store).unwrap());

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Altbauwohnung am Park"));
    assert!(!body.contains("Penthouse mit Alpenblick"));
    // Inputs are echoed back into the form.
    assert!(body.contains(r#"value="500000""#));
}

#[test]
fn city_query_filters() {
    let store = DatasetStore::with_listings(fixture_listings());

    let body = body_string(handle(get("/?city=Munich&min_rooms=0&max_price="), &store).unwrap());

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Penthouse mit Alpenblick"));
}

#[test]
fn query_values_are_url_decoded() {
    let mut listings = fixture_listings();
    listings[0].city = "Frankfurt am Main".to_string();
    let store = DatasetStore::with_listings(listings);

    let body = body_string(handle(get("/listings?city=Frankfurt+am%20Main"), &store).unwrap());

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Altbauwohnung am Park"));
}

#[test]
fn fragment_has_counter_and_region_only() {
    let store = DatasetStore::with_listings(fixture_listings());

    let body = body_string(handle(get("/listings?city=Hamburg"), &store).unwrap());

    assert!(!body.contains("<html"));
    assert!(!body.contains("<form"));
    assert!(body.contains(r#"<strong id="anzahl-ergebnisse">0</strong>"#));
    assert_eq!(body.matches(NO_RESULTS_MESSAGE).count(), 1);
    assert_eq!(card_count(&body), 0);
}

#[test]
fn garbage_numbers_do_not_filter() {
    let store = DatasetStore::with_listings(fixture_listings());

    let body = body_string(handle(get("/listings?min_rooms=abc&max_price=viel"), &store).unwrap());

    assert_eq!(card_count(&body), 2);
}

#[test]
fn unavailable_dataset_renders_error_without_count() {
    let store = DatasetStore::new();
    store.publish(LoadOutcome::Unavailable);

    let body = body_string(handle(get("/"), &store).unwrap());

    assert!(body.contains(LOAD_ERROR_MESSAGE));
    assert!(body.contains(r#"<strong id="anzahl-ergebnisse"></strong>"#));
    assert_eq!(card_count(&body), 0);
    assert!(!body.contains(NO_RESULTS_MESSAGE));
}

#[test]
fn health_check() {
    let store = DatasetStore::new();
    let resp = handle(get("/health"), &store).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let store = DatasetStore::new();

    let err = match handle(get("/admin"), &store) {
        Err(err) => err,
        Ok(_) => panic!("expected /admin to be unrouted"),
    };
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn post_is_not_routed() {
    let store = DatasetStore::with_listings(fixture_listings());
    let mut req = get("/");
    *req.method_mut() = Method::POST;

    assert!(matches!(handle(req, &store), Err(ServerError::NotFound)));
}

#[test]
fn internal_error_renders_500_page() {
    let resp = error_to_response(ServerError::InternalError);

    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
    assert!(body_string(resp).contains("Error 500"));
}
