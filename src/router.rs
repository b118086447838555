use crate::app::filter_action;
use crate::domain::FilterInputs;
use crate::errors::ServerError;
use crate::loader::DatasetStore;
use crate::responses::{html_response, text_response, ResultResp};
use crate::templates;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, store: &DatasetStore) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let inputs = filter_inputs(&req);
            let display = filter_action(store, &inputs);
            html_response(templates::pages::listings_page(&inputs, &display))
        }
        ("GET", "/listings") => {
            let inputs = filter_inputs(&req);
            let display = filter_action(store, &inputs);
            html_response(templates::pages::results_fragment(&display))
        }
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn filter_inputs(req: &Request) -> FilterInputs {
    let mut params = parse_query(req);

    FilterInputs {
        city: params.remove("city"),
        min_rooms: params.remove("min_rooms"),
        max_price: params.remove("max_price"),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
