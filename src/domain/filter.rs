// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Raw values of the three input controls, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterInputs {
    pub city: Option<String>,
    pub min_rooms: Option<String>,
    pub max_price: Option<String>,
}

/// Criteria derived from [`FilterInputs`] for a single filter action.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Empty matches every city.
    pub city: String,
    pub min_rooms: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            city: String::new(),
            min_rooms: 0.0,
            max_price: f64::INFINITY,
        }
    }
}

impl FilterCriteria {
    /// Empty or unparseable numbers degrade to "no bound"; never fails.
    pub fn from_inputs(inputs: &FilterInputs) -> Self {
        Self {
            city: inputs.city.clone().unwrap_or_default(),
            min_rooms: parse_number(inputs.min_rooms.as_deref()).unwrap_or(0.0),
            max_price: parse_number(inputs.max_price.as_deref()).unwrap_or(f64::INFINITY),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let city_ok = self.city.is_empty() || listing.city == self.city;

        // A listing without rooms or price can't satisfy a numeric bound.
        let rooms_ok = listing.rooms.is_some_and(|rooms| rooms >= self.min_rooms);
        let price_ok = listing.price.is_some_and(|price| price <= self.max_price);

        city_ok && rooms_ok && price_ok
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Matching listings, in dataset order.
pub fn filter_listings<'a>(dataset: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    dataset.iter().filter(|l| criteria.matches(l)).collect()
}
