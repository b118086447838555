// loader.rs
use crate::app::show_listings;
use crate::domain::{FilterCriteria, Listing};
use crate::errors::LoadError;
use crate::loader::source::DatasetSource;
use crate::loader::store::{DatasetStore, LoadOutcome};
use crate::render::{render_load_error, Display};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{error, info, warn};

pub struct Loader {
    source: Box<dyn DatasetSource>,
}

impl Loader {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Fetches and publishes the dataset, then shows everything (empty
    /// criteria). Only the first call against a store fetches anything.
    pub fn load(&self, store: &DatasetStore) -> Display {
        if let Some(outcome) = store.outcome() {
            warn!("dataset already loaded, skipping fetch");
            return display_for(store, outcome);
        }

        let outcome = match self.fetch_listings() {
            Ok(listings) => {
                info!(
                    source = %self.source.describe(),
                    count = listings.len(),
                    "dataset loaded"
                );
                LoadOutcome::Ready(listings)
            }
            Err(e) => {
                error!(source = %self.source.describe(), "failed to load listings: {e}");
                LoadOutcome::Unavailable
            }
        };

        if !store.publish(outcome) {
            warn!("dataset was published concurrently, keeping the first result");
        }

        match store.outcome() {
            Some(outcome) => display_for(store, outcome),
            None => Display::default(),
        }
    }

    /// Runs [`Loader::load`] on its own thread so requests can be served while
    /// the fetch is pending. A panicking load leaves the store unavailable.
    pub fn spawn(self, store: Arc<DatasetStore>) -> JoinHandle<Display> {
        std::thread::spawn(move || {
            info!(source = %self.source.describe(), "loading dataset");

            match panic::catch_unwind(AssertUnwindSafe(|| self.load(&store))) {
                Ok(view) => {
                    info!(shown = ?view.count, "initial listing view rendered");
                    view
                }
                Err(_) => {
                    error!(source = %self.source.describe(), "dataset loader panicked");
                    store.publish(LoadOutcome::Unavailable);
                    match store.outcome() {
                        Some(outcome) => display_for(&store, outcome),
                        None => Display::default(),
                    }
                }
            }
        })
    }

    fn fetch_listings(&self) -> Result<Vec<Listing>, LoadError> {
        let body = self.source.fetch()?;
        serde_json::from_str::<Vec<Listing>>(&body)
            .map_err(|e| LoadError::DatasetUnavailable(format!("parsing dataset: {e}")))
    }
}

fn display_for(store: &DatasetStore, outcome: &LoadOutcome) -> Display {
    match outcome {
        LoadOutcome::Ready(_) => show_listings(store, &FilterCriteria::default()),
        LoadOutcome::Unavailable => {
            let mut display = Display::default();
            render_load_error(&mut display);
            display
        }
    }
}
