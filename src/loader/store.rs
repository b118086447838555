// store.rs
use crate::domain::Listing;
use std::sync::OnceLock;

/// Result of the single dataset load.
#[derive(Debug)]
pub enum LoadOutcome {
    Ready(Vec<Listing>),
    Unavailable,
}

/// Write-once holder for the dataset. Written by the loader, read by every
/// filter action afterwards.
#[derive(Debug, Default)]
pub struct DatasetStore {
    slot: OnceLock<LoadOutcome>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a fixture dataset.
    #[cfg(test)]
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let store = Self::new();
        let _ = store.slot.set(LoadOutcome::Ready(listings));
        store
    }

    /// Returns false if the store was already written.
    pub fn publish(&self, outcome: LoadOutcome) -> bool {
        self.slot.set(outcome).is_ok()
    }

    pub fn outcome(&self) -> Option<&LoadOutcome> {
        self.slot.get()
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.slot.get(), Some(LoadOutcome::Unavailable))
    }

    /// The loaded listings. Empty while the load is pending or after it failed.
    pub fn listings(&self) -> &[Listing] {
        match self.slot.get() {
            Some(LoadOutcome::Ready(listings)) => listings,
            _ => &[],
        }
    }
}
