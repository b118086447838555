mod loader;
mod source;
mod store;

pub use loader::Loader;
pub use source::{source_for, DatasetSource, FileSource, HttpSource};
pub use store::{DatasetStore, LoadOutcome};
