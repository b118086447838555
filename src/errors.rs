use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, response building).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error")]
    InternalError,
}

/// The one failure the loader knows about. The detail is for operators only.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
