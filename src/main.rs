use crate::config::AppConfig;
use crate::loader::{source_for, DatasetStore, LoadOutcome, Loader};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod loader;
mod render;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Kick off the one-time dataset load; requests before it finishes see no listings
    let store = Arc::new(DatasetStore::new());
    let loading = match source_for(&cfg.dataset, cfg.fetch_timeout) {
        Ok(source) => Some(Loader::new(source).spawn(Arc::clone(&store))),
        Err(e) => {
            error!("failed to set up dataset source: {e}");
            store.publish(LoadOutcome::Unavailable);
            None
        }
    };

    // 3️⃣ Start the server
    info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    if let Some(handle) = loading {
        if handle.join().is_err() {
            error!("dataset loader thread did not finish cleanly");
        }
    }

    info!("server shut down cleanly");
}
