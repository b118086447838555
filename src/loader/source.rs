// source.rs
use crate::errors::LoadError;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Where the dataset document comes from. Implementations return the raw body.
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<String, LoadError>;
}

/// Dataset file on local disk, relative to the working directory.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            LoadError::DatasetUnavailable(format!("reading {}: {e}", self.path.display()))
        })
    }
}

/// Dataset served over HTTP. Anything outside 2xx counts as unavailable.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| LoadError::DatasetUnavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| LoadError::DatasetUnavailable(format!("GET {}: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::DatasetUnavailable(format!(
                "GET {}: HTTP status {status}",
                self.url
            )));
        }

        resp.text()
            .map_err(|e| LoadError::DatasetUnavailable(format!("reading body: {e}")))
    }
}

/// `http://` / `https://` locations go over the network, everything else is a path.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Result<Box<dyn DatasetSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
