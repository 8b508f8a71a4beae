use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to access cache file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed cache file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to fetch supported packages: {0}")]
    Fetch(#[from] RegistryError),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Failed to query package index: {0}")]
    Registry(#[from] RegistryError),
}
