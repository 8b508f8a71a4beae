//! Fetcher implementations for the PyScript packages API and PyPI

use reqwest::Client;

use crate::config::FETCH_TIMEOUT;
use crate::packages::error::RegistryError;

pub mod pypi;
pub mod pyscript;

pub use pypi::PypiIndex;
pub use pyscript::PyscriptManifest;

/// Builds the HTTP client shared by both fetchers
pub fn http_client() -> Result<Client, RegistryError> {
    let client = Client::builder()
        .user_agent(concat!("pspkg/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}
