//! PyPI JSON API client for per-package metadata

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::packages::error::RegistryError;
use crate::packages::registry::PackageIndex;
use crate::packages::types::PackageRecord;

/// PyPI registry client
pub struct PypiIndex {
    client: Client,
    base_url: String,
}

impl PypiIndex {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

/// Distribution file entry within a release
#[derive(Debug, Deserialize)]
struct PypiFile {
    filename: String,
}

/// Pulls the current version and its file names out of a PyPI JSON document
///
/// A missing `info.version` or `releases` key is an error. A current version
/// without a `releases` entry has no files.
fn parse_record(raw: Value) -> Result<PackageRecord, RegistryError> {
    let version = raw
        .pointer("/info/version")
        .and_then(Value::as_str)
        .ok_or_else(|| RegistryError::InvalidResponse("missing info.version".to_string()))?
        .to_string();

    let releases = raw
        .get("releases")
        .and_then(Value::as_object)
        .ok_or_else(|| RegistryError::InvalidResponse("missing releases".to_string()))?;

    let files = match releases.get(&version) {
        Some(entries) => Vec::<PypiFile>::deserialize(entries)
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?
            .into_iter()
            .map(|file| file.filename)
            .collect(),
        None => Vec::new(),
    };

    Ok(PackageRecord::new(version, files, raw))
}

#[async_trait]
impl PackageIndex for PypiIndex {
    async fn fetch_package(&self, package_name: &str) -> Result<PackageRecord, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("PyPI returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let record = parse_record(raw)?;

        debug!(
            "Found {} files for {} {}",
            record.files.len(),
            package_name,
            record.version
        );

        Ok(record)
    }
}
