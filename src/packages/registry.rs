//! Fetcher traits for the remote data this crate consumes

#[cfg(test)]
use mockall::automock;

use crate::packages::error::RegistryError;
use crate::packages::types::{Manifest, PackageRecord};

/// Source of the supported packages manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetches the full manifest in a single request
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Package name to opaque metadata record
    /// * `Err(RegistryError)` - On transport failure, non-success status or malformed JSON
    async fn fetch_manifest(&self) -> Result<Manifest, RegistryError>;
}

/// Public package index queried for packages missing from the manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageIndex: Send + Sync {
    /// Fetches metadata for a single package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "requests")
    ///
    /// # Returns
    /// * `Ok(PackageRecord)` - The index record for the package
    /// * `Err(RegistryError::NotFound)` - If the index does not know the package
    /// * `Err(RegistryError)` - For any other failure
    async fn fetch_package(&self, package_name: &str) -> Result<PackageRecord, RegistryError>;
}
