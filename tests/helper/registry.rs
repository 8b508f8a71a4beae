//! Registry test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tempfile::TempDir;

use pspkg::packages::cache::ManifestCache;
use pspkg::packages::error::RegistryError;
use pspkg::packages::matcher::PackageMatcher;
use pspkg::packages::registry::{ManifestSource, PackageIndex};
use pspkg::packages::types::{Manifest, PackageRecord};

/// Manifest source serving a fixed manifest and counting fetches
#[derive(Default)]
pub struct StaticManifest {
    manifest: Manifest,
    fetches: AtomicUsize,
}

impl StaticManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, info: Value) -> Self {
        self.manifest.insert(name.to_string(), info);
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ManifestSource for StaticManifest {
    async fn fetch_manifest(&self) -> Result<Manifest, RegistryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.manifest.clone())
    }
}

/// Package index serving canned records and counting lookups per name
///
/// Unknown names are reported as not found, names registered with
/// [`StaticIndex::with_failure`] as a server error.
#[derive(Default)]
pub struct StaticIndex {
    records: HashMap<String, PackageRecord>,
    failing: Vec<String>,
    lookups: std::sync::Mutex<Vec<String>>,
}

impl StaticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, version: &str, files: Vec<&str>) -> Self {
        self.records
            .insert(name.to_string(), pypi_record(version, &files));
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageIndex for StaticIndex {
    async fn fetch_package(&self, package_name: &str) -> Result<PackageRecord, RegistryError> {
        self.lookups.lock().unwrap().push(package_name.to_string());

        if self.failing.iter().any(|name| name == package_name) {
            return Err(RegistryError::UnexpectedStatus {
                url: format!("https://pypi.org/pypi/{}/json", package_name),
                status: 500,
            });
        }

        self.records
            .get(package_name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(package_name.to_string()))
    }
}

/// Builds an index record shaped like the PyPI JSON API response
pub fn pypi_record(version: &str, files: &[&str]) -> PackageRecord {
    let raw = json!({
        "info": {"name": "test", "version": version},
        "releases": {
            (version): files.iter().map(|f| json!({"filename": f})).collect::<Vec<Value>>()
        }
    });
    PackageRecord::new(
        version.to_string(),
        files.iter().map(|f| f.to_string()).collect(),
        raw,
    )
}

/// Create a matcher backed by a cache file in a fresh temp directory
pub fn create_test_matcher(
    manifest: Arc<StaticManifest>,
    index: Arc<StaticIndex>,
) -> (TempDir, PackageMatcher) {
    let temp_dir = TempDir::new().unwrap();
    let cache = ManifestCache::new(temp_dir.path().join("pspkg_cache.json"), manifest);
    (temp_dir, PackageMatcher::new(cache, index))
}
