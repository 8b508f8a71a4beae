use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::packages::error::CacheError;
use crate::packages::registry::ManifestSource;
use crate::packages::types::Manifest;

/// Delete the cache file at `path`; a missing file is not an error
pub fn remove_cache_file(path: &Path) -> Result<(), CacheError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Deleted cache file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No cache file to delete at {:?}", path);
            Ok(())
        }
        Err(source) => Err(CacheError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Local copy of the supported packages manifest, stored as a JSON file
///
/// The file is the only state. Every [`ManifestCache::load`] reads it again.
pub struct ManifestCache {
    path: PathBuf,
    source: Arc<dyn ManifestSource>,
}

impl ManifestCache {
    pub fn new(path: PathBuf, source: Arc<dyn ManifestSource>) -> Self {
        Self { path, source }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Fetch the manifest and overwrite the cache file with it
    pub async fn refresh(&self) -> Result<(), CacheError> {
        let manifest = self.source.fetch_manifest().await?;
        self.write(&manifest)?;
        info!(
            "Cached {} supported packages at {:?}",
            manifest.len(),
            self.path
        );
        Ok(())
    }

    /// Delete the cache file, if there is one
    pub fn reset(&self) -> Result<(), CacheError> {
        remove_cache_file(&self.path)
    }

    /// Read the manifest from disk, populating the cache file first if it is missing
    pub async fn load(&self) -> Result<Manifest, CacheError> {
        if !self.path.exists() {
            debug!("Cache file {:?} missing, refreshing", self.path);
            self.refresh().await?;
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let manifest: Manifest = serde_json::from_str(&content)?;

        debug!("Loaded {} supported packages from cache", manifest.len());
        Ok(manifest)
    }

    /// Serialize as pretty JSON (2-space indent), truncating any existing content
    fn write(&self, manifest: &Manifest) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(manifest)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
