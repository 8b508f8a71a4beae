//! Classification of requested packages against the manifest and the index

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::PURE_PYTHON_WHEEL_SUFFIX;
use crate::packages::cache::ManifestCache;
use crate::packages::error::{MatchError, RegistryError};
use crate::packages::registry::PackageIndex;
use crate::packages::types::{MatchResult, PackageMatch, PackageRecord};

/// Whether a distribution filename names an architecture-independent wheel
///
/// Exact, case-sensitive suffix match on `none-any.whl`. ABI tags and PyScript
/// compatibility are not considered.
pub fn is_pure_python_wheel(filename: &str) -> bool {
    filename.ends_with(PURE_PYTHON_WHEEL_SUFFIX)
}

/// Whether the current release of an index record ships a pure Python wheel
pub fn has_pure_python_wheel(record: &PackageRecord) -> bool {
    record.files.iter().any(|file| is_pure_python_wheel(file))
}

/// Groups the manifest cache with the index used for cache misses
pub struct PackageMatcher {
    cache: ManifestCache,
    index: Arc<dyn PackageIndex>,
}

impl PackageMatcher {
    pub fn new(cache: ManifestCache, index: Arc<dyn PackageIndex>) -> Self {
        Self { cache, index }
    }

    pub fn cache(&self) -> &ManifestCache {
        &self.cache
    }

    /// Classify each requested package name
    ///
    /// The manifest is loaded once for the whole batch. Names absent from it
    /// are looked up on the index one at a time, in request order. An index
    /// "not found" yields [`PackageMatch::unknown`]; any other index failure
    /// aborts the batch and no partial result is returned.
    ///
    /// Names are compared exactly, without PEP 503 normalization. A repeated
    /// name is processed again and its later result replaces the earlier one.
    pub async fn match_packages<S: AsRef<str>>(
        &self,
        package_names: &[S],
    ) -> Result<MatchResult, MatchError> {
        let manifest = self.cache.load().await?;
        let mut result = MatchResult::new();

        for package_name in package_names {
            let package_name = package_name.as_ref();

            let matched = match manifest.get(package_name) {
                Some(info) => {
                    debug!("{} is listed as supported", package_name);
                    PackageMatch::Supported { info: info.clone() }
                }
                None => self.match_on_index(package_name).await?,
            };

            result.insert(package_name.to_string(), matched);
        }

        info!(
            "Matched {} packages ({} supported)",
            result.len(),
            result.values().filter(|m| m.is_supported()).count()
        );

        Ok(result)
    }

    async fn match_on_index(&self, package_name: &str) -> Result<PackageMatch, RegistryError> {
        match self.index.fetch_package(package_name).await {
            Ok(record) => {
                let is_pure_python = has_pure_python_wheel(&record);
                debug!(
                    "{} {} on index, pure python wheel: {}",
                    package_name, record.version, is_pure_python
                );
                Ok(PackageMatch::Unsupported {
                    is_pure_python,
                    info: Some(record.raw),
                })
            }
            Err(RegistryError::NotFound(_)) => {
                debug!("{} does not exist on the index", package_name);
                Ok(PackageMatch::unknown())
            }
            Err(e) => Err(e),
        }
    }
}
