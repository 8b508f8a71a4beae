//! Command dispatch shared by the binary and its tests

use std::sync::Arc;

use anyhow::Context;

use crate::config::Settings;
use crate::packages::cache::{ManifestCache, remove_cache_file};
use crate::packages::error::RegistryError;
use crate::packages::matcher::PackageMatcher;
use crate::packages::registries::{PypiIndex, PyscriptManifest, http_client};

pub const RESET_MESSAGE: &str = "Local dump of supported packages has been deleted.";
pub const REFRESH_MESSAGE: &str = "Local dump of supported packages has been refreshed.";

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Reset,
    Refresh,
    Match(Vec<String>),
}

impl Action {
    /// Picks the action for the given flags and arguments.
    /// `--reset` wins over `--refresh`, and both win over package names.
    /// Returns `None` when there is nothing to do.
    pub fn select(reset: bool, refresh: bool, packages: Vec<String>) -> Option<Self> {
        if reset {
            Some(Self::Reset)
        } else if refresh {
            Some(Self::Refresh)
        } else if !packages.is_empty() {
            Some(Self::Match(packages))
        } else {
            None
        }
    }
}

/// Wires the PyScript manifest, the PyPI index and the cache file together
pub fn build_matcher(settings: &Settings) -> Result<PackageMatcher, RegistryError> {
    let client = http_client()?;
    let source = PyscriptManifest::new(client.clone(), settings.manifest_url.clone());
    let index = PypiIndex::new(client, settings.index_url.clone());
    let cache = ManifestCache::new(settings.cache_path.clone(), Arc::new(source));

    Ok(PackageMatcher::new(cache, Arc::new(index)))
}

/// Runs an action from settings, building the HTTP stack only when it is needed
pub async fn run(action: Action, settings: &Settings) -> anyhow::Result<String> {
    if action == Action::Reset {
        remove_cache_file(&settings.cache_path)
            .context("Failed to delete the supported packages cache")?;
        return Ok(RESET_MESSAGE.to_string());
    }

    let matcher = build_matcher(settings)?;
    execute(action, &matcher).await
}

/// Runs an action and returns the text to print on stdout
pub async fn execute(action: Action, matcher: &PackageMatcher) -> anyhow::Result<String> {
    match action {
        Action::Reset => {
            matcher
                .cache()
                .reset()
                .context("Failed to delete the supported packages cache")?;
            Ok(RESET_MESSAGE.to_string())
        }
        Action::Refresh => {
            matcher
                .cache()
                .refresh()
                .await
                .context("Failed to refresh the supported packages cache")?;
            Ok(REFRESH_MESSAGE.to_string())
        }
        Action::Match(packages) => {
            let result = matcher.match_packages(packages.as_slice()).await?;
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}
