use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the cache file location
pub const CACHE_PATH_ENV: &str = "PYSCRIPT_PACKAGES_CACHE";

/// File name of the cached manifest when no override is given
pub const CACHE_FILE_NAME: &str = "pspkg_cache.json";

/// Supported packages manifest published by PyScript
pub const DEFAULT_MANIFEST_URL: &str = "https://pyscript.github.io/pyscript-packages/api/all.json";

/// Base URL of the PyPI JSON API
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Timeout for a single HTTP request
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Filename suffix taken as evidence of an architecture-independent wheel
pub const PURE_PYTHON_WHEEL_SUFFIX: &str = "none-any.whl";

/// Process-wide settings, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub cache_path: PathBuf,
    pub manifest_url: String,
    pub index_url: String,
}

impl Settings {
    pub fn new(cache_path: PathBuf) -> Self {
        Self {
            cache_path,
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }

    /// Reads the environment and resolves the cache path.
    pub fn from_env() -> Self {
        Self::new(cache_path())
    }
}

/// Returns the path of the manifest cache file.
/// Uses $PYSCRIPT_PACKAGES_CACHE if set and non-empty,
/// otherwise a file next to the running executable,
/// then the user cache directory, or ./pspkg_cache.json as a last resort.
pub fn cache_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    cache_path_with_env(std::env::var(CACHE_PATH_ENV).ok(), exe_dir, dirs::cache_dir())
}

fn cache_path_with_env(
    env_override: Option<String>,
    exe_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = env_override.filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    exe_dir
        .or_else(|| cache_dir.map(|dir| dir.join("pspkg")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_FILE_NAME)
}
