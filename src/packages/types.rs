//! Common types shared by the fetchers, the cache and the matcher

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// Supported packages manifest: package name (exact case) to an opaque record
pub type Manifest = serde_json::Map<String, Value>;

/// Classification of every requested package, keyed by the requested name
pub type MatchResult = IndexMap<String, PackageMatch>;

/// Package metadata returned by the package index
///
/// The JSON document is kept verbatim. Only the current version and the file
/// names published for it are pulled out, since that is all the matcher looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    /// Version reported as current by the index (`info.version`)
    pub version: String,
    /// File names published for `version`, in index order
    pub files: Vec<String>,
    /// The full record as returned by the index
    pub raw: Value,
}

impl PackageRecord {
    pub fn new(version: String, files: Vec<String>, raw: Value) -> Self {
        Self {
            version,
            files,
            raw,
        }
    }
}

/// Outcome of matching a single package name
#[derive(Debug, Clone, PartialEq)]
pub enum PackageMatch {
    /// Listed in the manifest; `info` is the manifest's record for the name
    Supported { info: Value },
    /// Not listed in the manifest
    ///
    /// `info` holds the index record, or `None` when the index has never
    /// heard of the package.
    Unsupported {
        is_pure_python: bool,
        info: Option<Value>,
    },
}

impl PackageMatch {
    /// Match for a package unknown to both the manifest and the index
    pub fn unknown() -> Self {
        Self::Unsupported {
            is_pure_python: false,
            info: None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }

    /// `None` for supported packages, where the question is not asked
    pub fn is_pure_python(&self) -> Option<bool> {
        match self {
            Self::Supported { .. } => None,
            Self::Unsupported { is_pure_python, .. } => Some(*is_pure_python),
        }
    }

    pub fn info(&self) -> Option<&Value> {
        match self {
            Self::Supported { info } => Some(info),
            Self::Unsupported { info, .. } => info.as_ref(),
        }
    }
}

impl Serialize for PackageMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Supported { info } => {
                let mut state = serializer.serialize_struct("PackageMatch", 2)?;
                state.serialize_field("supported", &true)?;
                state.serialize_field("info", info)?;
                state.end()
            }
            Self::Unsupported {
                is_pure_python,
                info,
            } => {
                let mut state = serializer.serialize_struct("PackageMatch", 3)?;
                state.serialize_field("supported", &false)?;
                state.serialize_field("is_pure_python", is_pure_python)?;
                state.serialize_field("info", info)?;
                state.end()
            }
        }
    }
}
