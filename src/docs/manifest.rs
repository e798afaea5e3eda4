//! Composer manifest parsing for viltkit modules
//!
//! Each module directory carries a `composer.json` describing the package.
//! Manifests are read fresh on every query; nothing here caches.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ViltkitError};

/// Rendered in place of manifest fields the module did not declare
pub const FIELD_UNSET: &str = "N/A";

/// A module's `composer.json`, reduced to the fields we present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,

    /// Dependency name to version constraint
    #[serde(default)]
    pub require: BTreeMap<String, String>,

    #[serde(default)]
    pub autoload: Autoload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Autoload {
    /// Namespace prefix to source directory
    #[serde(rename = "psr-4", default)]
    pub psr4: BTreeMap<String, String>,
}

impl ModuleManifest {
    /// Parse a `composer.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ViltkitError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ViltkitError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn package_name(&self) -> &str {
        self.name.as_deref().unwrap_or(FIELD_UNSET)
    }

    pub fn package_version(&self) -> &str {
        self.version.as_deref().unwrap_or(FIELD_UNSET)
    }

    pub fn package_description(&self) -> &str {
        self.description.as_deref().unwrap_or(FIELD_UNSET)
    }
}
