//! Command implementations for Viltkit CLI

use std::path::PathBuf;

use crate::error::{Result, ViltkitError};

pub mod completions;
pub mod info;
pub mod install;
pub mod mcp;
pub mod modules;
pub mod search;
pub mod user;
pub mod version;

/// Project path from CLI argument or current directory
pub(crate) fn project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ViltkitError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_path_prefers_argument() {
        let path = project_path(Some(PathBuf::from("/srv/app"))).unwrap();
        assert_eq!(path, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_project_path_defaults_to_current_dir() {
        let path = project_path(None).unwrap();
        assert!(path.is_absolute());
    }
}
