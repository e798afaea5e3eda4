//! Module documentation and introspection
//!
//! This module handles:
//! - Enumerating installed viltkit modules with their manifests (via manifest module)
//! - Case-insensitive substring search across module documentation
//! - Rendering the per-module information document (via tree module)
//!
//! Everything reads the filesystem fresh per query. Module and file
//! enumeration is sorted so output is reproducible for a fixed tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use manifest::{FIELD_UNSET, ModuleManifest};
pub use tree::render_tree;

pub mod manifest;
pub mod tree;

use crate::error::{Result, ViltkitError};

/// Directory under the project root that holds viltkit modules
pub const MODULES_DIR: &str = "packages/viltkit";

/// Documentation subdirectory inside each module
const DOCS_DIR: &str = "docs";

/// Bytes of context kept before a match position
const CONTEXT_BEFORE: usize = 100;

/// Total snippet length in bytes
const CONTEXT_LEN: usize = 300;

/// Bytes of a README shown in the module document
const README_PREVIEW_LEN: usize = 500;

/// Tree depth shown in the module document
const MODULE_TREE_DEPTH: usize = 2;

/// One module directory and its parsed manifest
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    /// Directory basename, used as the module name everywhere
    pub name: String,
    /// Absolute module directory
    pub path: PathBuf,
    pub manifest: ModuleManifest,
}

/// One documentation file matching a search query
#[derive(Debug, Clone)]
pub struct DocMatch {
    pub module: String,
    /// Documentation file name
    pub file: String,
    /// Full path to the matching file
    pub path: PathBuf,
    /// Snippet around the first occurrence, wrapped in ellipses
    pub context: String,
}

/// Read-through index over the modules directory
#[derive(Debug, Clone)]
pub struct DocIndex {
    modules_root: PathBuf,
}

impl DocIndex {
    pub fn new(project_root: &Path) -> Self {
        Self {
            modules_root: project_root.join(MODULES_DIR),
        }
    }

    pub fn modules_root(&self) -> &Path {
        &self.modules_root
    }

    /// Absolute directory for a named module
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.modules_root.join(name)
    }

    /// Modules that carry a manifest, sorted by name.
    ///
    /// Directories without a `composer.json` are not modules and are left
    /// out. A missing modules directory lists as empty rather than failing.
    pub fn list_modules(&self) -> Result<Vec<ModuleEntry>> {
        let mut entries = Vec::new();

        for dir in self.module_dirs()? {
            let manifest_path = dir.join("composer.json");
            if !manifest_path.is_file() {
                continue;
            }

            let Some(name) = dir_basename(&dir) else {
                continue;
            };
            let manifest = ModuleManifest::load(&manifest_path)?;
            entries.push(ModuleEntry {
                name,
                path: dir,
                manifest,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Search module documentation for a case-insensitive substring.
    ///
    /// Walks each selected module's `docs/` directory and reports at most
    /// one match per markdown file: the first occurrence, with roughly 300
    /// bytes of surrounding context. `module` narrows the search to one
    /// module; `None` searches all of them.
    pub fn search(&self, query: &str, module: Option<&str>) -> Result<Vec<DocMatch>> {
        let needle = query.to_ascii_lowercase();

        let dirs = match module {
            Some(name) => {
                let dir = self.module_dir(name);
                if !dir.is_dir() {
                    return Err(ViltkitError::ModuleNotFound {
                        name: name.to_string(),
                    });
                }
                vec![dir]
            }
            None => self.module_dirs()?,
        };

        let mut matches = Vec::new();
        for dir in dirs {
            let Some(module_name) = dir_basename(&dir) else {
                continue;
            };
            let docs_dir = dir.join(DOCS_DIR);
            if !docs_dir.is_dir() {
                continue;
            }

            for path in doc_files(&docs_dir) {
                // Non-UTF-8 files cannot match a text query
                let Ok(content) = std::fs::read_to_string(&path) else {
                    continue;
                };
                if let Some(context) = first_match_context(&content, &needle) {
                    let file = dir_basename(&path).unwrap_or_default();
                    matches.push(DocMatch {
                        module: module_name.clone(),
                        file,
                        path,
                        context,
                    });
                }
            }
        }

        Ok(matches)
    }

    /// The full information document for one module.
    ///
    /// Manifest header, dependency and namespace listings when declared,
    /// a depth-bounded directory tree, and a README preview when present.
    pub fn module_info(&self, name: &str) -> Result<String> {
        let dir = self.module_dir(name);
        if !dir.is_dir() {
            return Err(ViltkitError::ModuleNotFound {
                name: name.to_string(),
            });
        }

        let manifest_path = dir.join("composer.json");
        if !manifest_path.is_file() {
            return Ok(format!("Module '{name}' has no composer.json."));
        }
        let manifest = ModuleManifest::load(&manifest_path)?;

        let mut doc = format!("# {name}\n\n");
        doc.push_str(&format!("**Package:** {}\n", manifest.package_name()));
        doc.push_str(&format!("**Version:** {}\n", manifest.package_version()));
        doc.push_str(&format!(
            "**Description:** {}\n\n",
            manifest.package_description()
        ));

        if !manifest.require.is_empty() {
            doc.push_str("## Dependencies\n\n");
            for (dep, version) in &manifest.require {
                doc.push_str(&format!("- {dep}: {version}\n"));
            }
            doc.push('\n');
        }

        if !manifest.autoload.psr4.is_empty() {
            doc.push_str("## Namespaces\n\n");
            for (namespace, path) in &manifest.autoload.psr4 {
                doc.push_str(&format!("- {namespace} => {path}\n"));
            }
            doc.push('\n');
        }

        doc.push_str("## Directory Structure\n\n```\n");
        doc.push_str(&tree::render_tree(&dir, MODULE_TREE_DEPTH));
        doc.push_str("```\n\n");

        let readme_path = dir.join("README.md");
        if readme_path.is_file() {
            if let Ok(readme) = std::fs::read_to_string(&readme_path) {
                let end = floor_char_boundary(&readme, README_PREVIEW_LEN.min(readme.len()));
                doc.push_str("## README Preview\n\n");
                doc.push_str(&readme[..end]);
                doc.push_str("...\n");
            }
        }

        Ok(doc)
    }

    /// Subdirectories of the modules root, sorted
    fn module_dirs(&self) -> Result<Vec<PathBuf>> {
        if !self.modules_root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.modules_root).map_err(|e| {
            ViltkitError::FileReadFailed {
                path: self.modules_root.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

/// Markdown files under a docs directory, recursive and sorted
fn doc_files(docs_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(docs_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Snippet around the first occurrence of an already-lowercased needle.
///
/// The window opens up to `CONTEXT_BEFORE` bytes before the match and spans
/// `CONTEXT_LEN` bytes of the original content, clamped to character
/// boundaries, then trimmed and wrapped in ellipses.
fn first_match_context(content: &str, needle: &str) -> Option<String> {
    // ASCII lowering preserves byte offsets between haystack and content
    let haystack = content.to_ascii_lowercase();
    let pos = haystack.find(needle)?;

    let start = floor_char_boundary(content, pos.saturating_sub(CONTEXT_BEFORE));
    let end = floor_char_boundary(content, (start + CONTEXT_LEN).min(content.len()));

    Some(format!("...{}...", content[start..end].trim()))
}

/// Largest index at or below `idx` that lies on a character boundary
fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn dir_basename(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
}
