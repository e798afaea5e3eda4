//! Stub source resolution across layered search roots
//!
//! Stubs are identified by a path relative to a search root. Roots are
//! consulted strictly in the order they were constructed with; the first
//! root containing the stub wins and later roots are never consulted, even
//! when they would also match. Absence everywhere is an `Option::None`, not
//! an error: callers decide whether a missing stub is fatal, optional, or
//! replaced by fallback content.

use std::path::{Path, PathBuf};

/// Ordered list of base directories consulted to resolve a stub
#[derive(Debug, Clone)]
pub struct SearchRoots {
    roots: Vec<PathBuf>,
}

impl SearchRoots {
    /// Create search roots from an explicit ordered list
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Default root trio for a project, consulted in this order:
    /// the composer-installed package, a local package checkout, and a
    /// sibling monorepo checkout next to the project.
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(vec![
            project_root.join("vendor/viltkit/panel/stubs"),
            project_root.join("packages/viltkit/panel/stubs"),
            project_root.join("../viltkit/packages/panel/stubs"),
        ])
    }

    /// Resolve a stub to the first existing candidate path
    pub fn resolve(&self, stub: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(stub))
            .find(|candidate| candidate.exists())
    }

    /// The ordered roots, mostly for diagnostics
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}
