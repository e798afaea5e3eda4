//! Staging writes for resolved stubs
//!
//! A staged write replaces the whole destination file: either a copy of the
//! resolved source or the stub's registered fallback content. Parent
//! directories are created as needed. A stub that resolves nowhere and has
//! no fallback is reported as skipped, never as a failure; actual I/O errors
//! surface as typed errors for the pipeline to record.

use std::path::Path;

use crate::error::{Result, ViltkitError};

use super::resolver::SearchRoots;
use super::stubs::{self, StubSpec};

/// Outcome of one staged operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// Destination written from the resolved source or fallback content
    Written,
    /// Destination existed and the conflict decision kept it
    SkippedExisting,
    /// Stub unresolved in every search root and no fallback registered
    SkippedMissingSource,
}

fn file_write_error(path: &Path, e: std::io::Error) -> ViltkitError {
    ViltkitError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Stage one stub into the project tree
///
/// The conflict decision has already been made by the caller; this only
/// performs the write.
pub fn stage_stub(
    spec: &StubSpec,
    roots: &SearchRoots,
    project_root: &Path,
) -> Result<StageOutcome> {
    let destination = project_root.join(spec.destination);

    if let Some(source) = roots.resolve(spec.id) {
        ensure_parent_dir(&destination)?;
        std::fs::copy(&source, &destination).map_err(|e| file_write_error(&destination, e))?;
        return Ok(StageOutcome::Written);
    }

    match stubs::fallback_content(spec.id) {
        Some(content) => {
            ensure_parent_dir(&destination)?;
            std::fs::write(&destination, content)
                .map_err(|e| file_write_error(&destination, e))?;
            Ok(StageOutcome::Written)
        }
        None => Ok(StageOutcome::SkippedMissingSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spec(id: &'static str, destination: &'static str) -> StubSpec {
        StubSpec {
            id,
            destination,
            confirmable: false,
        }
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("subdir/nested/file.txt");

        ensure_parent_dir(&file_path).unwrap();
        assert!(file_path.parent().unwrap().exists());
    }

    #[test]
    fn test_stage_copies_resolved_source() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stubs");
        std::fs::create_dir_all(root.join("routes")).unwrap();
        std::fs::write(root.join("routes/panel.php"), "<?php // panel routes\n").unwrap();

        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let roots = SearchRoots::new(vec![root]);
        let outcome = stage_stub(&spec("routes/panel.php", "routes/panel.php"), &roots, &project)
            .unwrap();

        assert_eq!(outcome, StageOutcome::Written);
        assert_eq!(
            std::fs::read_to_string(project.join("routes/panel.php")).unwrap(),
            "<?php // panel routes\n"
        );
    }

    #[test]
    fn test_stage_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stubs");
        std::fs::create_dir_all(root.join("layouts")).unwrap();
        std::fs::write(root.join("layouts/AppLayout.vue"), "<template />\n").unwrap();

        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let roots = SearchRoots::new(vec![root]);
        stage_stub(
            &spec("layouts/AppLayout.vue", "resources/js/layouts/AppLayout.vue"),
            &roots,
            &project,
        )
        .unwrap();

        assert!(project.join("resources/js/layouts/AppLayout.vue").exists());
    }

    #[test]
    fn test_stage_writes_fallback_when_unresolved() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let roots = SearchRoots::new(vec![temp.path().join("no-such-root")]);
        let vite = StubSpec {
            id: "vite.config.ts",
            destination: "vite.config.ts",
            confirmable: true,
        };
        let outcome = stage_stub(&vite, &roots, &project).unwrap();

        assert_eq!(outcome, StageOutcome::Written);
        let written = std::fs::read_to_string(project.join("vite.config.ts")).unwrap();
        assert_eq!(written, stubs::fallback_content("vite.config.ts").unwrap());
    }

    #[test]
    fn test_stage_skips_when_no_source_and_no_fallback() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let roots = SearchRoots::new(vec![temp.path().join("no-such-root")]);
        let outcome = stage_stub(&spec("models/User.php", "app/Models/User.php"), &roots, &project)
            .unwrap();

        assert_eq!(outcome, StageOutcome::SkippedMissingSource);
        assert!(!project.join("app/Models/User.php").exists());
    }

    #[test]
    fn test_stage_replaces_existing_destination() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stubs");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("app.ts"), "import './bootstrap';\n").unwrap();

        let project = temp.path().join("project");
        std::fs::create_dir_all(project.join("resources/js")).unwrap();
        std::fs::write(project.join("resources/js/app.ts"), "// locally modified\n").unwrap();

        let roots = SearchRoots::new(vec![root]);
        stage_stub(&spec("app.ts", "resources/js/app.ts"), &roots, &project).unwrap();

        assert_eq!(
            std::fs::read_to_string(project.join("resources/js/app.ts")).unwrap(),
            "import './bootstrap';\n"
        );
    }
}
