//! Panel installation for Laravel projects
//!
//! This module handles:
//! - Stub resolution across ordered search roots (via resolver module)
//! - Conflict decisions for existing destination files (via policy module)
//! - Staging stub files into the project tree (via stage module)
//! - External lifecycle commands such as artisan and npm (via external module)
//! - The ordered, best-effort provisioning pipeline (via pipeline module)

use std::path::Path;

pub use external::{CommandSpec, Invocation, Invoker, ProcessInvoker};
pub use pipeline::{
    InstallPipeline, PipelineReport, PipelineStep, RunConfig, StepKind, StepResult, StepStatus,
};
pub use policy::{ConflictDecision, decide};
pub use resolver::SearchRoots;
pub use stage::{StageOutcome, ensure_parent_dir, stage_stub};
pub use stubs::StubSpec;

pub mod external;
pub mod pipeline;
pub mod policy;
pub mod resolver;
pub mod stage;
pub mod stubs;

use crate::error::{Result, ViltkitError};

/// Verify that `path` is a Laravel project root before touching anything.
///
/// The `artisan` script is the one file every Laravel application has at its
/// root, so its absence means the target is not a project we should write
/// into. Callers check this before constructing a pipeline; no step runs
/// against a directory that fails it.
pub fn check_project_root(path: &Path) -> Result<()> {
    if path.join("artisan").is_file() {
        Ok(())
    } else {
        Err(ViltkitError::ProjectNotFound {
            path: path.display().to_string(),
        })
    }
}
