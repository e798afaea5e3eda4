//! The provisioning pipeline
//!
//! A run is a single pass over a declared, ordered step table. Steps stage
//! stub sets, prune superseded trees, or invoke external lifecycle commands.
//! Execution is strictly sequential and best-effort: a failed step is
//! recorded and the run continues. There is no rollback; re-running is the
//! recovery path, and staging is idempotent unless forced.
//!
//! Skip flags are resolved at construction, so the declared table already
//! reflects the run configuration and the report always carries one entry
//! per declared step.

use std::path::{Path, PathBuf};

use super::external::{CommandSpec, Invoker};
use super::policy::{self, ConflictDecision};
use super::resolver::SearchRoots;
use super::stage::{self, StageOutcome};
use super::stubs::{self, StubSpec};

/// Immutable configuration for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Overwrite existing destinations without asking
    pub force: bool,
    /// Skip the schema migration step
    pub skip_migrations: bool,
    /// Skip npm dependency installation and the asset build
    pub skip_npm: bool,
    /// Scaffold one named panel after the generic steps
    pub panel: Option<String>,
}

/// What one step does
#[derive(Debug, Clone)]
pub enum StepKind {
    /// Stage a set of stubs through conflict policy and the stage writer
    StageSet(&'static [StubSpec]),
    /// Run an external lifecycle command in the project root
    External(CommandSpec),
    /// Remove a superseded directory tree; an absent tree is already done
    Cleanup(&'static str),
}

/// One declared unit of provisioning work
#[derive(Debug, Clone)]
pub struct PipelineStep {
    pub name: &'static str,
    pub kind: StepKind,
    /// Resolved from the run configuration; a marked step is recorded as
    /// skipped without executing
    pub skip: bool,
}

/// Outcome status of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    Skipped,
    Failed,
}

/// Recorded outcome of one step
#[derive(Debug, Clone)]
pub struct StepResult {
    pub name: &'static str,
    pub status: StepStatus,
    pub detail: Option<String>,
}

/// End-of-run report, one entry per declared step in declared order
#[derive(Debug)]
pub struct PipelineReport {
    pub results: Vec<StepResult>,
}

impl PipelineReport {
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == StepStatus::Failed)
            .count()
    }

    /// True when no step failed (skipped steps are fine)
    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Declared step table for a run configuration
fn build_steps(config: &RunConfig) -> Vec<PipelineStep> {
    let mut steps = vec![
        PipelineStep {
            name: "publish-config",
            kind: StepKind::StageSet(stubs::CONFIG_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "publish-styles",
            kind: StepKind::StageSet(stubs::STYLE_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "publish-scripts",
            kind: StepKind::StageSet(stubs::SCRIPT_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "publish-views",
            kind: StepKind::StageSet(stubs::VIEW_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "publish-http",
            kind: StepKind::StageSet(stubs::HTTP_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "publish-models",
            kind: StepKind::StageSet(stubs::MODEL_STUBS),
            skip: false,
        },
        PipelineStep {
            name: "prune-legacy",
            kind: StepKind::Cleanup(stubs::LEGACY_PAGES_DIR),
            skip: false,
        },
        PipelineStep {
            name: "schema-migrate",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "migrate", "--force"])),
            skip: config.skip_migrations,
        },
        PipelineStep {
            name: "dependency-install",
            kind: StepKind::External(CommandSpec::new("npm", &["install"])),
            skip: config.skip_npm,
        },
        PipelineStep {
            name: "asset-build",
            kind: StepKind::External(CommandSpec::new("npm", &["run", "build"])),
            skip: config.skip_npm,
        },
        PipelineStep {
            name: "clear-config-cache",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "config:clear"])),
            skip: false,
        },
        PipelineStep {
            name: "clear-app-cache",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "cache:clear"])),
            skip: false,
        },
        PipelineStep {
            name: "clear-view-cache",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "view:clear"])),
            skip: false,
        },
        PipelineStep {
            name: "clear-route-cache",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "route:clear"])),
            skip: false,
        },
    ];

    if let Some(name) = &config.panel {
        steps.push(PipelineStep {
            name: "scaffold-panel",
            kind: StepKind::External(CommandSpec::new("php", &["artisan", "viltkit:panel", name])),
            skip: false,
        });
    }

    steps
}

/// Installer pipeline over one project tree
pub struct InstallPipeline<'a> {
    project_root: PathBuf,
    roots: SearchRoots,
    config: RunConfig,
    invoker: &'a dyn Invoker,
    /// Answers `AskUser` decisions; headless callers answer `false`
    confirm_overwrite: &'a dyn Fn(&str) -> bool,
    steps: Vec<PipelineStep>,
}

impl<'a> InstallPipeline<'a> {
    pub fn new(
        project_root: &Path,
        roots: SearchRoots,
        config: RunConfig,
        invoker: &'a dyn Invoker,
        confirm_overwrite: &'a dyn Fn(&str) -> bool,
    ) -> Self {
        let steps = build_steps(&config);
        Self {
            project_root: project_root.to_path_buf(),
            roots,
            config,
            invoker,
            confirm_overwrite,
            steps,
        }
    }

    /// The declared steps, in execution order
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Run the whole pipeline, reporting every declared step
    pub fn run(self) -> PipelineReport {
        self.run_with(|_| {}, |_| {})
    }

    /// Run with start/finish hooks so callers can render live progress
    pub fn run_with<S, F>(mut self, mut on_start: S, mut on_finish: F) -> PipelineReport
    where
        S: FnMut(&PipelineStep),
        F: FnMut(&StepResult),
    {
        let steps = std::mem::take(&mut self.steps);
        let mut results = Vec::with_capacity(steps.len());

        for step in &steps {
            on_start(step);
            let result = self.execute_step(step);
            on_finish(&result);
            results.push(result);
        }

        PipelineReport { results }
    }

    fn execute_step(&self, step: &PipelineStep) -> StepResult {
        if step.skip {
            return StepResult {
                name: step.name,
                status: StepStatus::Skipped,
                detail: None,
            };
        }

        match &step.kind {
            StepKind::StageSet(specs) => self.execute_stage_set(step.name, specs),
            StepKind::External(command) => self.execute_external(step.name, command),
            StepKind::Cleanup(relative) => self.execute_cleanup(step.name, relative),
        }
    }

    fn execute_stage_set(&self, name: &'static str, specs: &[StubSpec]) -> StepResult {
        let mut written = 0usize;
        let mut kept = 0usize;
        let mut unavailable = 0usize;
        let mut failures: Vec<String> = Vec::new();

        for spec in specs {
            match self.stage_one(spec) {
                Ok(StageOutcome::Written) => written += 1,
                Ok(StageOutcome::SkippedExisting) => kept += 1,
                Ok(StageOutcome::SkippedMissingSource) => unavailable += 1,
                Err(e) => failures.push(e.to_string()),
            }
        }

        if !failures.is_empty() {
            return StepResult {
                name,
                status: StepStatus::Failed,
                detail: Some(failures.join("; ")),
            };
        }

        let mut parts = Vec::new();
        if written > 0 {
            parts.push(format!("{written} written"));
        }
        if kept > 0 {
            parts.push(format!("{kept} kept"));
        }
        if unavailable > 0 {
            parts.push(format!("{unavailable} source unavailable"));
        }
        let detail = if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        };

        StepResult {
            name,
            status: StepStatus::Ok,
            detail,
        }
    }

    /// Conflict policy first, then the stage writer
    fn stage_one(&self, spec: &StubSpec) -> crate::error::Result<StageOutcome> {
        let destination = self.project_root.join(spec.destination);
        let decision = policy::decide(destination.exists(), self.config.force, spec.confirmable);

        let write = match decision {
            ConflictDecision::Write => true,
            ConflictDecision::Skip => false,
            ConflictDecision::AskUser => (self.confirm_overwrite)(spec.destination),
        };

        if !write {
            return Ok(StageOutcome::SkippedExisting);
        }

        stage::stage_stub(spec, &self.roots, &self.project_root)
    }

    fn execute_external(&self, name: &'static str, command: &CommandSpec) -> StepResult {
        let invocation = self.invoker.run(command, &self.project_root);

        if invocation.success {
            StepResult {
                name,
                status: StepStatus::Ok,
                detail: None,
            }
        } else {
            StepResult {
                name,
                status: StepStatus::Failed,
                detail: Some(format!("{}: {}", command.display(), invocation.output.trim())),
            }
        }
    }

    fn execute_cleanup(&self, name: &'static str, relative: &str) -> StepResult {
        let target = self.project_root.join(relative);

        if !target.exists() {
            return StepResult {
                name,
                status: StepStatus::Ok,
                detail: None,
            };
        }

        match std::fs::remove_dir_all(&target) {
            Ok(()) => StepResult {
                name,
                status: StepStatus::Ok,
                detail: Some(format!("removed {relative}")),
            },
            Err(e) => StepResult {
                name,
                status: StepStatus::Failed,
                detail: Some(format!("{}: {}", target.display(), e)),
            },
        }
    }
}
