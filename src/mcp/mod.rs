//! MCP server exposing the toolkit over stdio
//!
//! This module handles:
//! - The five tool endpoints: install, create_user, list_modules, module_info,
//!   search_docs (via types module for the request schemas)
//! - Plain-text and markdown rendering of tool results, without terminal styling
//! - Serving the tool router over a stdio transport
//!
//! Tool handlers never prompt. The install tool answers every overwrite
//! question with "keep", and validation failures come back as response text
//! rather than protocol errors so the calling agent can read them.

use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router,
};

pub use types::{CreateUserRequest, InstallRequest, ModuleInfoRequest, SearchDocsRequest};

pub mod types;

use crate::accounts::{UserRecord, UserStore};
use crate::docs::DocIndex;
use crate::error::ViltkitError;
use crate::installer::{
    self, InstallPipeline, PipelineReport, ProcessInvoker, RunConfig, SearchRoots, StepStatus,
};

/// Tool server bound to one Laravel project root
#[derive(Clone)]
pub struct PanelTools {
    project_root: PathBuf,
    tool_router: ToolRouter<Self>,
}

impl PanelTools {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            tool_router: Self::tool_router(),
        }
    }

    fn install_text(&self, req: &InstallRequest) -> String {
        match self.run_install(req) {
            Ok(report) => format!(
                "Viltkit installation completed.\n\n{}",
                render_report(&report)
            ),
            Err(e) => format!("Installation failed: {e}"),
        }
    }

    fn run_install(&self, req: &InstallRequest) -> crate::error::Result<PipelineReport> {
        installer::check_project_root(&self.project_root)?;

        let config = RunConfig {
            force: req.force,
            skip_migrations: req.skip_migrations,
            skip_npm: req.skip_npm,
            panel: None,
        };
        let roots = SearchRoots::for_project(&self.project_root);
        let keep_existing = |_destination: &str| false;
        let pipeline = InstallPipeline::new(
            &self.project_root,
            roots,
            config,
            &ProcessInvoker,
            &keep_existing,
        );
        Ok(pipeline.run())
    }

    fn create_user_text(&self, req: &CreateUserRequest) -> String {
        match self.run_create_user(req) {
            Ok(record) => format!(
                "Admin user created successfully.\n\nUser [{}] created with email [{}].\nLogin at: /admin/login\n",
                record.name, record.email
            ),
            Err(
                e @ (ViltkitError::MissingUserFields
                | ViltkitError::InvalidEmail
                | ViltkitError::WeakPassword
                | ViltkitError::DuplicateEmail { .. }),
            ) => format!("Error: {e}."),
            Err(e) => format!("Failed to create user: {e}"),
        }
    }

    fn run_create_user(&self, req: &CreateUserRequest) -> crate::error::Result<UserRecord> {
        let store = UserStore::new(&self.project_root);
        store.create_user(&req.name, &req.email, &req.password)
    }

    fn list_modules_text(&self) -> String {
        let index = DocIndex::new(&self.project_root);
        if !index.modules_root().is_dir() {
            return "No viltkit modules directory found.".to_string();
        }

        let modules = match index.list_modules() {
            Ok(modules) => modules,
            Err(e) => return format!("Failed to list modules: {e}"),
        };
        if modules.is_empty() {
            return "No viltkit modules found.".to_string();
        }

        let mut out = format!("# Viltkit Modules\n\nFound {} module(s):\n\n", modules.len());
        for module in &modules {
            out.push_str(&format!("## {}\n", module.name));
            out.push_str(&format!(
                "- **Package:** {}\n",
                module.manifest.package_name()
            ));
            out.push_str(&format!(
                "- **Version:** {}\n",
                module.manifest.package_version()
            ));
            out.push_str(&format!(
                "- **Description:** {}\n",
                module.manifest.package_description()
            ));
            out.push_str(&format!("- **Path:** {}\n\n", module.path.display()));
        }
        out
    }

    fn module_info_text(&self, req: &ModuleInfoRequest) -> String {
        let index = DocIndex::new(&self.project_root);
        match index.module_info(&req.module) {
            Ok(doc) => doc,
            Err(ViltkitError::ModuleNotFound { name }) => format!("Module '{name}' not found."),
            Err(e) => format!("Failed to read module info: {e}"),
        }
    }

    fn search_docs_text(&self, req: &SearchDocsRequest) -> String {
        let query = req.query.to_ascii_lowercase();
        let index = DocIndex::new(&self.project_root);

        let module = (req.module != "all").then_some(req.module.as_str());
        let matches = match index.search(&query, module) {
            Ok(matches) => matches,
            Err(ViltkitError::ModuleNotFound { name }) => {
                return format!("Module '{name}' not found.");
            }
            Err(e) => return format!("Search failed: {e}"),
        };

        if matches.is_empty() {
            return format!("No documentation found matching '{query}'.");
        }

        let mut out = format!(
            "# Search Results for '{query}'\n\nFound {} match(es):\n\n",
            matches.len()
        );
        for found in &matches {
            out.push_str(&format!("## {}/{}\n", found.module, found.file));
            out.push_str(&format!("**Path:** {}\n\n", found.path.display()));
            out.push_str(&format!("```\n{}\n```\n\n", found.context));
        }
        out
    }
}

#[tool_router]
impl PanelTools {
    #[tool(
        description = "Install and configure Viltkit admin panel. Publishes configs, runs migrations, and sets up frontend assets."
    )]
    async fn install(
        &self,
        params: Parameters<InstallRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(CallToolResult::success(vec![Content::text(
            self.install_text(&req),
        )]))
    }

    #[tool(description = "Create a new admin user for Viltkit panel")]
    async fn create_user(
        &self,
        params: Parameters<CreateUserRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(CallToolResult::success(vec![Content::text(
            self.create_user_text(&req),
        )]))
    }

    #[tool(
        description = "List all installed Viltkit modules with their versions and descriptions"
    )]
    async fn list_modules(&self) -> std::result::Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.list_modules_text(),
        )]))
    }

    #[tool(description = "Get detailed information about a specific Viltkit module")]
    async fn module_info(
        &self,
        params: Parameters<ModuleInfoRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(CallToolResult::success(vec![Content::text(
            self.module_info_text(&req),
        )]))
    }

    #[tool(
        description = "Search documentation across all Viltkit modules for a specific topic or keyword"
    )]
    async fn search_docs(
        &self,
        params: Parameters<SearchDocsRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(CallToolResult::success(vec![Content::text(
            self.search_docs_text(&req),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for PanelTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "viltkit".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Viltkit installs and manages a VILT-stack admin panel inside a Laravel project.

TOOLS:
- install: publish panel files into the project and run the follow-up commands
  (migrations, caches, optionally npm). Existing files are kept unless force=true.
- create_user: create an admin account. Validates email format, password length,
  and uniqueness; validation problems come back as 'Error: ...' text.
- list_modules: list the modules installed under packages/viltkit.
- module_info: manifest, dependencies, namespaces, and layout of one module.
- search_docs: keyword search across the modules' docs/ markdown files.

The server operates on the project root it was started in. install defaults to
skipping the npm steps; pass skip_npm=false to run them."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

/// Serve the tools over stdin/stdout until the client disconnects
pub async fn serve_stdio(project_root: PathBuf) -> crate::error::Result<()> {
    use tokio::io::{stdin, stdout};

    let service = PanelTools::new(project_root);
    let server = service
        .serve((stdin(), stdout()))
        .await
        .map_err(|e| ViltkitError::McpServerFailed {
            reason: e.to_string(),
        })?;

    server
        .waiting()
        .await
        .map_err(|e| ViltkitError::McpServerFailed {
            reason: e.to_string(),
        })?;

    Ok(())
}

/// Report text for the install tool, one line per step
fn render_report(report: &PipelineReport) -> String {
    let mut out = String::new();

    for result in &report.results {
        let line = match (&result.status, &result.detail) {
            (StepStatus::Ok, Some(detail)) => format!("✓ {} ({detail})", result.name),
            (StepStatus::Ok, None) => format!("✓ {}", result.name),
            (StepStatus::Skipped, _) => format!("- {} (skipped)", result.name),
            (StepStatus::Failed, Some(detail)) => format!("✗ {}: {detail}", result.name),
            (StepStatus::Failed, None) => format!("✗ {}", result.name),
        };
        out.push_str(&line);
        out.push('\n');
    }

    if !report.is_clean() {
        out.push_str(&format!("\n{} step(s) failed.\n", report.failed_count()));
    }

    out
}
