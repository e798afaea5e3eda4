//! MCP server command implementation
//!
//! Serves the viltkit tool surface over stdio. The server itself does not
//! require a Laravel project; tools that touch the project tree check for
//! one when they are called.

use std::path::PathBuf;

use crate::error::{Result, ViltkitError};

/// Run the MCP server on stdio until the client disconnects
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project_root = super::project_path(project)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ViltkitError::McpServerFailed {
            reason: format!("failed to start async runtime: {}", e),
        })?;

    runtime.block_on(crate::mcp::serve_stdio(project_root))
}
