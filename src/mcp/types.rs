//! Request types for the MCP tools.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct InstallRequest {
    #[schemars(description = "Overwrite existing files")]
    #[serde(default)]
    pub force: bool,
    #[schemars(description = "Skip running database migrations")]
    #[serde(default)]
    pub skip_migrations: bool,
    #[schemars(description = "Skip npm install and build (recommended for MCP)")]
    #[serde(default = "default_true")]
    pub skip_npm: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateUserRequest {
    #[schemars(description = "Full name of the user")]
    pub name: String,
    #[schemars(description = "Email address for login")]
    pub email: String,
    #[schemars(description = "Password for the user")]
    pub password: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ModuleInfoRequest {
    #[schemars(description = "The module name (e.g., panel, forms, tables)")]
    pub module: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchDocsRequest {
    #[schemars(description = "Search query (keyword or phrase)")]
    pub query: String,
    #[schemars(description = "Module to search in (or \"all\" for all modules)")]
    #[serde(default = "default_all")]
    pub module: String,
}

fn default_true() -> bool {
    true
}

fn default_all() -> String {
    "all".to_string()
}
