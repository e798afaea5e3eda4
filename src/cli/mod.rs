//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - user: User command arguments
//! - info: Info command arguments
//! - search: Search command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod info;
pub mod install;
pub mod search;
pub mod user;

pub use completions::CompletionsArgs;
pub use info::InfoArgs;
pub use install::InstallArgs;
pub use search::SearchArgs;
pub use user::UserArgs;

/// Viltkit - Laravel admin panel installer
///
/// Provision the Viltkit admin panel into a Laravel project and introspect
/// its installed modules.
#[derive(Parser, Debug)]
#[command(
    name = "viltkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer and toolkit for the Viltkit admin panel",
    long_about = "Viltkit provisions the Viltkit admin panel into a Laravel project: it stages \
                  configuration, frontend assets, routes and models, runs migrations and the asset \
                  build, and exposes module documentation both on the command line and as MCP \
                  tools.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  viltkit install                        \x1b[90m# Provision the panel into the current project\x1b[0m\n   \
                  viltkit install --force --skip-npm     \x1b[90m# Re-stage files, leave assets alone\x1b[0m\n   \
                  viltkit user --name Ada --email ada@example.com --password secret123 \x1b[90m# Create an admin account\x1b[0m\n   \
                  viltkit modules                        \x1b[90m# List installed viltkit modules\x1b[0m\n   \
                  viltkit info panel                     \x1b[90m# Show one module in detail\x1b[0m\n   \
                  viltkit search \"dark mode\"             \x1b[90m# Search module documentation\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Laravel project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "VILTKIT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the admin panel into a Laravel project
    Install(InstallArgs),

    /// Create an admin user
    User(UserArgs),

    /// List installed viltkit modules
    Modules,

    /// Show detailed information about one module
    Info(InfoArgs),

    /// Search module documentation
    Search(SearchArgs),

    /// Serve viltkit tools over MCP on stdio
    Mcp,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
