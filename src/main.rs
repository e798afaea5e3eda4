//! Viltkit - VILT-stack admin panel toolkit
//!
//! A command line tool that provisions the Viltkit admin panel (Vue, Inertia,
//! Laravel, Tailwind) into a Laravel project and answers questions about the
//! installed modules, over the terminal or over MCP.

use clap::Parser;

mod accounts;
mod cli;
mod commands;
mod docs;
mod error;
mod installer;
mod mcp;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.project, args, cli.verbose),
        Commands::User(args) => commands::user::run(cli.project, args),
        Commands::Modules => commands::modules::run(cli.project),
        Commands::Info(args) => commands::info::run(cli.project, args),
        Commands::Search(args) => commands::search::run(cli.project, args),
        Commands::Mcp => commands::mcp::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
