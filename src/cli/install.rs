use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Provision the panel into the current project:\n    viltkit install\n\n\
                   Overwrite files staged by an earlier run:\n    viltkit install --force\n\n\
                   Stage files only, no migrations or asset build:\n    viltkit install --skip-migrations --skip-npm\n\n\
                   Provision and scaffold a named panel:\n    viltkit install --panel shop")]
pub struct InstallArgs {
    /// Overwrite existing files without asking
    #[arg(long)]
    pub force: bool,

    /// Skip running database migrations
    #[arg(long = "skip-migrations")]
    pub skip_migrations: bool,

    /// Skip npm install and the asset build
    #[arg(long = "skip-npm")]
    pub skip_npm: bool,

    /// Scaffold a named panel after installation
    #[arg(long, value_name = "NAME")]
    pub panel: Option<String>,

    /// Answer yes to all confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}
