use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search across every module:\n    viltkit search \"dark mode\"\n\n\
                  Search one module only:\n    viltkit search widgets --module panel")]
pub struct SearchArgs {
    /// Search query (keyword or phrase)
    pub query: String,

    /// Module to search in, or "all" for every module
    #[arg(long, short = 'm', default_value = "all")]
    pub module: String,
}
