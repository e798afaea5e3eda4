use clap::Parser;

/// Arguments for the user command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a user with all fields on the command line:\n    \
                  viltkit user --name Ada --email ada@example.com --password secret123\n\n\
                  Prompt interactively for anything omitted:\n    viltkit user")]
pub struct UserArgs {
    /// The name of the user
    #[arg(long)]
    pub name: Option<String>,

    /// The email of the user
    #[arg(long)]
    pub email: Option<String>,

    /// The password for the user
    #[arg(long)]
    pub password: Option<String>,
}
