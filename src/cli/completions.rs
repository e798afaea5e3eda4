use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    viltkit completions bash > ~/.bash_completion.d/viltkit\n\n\
                  Generate zsh completions:\n    viltkit completions zsh > ~/.zfunc/_viltkit\n\n\
                  Generate fish completions:\n    viltkit completions fish > ~/.config/fish/completions/viltkit.fish\n\n\
                  Generate PowerShell completions:\n    viltkit completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
