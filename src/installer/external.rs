//! External lifecycle command invocation
//!
//! The pipeline shells out for dependency installation, asset builds, schema
//! migration, and cache invalidation. The exit status is the sole failure
//! signal; captured output is carried along for diagnostics only and never
//! inspected for meaning. Calls block until completion because later steps
//! depend on their filesystem effects.

use std::path::Path;
use std::process::Command;

/// A lifecycle command to run in the project root
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Human-readable command line, for reports and spinners
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Result of one external invocation
#[derive(Debug)]
pub struct Invocation {
    pub success: bool,
    pub output: String,
}

/// Runs external lifecycle commands on behalf of the pipeline
pub trait Invoker {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Invocation;
}

/// Invoker backed by real child processes
pub struct ProcessInvoker;

impl Invoker for ProcessInvoker {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> Invocation {
        match Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .output()
        {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                Invocation {
                    success: output.status.success(),
                    output: text,
                }
            }
            // A program that cannot be started (usually not installed) is a
            // step failure, not a process-level abort
            Err(e) => Invocation {
                success: false,
                output: format!("failed to start '{}': {}", command.program, e),
            },
        }
    }
}
