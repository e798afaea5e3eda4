//! Install command implementation
//!
//! Provisions the admin panel into a Laravel project: stages stub files
//! through the conflict policy, prunes superseded trees, then runs
//! migrations, npm and the cache clears. The run is best-effort; every
//! step is reported and a failed lifecycle command does not stop the rest.

use std::cell::RefCell;
use std::path::PathBuf;

use console::Style;
use inquire::Confirm;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::{
    self, InstallPipeline, PipelineReport, ProcessInvoker, RunConfig, SearchRoots, StepResult,
    StepStatus,
};
use crate::progress;

/// Run install command
pub fn run(project: Option<PathBuf>, args: InstallArgs, verbose: bool) -> Result<()> {
    let project_root = super::project_path(project)?;
    installer::check_project_root(&project_root)?;

    println!();
    println!("🚀 Installing the Viltkit admin panel...");
    println!();

    // The npm question is asked once, up front, so the step table is fixed
    // before anything runs
    let skip_npm = args.skip_npm || !confirm_npm(args.yes);

    let config = RunConfig {
        force: args.force,
        skip_migrations: args.skip_migrations,
        skip_npm,
        panel: args.panel.clone(),
    };
    let roots = SearchRoots::for_project(&project_root);
    let invoker = ProcessInvoker;
    let confirm_overwrite = overwrite_prompt(args.yes);

    let pipeline = InstallPipeline::new(&project_root, roots, config, &invoker, &confirm_overwrite);

    let spinner = RefCell::new(None);
    let report = pipeline.run_with(
        |step| {
            if !step.skip {
                *spinner.borrow_mut() = Some(progress::step_spinner(step.name));
            }
        },
        |result| {
            if let Some(pb) = spinner.borrow_mut().take() {
                progress::finish_spinner(&pb);
            }
            print_step(result, verbose);
        },
    );

    print_summary(&report);
    Ok(())
}

/// Ask once whether to run npm install and the asset build.
///
/// Unattended runs take the default (yes) without prompting.
fn confirm_npm(yes: bool) -> bool {
    if yes || !console::user_attended() {
        return true;
    }
    Confirm::new("Install npm dependencies and build assets?")
        .with_default(true)
        .prompt()
        .unwrap_or(true)
}

/// Decision callback for confirmable stubs that already exist on disk.
///
/// Unattended runs never overwrite; that keeps re-runs from a script or an
/// agent strictly additive.
fn overwrite_prompt(yes: bool) -> impl Fn(&str) -> bool {
    move |destination: &str| {
        if yes {
            return true;
        }
        if !console::user_attended() {
            return false;
        }
        Confirm::new(&format!("Overwrite {}?", destination))
            .with_default(false)
            .with_help_message("The existing file may carry local changes")
            .prompt()
            .unwrap_or(false)
    }
}

fn print_step(result: &StepResult, verbose: bool) {
    match result.status {
        StepStatus::Ok => {
            let glyph = Style::new().green().apply_to("✓");
            match &result.detail {
                Some(detail) => println!("  {} {} ({})", glyph, result.name, detail),
                None => println!("  {} {}", glyph, result.name),
            }
        }
        StepStatus::Skipped => {
            let line = format!("  - {} (skipped)", result.name);
            println!("{}", Style::new().dim().apply_to(line));
        }
        StepStatus::Failed => {
            println!("  {} {}", Style::new().red().apply_to("✗"), result.name);
            if let Some(detail) = &result.detail {
                let shown = if verbose {
                    detail.as_str()
                } else {
                    detail.lines().next().unwrap_or_default()
                };
                for line in shown.lines() {
                    println!("      {}", Style::new().dim().apply_to(line));
                }
            }
        }
    }
}

fn print_summary(report: &PipelineReport) {
    println!();
    if report.is_clean() {
        println!("✅ Viltkit has been installed successfully!");
        println!();
        print_next_steps();
    } else {
        println!(
            "⚠️  Installation finished with {} failed step(s). See above for details.",
            report.failed_count()
        );
    }
    println!();
}

fn print_next_steps() {
    let command = Style::new().yellow();
    let url = Style::new().cyan();

    println!("Next steps:");
    println!(
        "  - Run {} to start the application",
        command.apply_to("php artisan serve")
    );
    println!(
        "  - Visit {} to access the admin panel",
        url.apply_to("/admin")
    );
    println!(
        "  - Run {} to create an admin user",
        command.apply_to("viltkit user")
    );
}
