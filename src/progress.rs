//! Progress display for install runs

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a pipeline step runs.
///
/// Draws to stderr and disappears once cleared, so step result lines end up
/// on clean rows. Hidden automatically when stderr is not a terminal.
pub fn step_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{{spinner}} {}...", message))
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

pub fn finish_spinner(pb: &ProgressBar) {
    pb.finish_and_clear();
}
