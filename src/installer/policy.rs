//! Conflict policy for staged writes
//!
//! Pure decision logic: given the state of a destination and the run flags,
//! decide whether to write, skip, or defer to the caller for confirmation.
//! No I/O happens here; interactive prompts are the caller's concern so the
//! same policy works in both the CLI and headless tool contexts.

/// Decision for a single staged write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Write (or overwrite) the destination
    Write,
    /// Leave the existing destination untouched
    Skip,
    /// Destination exists and the operation allows confirmation; the caller
    /// supplies the yes/no answer ("no" and non-interactive contexts skip)
    AskUser,
}

/// Decide what to do with a destination path
pub fn decide(destination_exists: bool, force: bool, confirmable: bool) -> ConflictDecision {
    if !destination_exists || force {
        return ConflictDecision::Write;
    }
    if confirmable {
        return ConflictDecision::AskUser;
    }
    ConflictDecision::Skip
}
