use crate::CardBoard;

pub mod card_commands;

pub use card_commands::*;

/// A single store mutation, captured as a value so the host can log it,
/// record history for it and apply it at one well-defined point.
pub trait Command: Send + Sync {
    /// Produce the next snapshot. The input board is never modified.
    fn execute(&self, board: &CardBoard) -> CardBoard;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
