//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing the run transcript to the terminal
//! - [`MockUI`] recording every interaction for tests
//! - [`NeedTheme`] styles shared by the UI and the help renderer
//!
//! # Example
//!
//! ```
//! use need::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_need_header("scratch dir");
//! ui.show_status(StatusKind::Running, "Assessing ...");
//! ui.show_status(StatusKind::Passed, "Fulfilled");
//!
//! assert_eq!(ui.need_headers(), ["scratch dir"]);
//! assert!(ui.has_status("Fulfilled"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, NeedTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an error that stops the run.
    fn error(&mut self, msg: &str);

    /// Show the name of a needs document.
    fn show_document_header(&mut self, name: &str);

    /// Show the name of the need about to be addressed.
    fn show_need_header(&mut self, name: &str);

    /// Show a status line under the current need.
    fn show_status(&mut self, kind: StatusKind, msg: &str);

    /// Show the command a phase is about to run.
    fn show_command(&mut self, command: &str);

    /// Show captured output of a command.
    fn show_command_output(&mut self, stdout: &str, stderr: &str);

    /// Show rendered help for an unresolved need.
    fn show_help(&mut self, rendered: &str);

    /// Show the final result of the run.
    fn show_summary(&mut self, summary: &RunSummary);
}

/// Kind of status line shown while addressing a need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A phase has started.
    Running,
    /// A phase succeeded.
    Passed,
    /// Assessment found the need unmet; fulfillment follows.
    Unmet,
    /// A phase failed and the need is unresolved.
    Failed,
}

impl StatusKind {
    /// Icon shown before the status text.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Running => None,
            Self::Passed => Some("✓"),
            Self::Unmet => Some("○"),
            Self::Failed => Some("✗"),
        }
    }
}

/// Final tally of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether every addressed need was resolved.
    pub success: bool,
    /// Number of documents processed.
    pub documents: usize,
    /// Number of needs addressed.
    pub addressed: usize,
    /// Names of needs left unresolved, in order.
    pub failed: Vec<String>,
    /// Number of needs not addressed because of fail-fast.
    pub skipped: usize,
}

impl RunSummary {
    /// Counts line, e.g. `Addressed 3 needs in 2 documents`.
    pub fn tally(&self) -> String {
        format!(
            "Addressed {} {} in {} {}",
            self.addressed,
            if self.addressed == 1 { "need" } else { "needs" },
            self.documents,
            if self.documents == 1 { "document" } else { "documents" },
        )
    }
}
