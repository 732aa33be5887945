//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use need::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_document_header("workstation");
//! ui.error("Needs file not found: needs.yaml");
//!
//! assert_eq!(ui.document_headers(), ["workstation"]);
//! assert!(ui.has_error("not found"));
//! ```

use super::{OutputMode, RunSummary, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every UI interaction in call order.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    errors: Vec<String>,
    document_headers: Vec<String>,
    need_headers: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    commands: Vec<String>,
    outputs: Vec<(String, String)>,
    helps: Vec<String>,
    summaries: Vec<RunSummary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured document headers.
    pub fn document_headers(&self) -> &[String] {
        &self.document_headers
    }

    /// Get all captured need headers.
    pub fn need_headers(&self) -> &[String] {
        &self.need_headers
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get the text of all status lines, in order.
    pub fn status_messages(&self) -> Vec<&str> {
        self.statuses.iter().map(|(_, msg)| msg.as_str()).collect()
    }

    /// Get all commands shown in verbose mode.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured command output as (stdout, stderr).
    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Get all rendered help blocks.
    pub fn helps(&self) -> &[String] {
        &self.helps
    }

    /// Get all captured run summaries.
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    /// Check if a specific status line was shown.
    pub fn has_status(&self, msg: &str) -> bool {
        self.statuses.iter().any(|(_, m)| m == msg)
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.errors.clear();
        self.document_headers.clear();
        self.need_headers.clear();
        self.statuses.clear();
        self.commands.clear();
        self.outputs.clear();
        self.helps.clear();
        self.summaries.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_document_header(&mut self, name: &str) {
        self.document_headers.push(name.to_string());
    }

    fn show_need_header(&mut self, name: &str) {
        self.need_headers.push(name.to_string());
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn show_command_output(&mut self, stdout: &str, stderr: &str) {
        self.outputs.push((stdout.to_string(), stderr.to_string()));
    }

    fn show_help(&mut self, rendered: &str) {
        self.helps.push(rendered.to_string());
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}
