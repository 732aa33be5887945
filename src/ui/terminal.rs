//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{NeedTheme, OutputMode, RunSummary, StatusKind, UserInterface};

/// Terminal UI implementation.
///
/// The run transcript goes to stdout; fatal errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: NeedTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, NeedTheme::detect())
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: NeedTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_status(StatusKind::Failed, msg)).ok();
    }

    fn show_document_header(&mut self, name: &str) {
        writeln!(self.out, "\n{}", self.theme.format_document(name)).ok();
    }

    fn show_need_header(&mut self, name: &str) {
        writeln!(self.out, "\n{}", self.theme.format_need(name)).ok();
    }

    fn show_status(&mut self, kind: StatusKind, msg: &str) {
        let line = self.theme.format_status(kind, msg);
        writeln!(self.out, "  {}", line).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.out, "    {}", self.theme.command.apply_to(command)).ok();
    }

    fn show_command_output(&mut self, stdout: &str, stderr: &str) {
        if stdout.trim().is_empty() && stderr.trim().is_empty() {
            writeln!(self.out, "    {}", self.theme.dim.apply_to("(no output)")).ok();
            return;
        }

        for (label, text) in [("stdout>", stdout), ("stderr>", stderr)] {
            for line in text.lines() {
                writeln!(self.out, "    {} {}", self.theme.dim.apply_to(label), line).ok();
            }
        }
    }

    fn show_help(&mut self, rendered: &str) {
        writeln!(self.out, "  Help:").ok();
        if rendered.ends_with('\n') {
            write!(self.out, "{}", rendered).ok();
        } else {
            writeln!(self.out, "{}", rendered).ok();
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        writeln!(self.out).ok();

        if !summary.failed.is_empty() {
            writeln!(
                self.out,
                "{}",
                self.theme
                    .error
                    .apply_to(format!("Unresolved: {}", summary.failed.join(", ")))
            )
            .ok();
        }

        if summary.skipped > 0 {
            let label = if summary.skipped == 1 { "need" } else { "needs" };
            writeln!(
                self.out,
                "{}",
                self.theme.dim.apply_to(format!(
                    "Skipped {} {} after the first failure",
                    summary.skipped, label
                ))
            )
            .ok();
        }

        writeln!(self.out, "{}", self.theme.dim.apply_to(summary.tally())).ok();

        if summary.success {
            writeln!(self.out, "{}", self.theme.success.apply_to("Succeeded")).ok();
        } else {
            writeln!(self.out, "{}", self.theme.error.apply_to("Failed")).ok();
        }
    }
}
