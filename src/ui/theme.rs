//! Visual theme and styling.

use console::Style;

use super::StatusKind;

/// Styles for the run transcript and rendered help.
///
/// A plain value: build one with [`NeedTheme::new`] or [`NeedTheme::plain`]
/// and hand it to whatever renders text.
#[derive(Debug, Clone)]
pub struct NeedTheme {
    /// Style for document names (italic).
    pub document: Style,
    /// Style for need names (bold).
    pub need: Style,
    /// Style for passing phases (green).
    pub success: Style,
    /// Style for unmet needs about to be fulfilled (orange).
    pub warning: Style,
    /// Style for failed phases and fatal errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for commands shown in verbose output (dim italic).
    pub command: Style,
    /// Style for Markdown headings in help (bold underlined).
    pub heading: Style,
    /// Style for Markdown emphasis (italic).
    pub emphasis: Style,
    /// Style for Markdown strong emphasis (bold).
    pub strong: Style,
    /// Style for inline code and code blocks (cyan).
    pub code: Style,
    /// Style for link targets (blue underlined).
    pub link: Style,
}

impl Default for NeedTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            document: Style::new().italic(),
            need: Style::new().bold(),
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            command: Style::new().dim().italic(),
            heading: Style::new().bold().underlined(),
            emphasis: Style::new().italic(),
            strong: Style::new().bold(),
            code: Style::new().cyan(),
            link: Style::new().blue().underlined(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            document: Style::new(),
            need: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            command: Style::new(),
            heading: Style::new(),
            emphasis: Style::new(),
            strong: Style::new(),
            code: Style::new(),
            link: Style::new(),
        }
    }

    /// Pick [`new`](Self::new) or [`plain`](Self::plain) for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a status line: the kind's icon, then the text, in the kind's style.
    pub fn format_status(&self, kind: StatusKind, msg: &str) -> String {
        let text = match kind.icon() {
            Some(icon) => format!("{} {}", icon, msg),
            None => msg.to_string(),
        };
        match kind {
            StatusKind::Running => text,
            StatusKind::Passed => self.success.apply_to(text).to_string(),
            StatusKind::Unmet => self.warning.apply_to(text).to_string(),
            StatusKind::Failed => self.error.apply_to(text).to_string(),
        }
    }

    /// Format a document name.
    pub fn format_document(&self, name: &str) -> String {
        format!("{}", self.document.apply_to(name))
    }

    /// Format a need name.
    pub fn format_need(&self, name: &str) -> String {
        format!("{}", self.need.apply_to(name))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
