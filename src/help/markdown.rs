//! Markdown rendering for the terminal.
//!
//! Walks the pulldown-cmark event stream and writes indented, styled lines.
//! Inline HTML (which also covers placeholders like `<your token>`) is kept
//! as literal text. HTML blocks are rejected: a terminal cannot display them.

use console::Style;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::error::{NeedError, Result};
use crate::ui::NeedTheme;

use super::HelpRenderer;

/// Columns every rendered line is indented by.
const DEFAULT_INDENT: usize = 4;

/// Width of a rendered thematic break.
const RULE_WIDTH: usize = 24;

/// Renders help Markdown as styled terminal text.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    theme: NeedTheme,
    indent: usize,
}

impl MarkdownRenderer {
    /// Create a renderer using `theme`.
    pub fn new(theme: NeedTheme) -> Self {
        Self {
            theme,
            indent: DEFAULT_INDENT,
        }
    }

    /// Create a renderer that emits no styling.
    pub fn plain() -> Self {
        Self::new(NeedTheme::plain())
    }

    /// Change the left indent.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(NeedTheme::detect())
    }
}

impl HelpRenderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        let mut writer = Writer::new(&self.theme, self.indent);

        for event in Parser::new_ext(markdown, options) {
            writer.event(event)?;
        }

        Ok(writer.finish())
    }
}

/// Accumulates rendered output one line at a time.
struct Writer<'t> {
    theme: &'t NeedTheme,
    indent: String,
    out: String,
    line: String,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    heading: bool,
    code_block: bool,
    quote_depth: usize,
    lists: Vec<Option<u64>>,
    // (destination, byte offset of the link text in `line`)
    links: Vec<(String, usize)>,
}

impl<'t> Writer<'t> {
    fn new(theme: &'t NeedTheme, indent: usize) -> Self {
        Self {
            theme,
            indent: " ".repeat(indent),
            out: String::new(),
            line: String::new(),
            strong: 0,
            emphasis: 0,
            strikethrough: 0,
            heading: false,
            code_block: false,
            quote_depth: 0,
            lists: Vec::new(),
            links: Vec::new(),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.code_block => {
                for line in text.lines() {
                    let styled = format!("  {}", self.theme.code.apply_to(line));
                    self.push_line(&styled);
                }
            }
            Event::Text(text) => {
                let styled = self.inline_style().apply_to(text.as_ref()).to_string();
                self.line.push_str(&styled);
            }
            Event::Code(code) => {
                let styled = self.theme.code.apply_to(code.as_ref()).to_string();
                self.line.push_str(&styled);
            }
            Event::SoftBreak => self.line.push(' '),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                let rule = self.theme.dim.apply_to("─".repeat(RULE_WIDTH)).to_string();
                self.push_line(&rule);
                self.blank_line();
            }
            Event::TaskListMarker(done) => {
                self.line.push_str(if done { "[x] " } else { "[ ] " });
            }
            Event::InlineHtml(html) => {
                let styled = self.theme.dim.apply_to(html.as_ref()).to_string();
                self.line.push_str(&styled);
            }
            Event::Html(html) => {
                return Err(NeedError::HelpRender {
                    message: format!("HTML blocks are not supported: {}", html.trim()),
                });
            }
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.heading = true;
                let marker = format!("{} ", "#".repeat(level as usize));
                let styled = self.theme.heading.apply_to(marker).to_string();
                self.line.push_str(&styled);
            }
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                self.code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        let label = self.theme.dim.apply_to(lang.as_ref()).to_string();
                        self.push_line(&label);
                    }
                }
            }
            Tag::List(first) => {
                self.flush_line();
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.line.push_str(&"  ".repeat(depth));
                self.line.push_str(&marker);
            }
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strong => self.strong += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.links.push((dest_url.to_string(), self.line.len()));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Heading(_) => {
                self.heading = false;
                self.flush_line();
                self.blank_line();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                self.code_block = false;
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link | TagEnd::Image => {
                if let Some((url, start)) = self.links.pop() {
                    let text = self.line.get(start..).unwrap_or("");
                    // Autolinks already show their target as the text.
                    if !url.is_empty() && console::strip_ansi_codes(text) != url {
                        let styled = self.theme.link.apply_to(url).to_string();
                        self.line.push_str(&format!(" ({})", styled));
                    }
                }
            }
            _ => {}
        }
    }

    fn inline_style(&self) -> Style {
        if self.heading {
            self.theme.heading.clone()
        } else if self.strong > 0 {
            self.theme.strong.clone()
        } else if self.emphasis > 0 {
            self.theme.emphasis.clone()
        } else if self.strikethrough > 0 {
            self.theme.dim.clone()
        } else {
            Style::new()
        }
    }

    fn flush_line(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let line = std::mem::take(&mut self.line);
        self.push_line(&line);
    }

    fn push_line(&mut self, text: &str) {
        let text = text.trim_end();
        if text.is_empty() && self.quote_depth == 0 {
            self.out.push('\n');
            return;
        }
        self.out.push_str(&self.indent);
        for _ in 0..self.quote_depth {
            let bar = self.theme.dim.apply_to("│ ").to_string();
            self.out.push_str(&bar);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(mut self) -> String {
        self.flush_line();
        let trimmed = self.out.trim_end_matches('\n');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}\n", trimmed)
        }
    }
}
