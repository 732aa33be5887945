//! Run command implementation.
//!
//! Loads every needs document, then addresses their needs in order.

use std::io::Read;

use tracing::debug;

use crate::cli::args::Cli;
use crate::config::{load_documents, ConfigSource, SourceReader};
use crate::error::Result;
use crate::help::HelpRenderer;
use crate::needs::NeedResolver;
use crate::runner::{NeedsRunner, RunOptions};
use crate::shell::CommandOptions;
use crate::ui::UserInterface;

use super::command::{Command, CommandResult, EXIT_LOAD_FAILED, EXIT_NEED_FAILED};

/// The run command implementation.
pub struct RunCommand<'a> {
    sources: Vec<ConfigSource>,
    options: RunOptions,
    command_options: CommandOptions,
    renderer: &'a dyn HelpRenderer,
}

impl<'a> RunCommand<'a> {
    /// Create a run command over `sources` with default options.
    pub fn new(sources: Vec<ConfigSource>, renderer: &'a dyn HelpRenderer) -> Self {
        Self {
            sources,
            options: RunOptions::default(),
            command_options: CommandOptions::default(),
            renderer,
        }
    }

    /// Create a run command from parsed arguments.
    pub fn from_cli(cli: &Cli, renderer: &'a dyn HelpRenderer) -> Self {
        Self::new(cli.files.clone(), renderer)
            .with_run_options(cli.run_options())
            .with_command_options(cli.command_options())
    }

    /// Set the run options.
    pub fn with_run_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the options every shell command runs with.
    pub fn with_command_options(mut self, options: CommandOptions) -> Self {
        self.command_options = options;
        self
    }

    /// Execute, reading stdin sources from `reader`.
    pub fn execute_with_reader<R: Read>(
        &self,
        reader: &mut SourceReader<R>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if let Some(dir) = &self.command_options.cwd {
            if !dir.is_dir() {
                ui.error(&format!("Working directory not found: {}", dir.display()));
                return Ok(CommandResult::failure(EXIT_LOAD_FAILED));
            }
        }

        let documents = match load_documents(&self.sources, reader) {
            Ok(documents) => documents,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_LOAD_FAILED));
            }
        };
        debug!("Loaded {} document(s)", documents.len());

        let resolver =
            NeedResolver::new(self.renderer).with_options(self.command_options.clone());
        let report = NeedsRunner::new(&documents).run(&resolver, &self.options, ui);

        let summary = report.summary();
        ui.show_summary(&summary);

        if summary.success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_NEED_FAILED))
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_reader(&mut SourceReader::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::{PlainRenderer, NO_HELP};
    use crate::runner::FailurePolicy;
    use crate::ui::MockUI;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    const FILE_NEED: &str = r#"
apiVersion: v1
kind: Needs
metadata:
  name: scratch
spec:
  needs:
    - name: scratch file
      assessCmd: stat tmp/f
      fulfillCmd: touch tmp/f
"#;

    const FAILING_FIRST: &str = r#"
apiVersion: v1
kind: Needs
spec:
  needs:
    - name: impossible
      assessCmd: "false"
      fulfillCmd: "false"
    - name: trivial
      assessCmd: "true"
      fulfillCmd: "true"
"#;

    fn write(dir: &Path, name: &str, content: &str) -> ConfigSource {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        ConfigSource::File(path)
    }

    fn execute(command: &RunCommand<'_>, stdin: &str) -> (CommandResult, MockUI) {
        let mut reader = SourceReader::with_stdin(Cursor::new(stdin.to_string()));
        let mut ui = MockUI::new();
        let result = command.execute_with_reader(&mut reader, &mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn fulfills_relative_to_working_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("tmp")).unwrap();
        let source = write(temp.path(), "needs.yaml", FILE_NEED);
        let command = RunCommand::new(vec![source], &PlainRenderer)
            .with_command_options(CommandOptions::in_dir(temp.path()));

        let (result, ui) = execute(&command, "");

        assert_eq!(result, CommandResult::success());
        assert!(temp.path().join("tmp/f").exists());
        assert_eq!(ui.document_headers(), ["scratch"]);
        assert!(ui.summaries()[0].success);
    }

    #[test]
    fn unresolved_need_exits_one() {
        let temp = TempDir::new().unwrap();
        let source = write(temp.path(), "needs.yaml", FAILING_FIRST);

        let (result, ui) = execute(&RunCommand::new(vec![source], &PlainRenderer), "");

        assert_eq!(result.exit_code, EXIT_NEED_FAILED);
        assert_eq!(ui.need_headers(), ["impossible", "trivial"]);
        assert_eq!(ui.helps(), [NO_HELP]);
        assert_eq!(ui.summaries()[0].failed, vec!["impossible"]);
    }

    #[test]
    fn fail_fast_skips_later_needs() {
        let temp = TempDir::new().unwrap();
        let source = write(temp.path(), "needs.yaml", FAILING_FIRST);
        let command = RunCommand::new(vec![source], &PlainRenderer).with_run_options(RunOptions {
            failure_policy: FailurePolicy::FailFast,
        });

        let (result, ui) = execute(&command, "");

        assert_eq!(result.exit_code, EXIT_NEED_FAILED);
        assert_eq!(ui.need_headers(), ["impossible"]);
        assert_eq!(ui.summaries()[0].skipped, 1);
    }

    #[test]
    fn invalid_document_aborts_before_any_need() {
        let temp = TempDir::new().unwrap();
        let good = write(temp.path(), "good.yaml", FAILING_FIRST);
        let bad = write(
            temp.path(),
            "bad.yaml",
            "apiVersion: v1\nspec:\n  needs: []\n",
        );

        let (result, ui) = execute(&RunCommand::new(vec![good, bad], &PlainRenderer), "");

        assert_eq!(result.exit_code, EXIT_LOAD_FAILED);
        assert!(ui.need_headers().is_empty());
        assert!(ui.summaries().is_empty());
        assert!(ui.has_error("bad.yaml"));
    }

    #[test]
    fn missing_file_aborts() {
        let source = ConfigSource::File("/no/such/needs.yaml".into());

        let (result, ui) = execute(&RunCommand::new(vec![source], &PlainRenderer), "");

        assert_eq!(result.exit_code, EXIT_LOAD_FAILED);
        assert!(ui.has_error("Needs file not found"));
    }

    #[test]
    fn repeated_stdin_is_addressed_twice() {
        let command =
            RunCommand::new(vec![ConfigSource::Stdin, ConfigSource::Stdin], &PlainRenderer);

        let (result, ui) = execute(&command, FAILING_FIRST);

        assert_eq!(result.exit_code, EXIT_NEED_FAILED);
        assert_eq!(ui.document_headers(), ["<stdin>", "<stdin>"]);
        assert_eq!(ui.need_headers().len(), 4);
    }

    #[test]
    fn missing_working_directory_aborts() {
        let temp = TempDir::new().unwrap();
        let source = write(temp.path(), "needs.yaml", FILE_NEED);
        let command = RunCommand::new(vec![source], &PlainRenderer)
            .with_command_options(CommandOptions::in_dir(temp.path().join("missing")));

        let (result, ui) = execute(&command, "");

        assert_eq!(result.exit_code, EXIT_LOAD_FAILED);
        assert!(ui.has_error("Working directory not found"));
    }
}
