//! need CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use need::cli::{Cli, Command, RunCommand, EXIT_LOAD_FAILED};
use need::help::MarkdownRenderer;
use need::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the run transcript.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("need=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("need=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("need starting with args: {:?}", cli);

    // Must happen before any theme is detected.
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(cli.output_mode());
    let renderer = MarkdownRenderer::default();
    let command = RunCommand::from_cli(&cli, &renderer);

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_LOAD_FAILED as u8)
        }
    }
}
