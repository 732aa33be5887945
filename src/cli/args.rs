//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigSource;
use crate::runner::{FailurePolicy, RunOptions};
use crate::shell::CommandOptions;
use crate::ui::OutputMode;

/// Very simple need assessment and fulfillment.
#[derive(Debug, Parser)]
#[command(name = "need")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Needs file to address, or "-" for standard input (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE", required = true)]
    pub files: Vec<ConfigSource>,

    /// Skip all remaining needs after the first one that fails
    #[arg(short = 'x', long)]
    pub fail_fast: bool,

    /// Run assess and fulfill commands from this directory
    #[arg(short = 'C', long, value_name = "DIR", env = "NEED_DIR")]
    pub dir: Option<PathBuf>,

    /// Show commands and all captured output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_verbose(self.verbose)
    }

    /// Run options selected by the flags.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            failure_policy: if self.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::Continue
            },
        }
    }

    /// Options every assess and fulfill command runs with.
    pub fn command_options(&self) -> CommandOptions {
        match &self.dir {
            Some(dir) => CommandOptions::in_dir(dir),
            None => CommandOptions::default(),
        }
    }
}
