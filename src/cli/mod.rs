//! Command-line interface for need.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and exit codes
//! - [`run`] - Loading documents and addressing their needs

pub mod args;
pub mod command;
pub mod run;

pub use args::Cli;
pub use command::{Command, CommandResult, EXIT_LOAD_FAILED, EXIT_NEED_FAILED, EXIT_SUCCESS};
pub use run::RunCommand;
