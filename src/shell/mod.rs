//! Shell command execution.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult, SHELL_PROGRAM, STRICT_MODE_ARGS};
