//! need - Very simple need assessment and fulfillment.
//!
//! A need is a unit of desired state described by two shell commands: one
//! that assesses whether the state already holds and one that establishes
//! it. Needs are declared in YAML documents; `need` loads every document,
//! then addresses each need in order, fulfilling only what is missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Needs document loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`help`] - Rendering help Markdown for the terminal
//! - [`needs`] - The per-need assess/fulfill/reassess protocol
//! - [`runner`] - Addressing every need of every document
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use need::config::parse_config;
//!
//! let config = parse_config(
//!     "apiVersion: v1\nkind: Needs\nspec:\n  needs:\n    - name: shell\n      assessCmd: 'true'\n      fulfillCmd: 'true'\n",
//!     "inline",
//! )
//! .unwrap();
//! assert_eq!(config.needs()[0].name, "shell");
//! ```
//!
//! For running needs end to end, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod needs;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{NeedError, Result};
