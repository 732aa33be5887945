//! Where needs documents come from.
//!
//! A [`ConfigSource`] is either a file path or standard input (`-` on the
//! command line). [`SourceReader`] turns sources into raw content.
//!
//! Standard input can only be drained once per process, so the reader
//! caches it: every stdin source in one invocation sees the same content.

use anyhow::Context;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::error::{NeedError, Result};

/// Command-line marker for standard input.
pub const STDIN_MARKER: &str = "-";

/// A place to read one needs document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from standard input.
    Stdin,
    /// Read from a file on disk.
    File(PathBuf),
}

impl ConfigSource {
    /// Label used in headers and error messages.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl FromStr for ConfigSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" => Err("needs file path must not be empty".to_string()),
            STDIN_MARKER => Ok(Self::Stdin),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads raw document content from sources.
pub struct SourceReader<R> {
    stdin: R,
    stdin_content: Option<String>,
}

impl SourceReader<io::Stdin> {
    /// Reader backed by the process's standard input.
    pub fn new() -> Self {
        Self::with_stdin(io::stdin())
    }
}

impl Default for SourceReader<io::Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> SourceReader<R> {
    /// Reader backed by an arbitrary stream standing in for stdin.
    pub fn with_stdin(stdin: R) -> Self {
        Self {
            stdin,
            stdin_content: None,
        }
    }

    /// Read the full content of `source`.
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if a file source doesn't exist, `Io` for
    /// other file errors, and `Other` if standard input can't be read.
    pub fn read(&mut self, source: &ConfigSource) -> Result<String> {
        match source {
            ConfigSource::Stdin => self.read_stdin(),
            ConfigSource::File(path) => {
                debug!("Reading needs from {}", path.display());
                fs::read_to_string(path).map_err(|e| {
                    if e.kind() == io::ErrorKind::NotFound {
                        NeedError::SourceNotFound { path: path.clone() }
                    } else {
                        NeedError::Io(e)
                    }
                })
            }
        }
    }

    fn read_stdin(&mut self) -> Result<String> {
        if let Some(content) = &self.stdin_content {
            debug!("Reusing cached standard input");
            return Ok(content.clone());
        }

        debug!("Reading needs from standard input");
        let mut content = String::new();
        self.stdin
            .read_to_string(&mut content)
            .context("failed to read needs from standard input")?;
        self.stdin_content = Some(content.clone());
        Ok(content)
    }
}
