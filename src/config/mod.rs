//! Needs document loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - Source identifiers and reading in [`source`]
//! - Decoding in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use need::config::{load_document, ConfigSource, SourceReader};
//! use std::io::Cursor;
//!
//! let yaml = "apiVersion: v1\nkind: Needs\nspec:\n  needs:\n    - name: shell\n      assessCmd: \"true\"\n";
//! let mut reader = SourceReader::with_stdin(Cursor::new(yaml.as_bytes().to_vec()));
//!
//! let doc = load_document(&ConfigSource::Stdin, &mut reader).unwrap();
//! assert_eq!(doc.needs()[0].name, "shell");
//! assert_eq!(doc.display_name(), "<stdin>");
//! ```

pub mod loader;
pub mod schema;
pub mod source;
pub mod validator;

pub use loader::{load_document, load_documents, parse_config, LoadedDocument};
pub use schema::{Metadata, Need, NeedsConfig, NeedsSpec, NEEDS_KIND};
pub use source::{ConfigSource, SourceReader, STDIN_MARKER};
pub use validator::{validate, validate_config, ValidationError};
