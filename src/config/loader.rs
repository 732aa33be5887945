//! Needs document loading.
//!
//! Turns [`ConfigSource`]s into decoded, validated [`LoadedDocument`]s.
//! Every source is loaded before any need is addressed, so a bad document
//! anywhere in the list stops the run before it changes anything.

use std::io::Read;
use tracing::debug;

use crate::config::schema::{Need, NeedsConfig};
use crate::config::source::{ConfigSource, SourceReader};
use crate::config::validator::validate;
use crate::error::{NeedError, Result};

/// A decoded needs document together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// Where the document was read from.
    pub source: ConfigSource,
    /// The decoded document.
    pub config: NeedsConfig,
}

impl LoadedDocument {
    /// Name shown above the document's needs.
    ///
    /// Falls back to the source label when `metadata.name` is absent or blank.
    pub fn display_name(&self) -> String {
        match self.config.metadata.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => self.source.label(),
        }
    }

    /// The document's needs, in order.
    pub fn needs(&self) -> &[Need] {
        self.config.needs()
    }
}

/// Parse YAML content into a NeedsConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `name` - Document name for error reporting
pub fn parse_config(content: &str, name: &str) -> Result<NeedsConfig> {
    if content.trim().is_empty() {
        return Err(NeedError::ConfigParseError {
            name: name.to_string(),
            message: "document is empty".to_string(),
        });
    }

    serde_yaml::from_str(content).map_err(|e| NeedError::ConfigParseError {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Read, parse and validate a single source.
///
/// # Errors
///
/// Returns `SourceNotFound`/`Io`/`Other` if the source can't be read,
/// `ConfigParseError` if it isn't a needs document, and
/// `ConfigValidationError` if it declares the wrong kind.
pub fn load_document<R: Read>(
    source: &ConfigSource,
    reader: &mut SourceReader<R>,
) -> Result<LoadedDocument> {
    let name = source.label();
    let content = reader.read(source)?;
    let config = parse_config(&content, &name)?;
    validate(&config, &name)?;

    debug!("Loaded {} need(s) from {}", config.needs().len(), name);

    Ok(LoadedDocument {
        source: source.clone(),
        config,
    })
}

/// Load every source in order, stopping at the first failure.
pub fn load_documents<R: Read>(
    sources: &[ConfigSource],
    reader: &mut SourceReader<R>,
) -> Result<Vec<LoadedDocument>> {
    sources
        .iter()
        .map(|source| load_document(source, reader))
        .collect()
}
