//! Configuration schema definitions for needs documents.
//!
//! This module contains the struct definitions that map to the YAML
//! needs document format:
//!
//! ```yaml
//! apiVersion: v1
//! kind: Needs
//! metadata:
//!   name: workstation
//! spec:
//!   needs:
//!     - name: scratch dir
//!       assessCmd: test -d /tmp/scratch
//!       fulfillCmd: mkdir -p /tmp/scratch
//!       help: Create `/tmp/scratch` by hand.
//! ```

use serde::{Deserialize, Serialize};

/// The only `kind` a needs document may declare.
pub const NEEDS_KIND: &str = "Needs";

/// Root structure of a needs document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedsConfig {
    /// Version of the document format.
    pub api_version: String,

    /// Always `Needs`.
    pub kind: String,

    /// Additional information about the document.
    #[serde(default)]
    pub metadata: Metadata,

    /// The needs themselves.
    pub spec: NeedsSpec,
}

impl NeedsConfig {
    /// The declared needs, in order.
    pub fn needs(&self) -> &[Need] {
        &self.spec.needs
    }
}

/// Optional document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display label for the whole document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of a needs document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedsSpec {
    /// Needs in declaration order. Order is significant.
    #[serde(default)]
    pub needs: Vec<Need>,
}

/// One declared unit of desired state.
///
/// `assess_cmd` and `fulfill_cmd` are opaque shell text; nothing here
/// parses or checks them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Need {
    /// Display label (may be empty).
    #[serde(default)]
    pub name: String,

    /// Exits 0 when the need is already satisfied.
    #[serde(default)]
    pub assess_cmd: String,

    /// Run only when assessment fails.
    #[serde(default)]
    pub fulfill_cmd: String,

    /// Markdown shown when fulfillment does not resolve the need.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Need {
    /// Create a need from its two commands.
    pub fn new(
        name: impl Into<String>,
        assess_cmd: impl Into<String>,
        fulfill_cmd: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            assess_cmd: assess_cmd.into(),
            fulfill_cmd: fulfill_cmd.into(),
            help: None,
        }
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Help text, treating a blank string the same as no help.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref().filter(|h| !h.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
apiVersion: v1
kind: Needs
metadata:
  name: workstation
spec:
  needs:
    - name: first
      assessCmd: "true"
      fulfillCmd: "false"
      help: "Ask **someone**."
    - name: second
      assessCmd: stat tmp/f
      fulfillCmd: touch tmp/f
"#;

    #[test]
    fn parses_full_document() {
        let config: NeedsConfig = serde_yaml::from_str(FULL).unwrap();

        assert_eq!(config.api_version, "v1");
        assert_eq!(config.kind, NEEDS_KIND);
        assert_eq!(config.metadata.name.as_deref(), Some("workstation"));
        assert_eq!(config.needs().len(), 2);
        assert_eq!(config.needs()[0].help.as_deref(), Some("Ask **someone**."));
        assert_eq!(config.needs()[1].assess_cmd, "stat tmp/f");
        assert_eq!(config.needs()[1].fulfill_cmd, "touch tmp/f");
    }

    #[test]
    fn preserves_declaration_order() {
        let config: NeedsConfig = serde_yaml::from_str(FULL).unwrap();
        let names: Vec<_> = config.needs().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn metadata_is_optional() {
        let yaml = "apiVersion: v1\nkind: Needs\nspec:\n  needs: []\n";
        let config: NeedsConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.metadata.name.is_none());
        assert!(config.needs().is_empty());
    }

    #[test]
    fn needs_list_may_be_omitted() {
        let yaml = "apiVersion: v1\nkind: Needs\nspec: {}\n";
        let config: NeedsConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.needs().is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let yaml = "apiVersion: v1\nkind: Needs\nspec:\n  needs:\n    - name: bare\n";
        let config: NeedsConfig = serde_yaml::from_str(yaml).unwrap();
        let need = &config.needs()[0];
        assert_eq!(need.assess_cmd, "");
        assert_eq!(need.fulfill_cmd, "");
        assert!(need.help.is_none());
    }

    #[test]
    fn kind_is_required() {
        let yaml = "apiVersion: v1\nspec:\n  needs: []\n";
        let err = serde_yaml::from_str::<NeedsConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("kind"));
    }

    #[test]
    fn api_version_is_required() {
        let yaml = "kind: Needs\nspec:\n  needs: []\n";
        let err = serde_yaml::from_str::<NeedsConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("apiVersion"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let yaml = "apiVersion: v1\nkind: Needs\nextra: 1\nspec:\n  needs: []\n";
        assert!(serde_yaml::from_str::<NeedsConfig>(yaml).is_ok());
    }

    #[test]
    fn blank_help_counts_as_none() {
        let need = Need::new("n", "true", "true").with_help("  \n");
        assert!(need.help_text().is_none());

        let need = Need::new("n", "true", "true").with_help("Run it.");
        assert_eq!(need.help_text(), Some("Run it."));
    }
}
