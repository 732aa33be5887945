//! Run reports.

use crate::needs::NeedOutcome;
use crate::ui::RunSummary;

/// Name listed for a failed need that has no name.
pub const UNNAMED_NEED: &str = "<unnamed>";

/// Outcomes of one document's needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Display name of the document.
    pub name: String,
    /// Outcome of every addressed need, in order.
    pub outcomes: Vec<NeedOutcome>,
    /// Names of needs skipped after an earlier failure.
    pub skipped: Vec<String>,
}

impl DocumentReport {
    /// Create an empty report for a document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcomes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether every addressed need in this document was resolved.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(NeedOutcome::is_success)
    }
}

/// Result of running every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Per-document reports, in load order.
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    /// Whether every addressed need was resolved.
    ///
    /// A run that addresses nothing succeeds.
    pub fn success(&self) -> bool {
        self.documents.iter().all(DocumentReport::success)
    }

    /// Number of needs addressed.
    pub fn addressed_count(&self) -> usize {
        self.documents.iter().map(|d| d.outcomes.len()).sum()
    }

    /// Number of needs skipped.
    pub fn skipped_count(&self) -> usize {
        self.documents.iter().map(|d| d.skipped.len()).sum()
    }

    /// Names of unresolved needs, in the order they were addressed.
    pub fn failed_needs(&self) -> Vec<String> {
        self.documents
            .iter()
            .flat_map(|d| d.outcomes.iter())
            .filter(|o| !o.is_success())
            .map(|o| {
                if o.name.trim().is_empty() {
                    UNNAMED_NEED.to_string()
                } else {
                    o.name.clone()
                }
            })
            .collect()
    }

    /// Condense the report for display.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            success: self.success(),
            documents: self.documents.len(),
            addressed: self.addressed_count(),
            failed: self.failed_needs(),
            skipped: self.skipped_count(),
        }
    }
}
