//! Addressing the needs of loaded documents.

use tracing::debug;

use crate::config::LoadedDocument;
use crate::needs::NeedResolver;
use crate::ui::UserInterface;

use super::report::{DocumentReport, RunReport};

/// What to do after a need fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Keep addressing every remaining need.
    #[default]
    Continue,
    /// Skip every remaining need in every document.
    FailFast,
}

/// Options for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Behavior after the first unresolved need.
    pub failure_policy: FailurePolicy,
}

/// Addresses the needs of a list of documents, in order.
pub struct NeedsRunner<'a> {
    documents: &'a [LoadedDocument],
}

impl<'a> NeedsRunner<'a> {
    /// Create a runner over already loaded documents.
    pub fn new(documents: &'a [LoadedDocument]) -> Self {
        Self { documents }
    }

    /// Address every need sequentially.
    pub fn run(
        &self,
        resolver: &NeedResolver<'_>,
        options: &RunOptions,
        ui: &mut dyn UserInterface,
    ) -> RunReport {
        let mut report = RunReport::default();
        let mut stopped = false;

        for document in self.documents {
            let mut doc_report = DocumentReport::new(document.display_name());

            if stopped {
                doc_report
                    .skipped
                    .extend(document.needs().iter().map(|n| n.name.clone()));
                report.documents.push(doc_report);
                continue;
            }

            ui.show_document_header(&doc_report.name);
            if document.needs().is_empty() {
                ui.message("  No needs declared");
            }

            for need in document.needs() {
                if stopped {
                    doc_report.skipped.push(need.name.clone());
                    continue;
                }

                let outcome = resolver.address(need, ui);
                if !outcome.is_success() && options.failure_policy == FailurePolicy::FailFast {
                    debug!("Need '{}' failed; skipping remaining needs", need.name);
                    stopped = true;
                }
                doc_report.outcomes.push(outcome);
            }

            report.documents.push(doc_report);
        }

        report
    }
}
