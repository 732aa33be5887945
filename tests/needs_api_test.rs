//! Integration tests for the needs and runner public API.

use need::config::{load_documents, ConfigSource, Need, SourceReader};
use need::help::{MarkdownRenderer, PlainRenderer, RENDER_FAILED_NOTICE};
use need::needs::{NeedResolver, NeedState, Phase, Resolution};
use need::runner::{FailurePolicy, NeedsRunner, RunOptions};
use need::shell::CommandOptions;
use need::ui::{MockUI, StatusKind};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const TOOLCHAIN: &str = r#"
apiVersion: v1
kind: Needs
metadata:
  name: toolchain
spec:
  needs:
    - name: build dir
      assessCmd: test -d build
      fulfillCmd: mkdir build
    - name: marker
      assessCmd: test -f build/marker
      fulfillCmd: touch build/marker
"#;

#[test]
fn load_and_run_documents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("needs.yaml");
    fs::write(&path, TOOLCHAIN).unwrap();

    let mut reader = SourceReader::with_stdin(Cursor::new(String::new()));
    let documents = load_documents(&[ConfigSource::File(path)], &mut reader).unwrap();

    let renderer = PlainRenderer;
    let resolver =
        NeedResolver::new(&renderer).with_options(CommandOptions::in_dir(temp.path()));
    let mut ui = MockUI::new();
    let report = NeedsRunner::new(&documents).run(&resolver, &RunOptions::default(), &mut ui);

    assert!(report.success());
    assert_eq!(report.addressed_count(), 2);
    assert!(temp.path().join("build/marker").exists());
    assert_eq!(ui.document_headers(), ["toolchain"]);

    // Everything is in place now: nothing gets fulfilled.
    ui.clear();
    let again = NeedsRunner::new(&documents).run(&resolver, &RunOptions::default(), &mut ui);
    assert!(again.success());
    assert!(!ui.has_status("Fulfilling ..."));
    assert!(again.documents[0]
        .outcomes
        .iter()
        .all(|o| o.state == NeedState::AssessedOk));
}

#[test]
fn fail_fast_stops_at_first_unresolved_need() {
    let mut reader = SourceReader::with_stdin(Cursor::new(TOOLCHAIN.to_string()));
    let documents =
        load_documents(&[ConfigSource::Stdin, ConfigSource::Stdin], &mut reader).unwrap();
    let temp = TempDir::new().unwrap();
    // A plain file named `build` makes `mkdir build` fail.
    fs::write(temp.path().join("build"), "").unwrap();

    let renderer = PlainRenderer;
    let resolver =
        NeedResolver::new(&renderer).with_options(CommandOptions::in_dir(temp.path()));
    let options = RunOptions {
        failure_policy: FailurePolicy::FailFast,
    };
    let mut ui = MockUI::new();
    let report = NeedsRunner::new(&documents).run(&resolver, &options, &mut ui);

    assert!(!report.success());
    assert_eq!(report.addressed_count(), 1);
    assert_eq!(report.skipped_count(), 3);
    assert_eq!(report.documents[0].outcomes[0].state, NeedState::FulfilledFail);
    assert_eq!(ui.need_headers(), ["build dir"]);
}

#[test]
fn stdin_document_is_shared_between_sources() {
    let mut reader = SourceReader::with_stdin(Cursor::new(TOOLCHAIN.to_string()));

    let documents =
        load_documents(&[ConfigSource::Stdin, ConfigSource::Stdin], &mut reader).unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0], documents[1]);
}

#[test]
fn unresolved_need_shows_markdown_help() {
    let need = Need::new("vpn", "false", "false").with_help("Connect to the **VPN**.");
    let renderer = MarkdownRenderer::plain();
    let mut ui = MockUI::new();

    let outcome = NeedResolver::new(&renderer).address(&need, &mut ui);

    assert_eq!(outcome.resolution(), Resolution::Failed);
    assert!(!outcome.ran(Phase::Reassess));
    assert_eq!(ui.helps(), ["    Connect to the VPN.\n"]);
}

#[test]
fn help_with_placeholder_is_rendered_in_full() {
    let need = Need::new("token", "false", "false")
        .with_help("Export GITHUB_TOKEN=<your token> and retry.");
    let renderer = MarkdownRenderer::plain();
    let mut ui = MockUI::new();

    NeedResolver::new(&renderer).address(&need, &mut ui);

    assert_eq!(
        ui.helps(),
        ["    Export GITHUB_TOKEN=<your token> and retry.\n"]
    );
}

#[test]
fn unrenderable_help_falls_back_to_notice() {
    let need = Need::new("vpn", "false", "true").with_help("<div>\nConnect\n</div>");
    let renderer = MarkdownRenderer::plain();
    let mut ui = MockUI::new();

    let outcome = NeedResolver::new(&renderer).address(&need, &mut ui);

    assert_eq!(outcome.state, NeedState::ReassessedFail);
    assert_eq!(ui.helps(), [RENDER_FAILED_NOTICE]);
}

#[test]
fn status_kinds_follow_phases() {
    let need = Need::new("stubborn", "false", "true");
    let mut ui = MockUI::new();

    NeedResolver::new(&PlainRenderer).address(&need, &mut ui);

    let kinds: Vec<StatusKind> = ui.statuses().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            StatusKind::Running,
            StatusKind::Unmet,
            StatusKind::Running,
            StatusKind::Passed,
            StatusKind::Running,
            StatusKind::Failed,
        ]
    );
}
