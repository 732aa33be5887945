//! Addressing a single need.
//!
//! [`NeedResolver::address`] drives one need through the state machine in
//! [`super::state`]: assess, fulfill if needed, reassess, and show help when
//! the need stays unresolved. Nothing in here returns an error; every
//! failure becomes console output and part of the [`NeedOutcome`].

use tracing::{debug, warn};

use crate::config::Need;
use crate::help::{HelpRenderer, NO_HELP, RENDER_FAILED_NOTICE};
use crate::shell::{execute, CommandOptions};
use crate::ui::{StatusKind, UserInterface};

use super::state::{NeedState, Phase, Resolution};

/// What happened when a phase ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRecord {
    /// Which phase ran.
    pub phase: Phase,
    /// Whether its command exited 0.
    pub passed: bool,
    /// Exit code (None if the shell couldn't start or was killed by a signal).
    pub exit_code: Option<i32>,
}

/// Result of addressing one need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedOutcome {
    /// Need name.
    pub name: String,
    /// Terminal state reached.
    pub state: NeedState,
    /// Phases run, in order.
    pub phases: Vec<PhaseRecord>,
    /// Whether help (or the fallback notice) was shown.
    pub help_shown: bool,
}

impl NeedOutcome {
    /// Final verdict.
    pub fn resolution(&self) -> Resolution {
        if self.state.is_resolved() {
            Resolution::Fulfilled
        } else {
            Resolution::Failed
        }
    }

    /// Whether the need ended up satisfied.
    pub fn is_success(&self) -> bool {
        self.resolution() == Resolution::Fulfilled
    }

    /// Whether `phase` was run.
    pub fn ran(&self, phase: Phase) -> bool {
        self.phases.iter().any(|p| p.phase == phase)
    }
}

/// Runs the resolution protocol for needs.
pub struct NeedResolver<'a> {
    renderer: &'a dyn HelpRenderer,
    options: CommandOptions,
}

impl<'a> NeedResolver<'a> {
    /// Create a resolver rendering help with `renderer`.
    pub fn new(renderer: &'a dyn HelpRenderer) -> Self {
        Self {
            renderer,
            options: CommandOptions::default(),
        }
    }

    /// Run every command with these options.
    pub fn with_options(mut self, options: CommandOptions) -> Self {
        self.options = options;
        self
    }

    /// Assess, fulfill if needed, reassess, and show help if still unresolved.
    pub fn address(&self, need: &Need, ui: &mut dyn UserInterface) -> NeedOutcome {
        ui.show_need_header(&need.name);

        let mut state = NeedState::Initial;
        let mut phases = Vec::new();

        while let Some(phase) = state.next_phase() {
            let record = self.run_phase(phase, need, ui);
            let next = state.advance(record.passed);
            debug!("Need '{}': {:?} -> {:?}", need.name, state, next);
            phases.push(record);
            state = next;
        }

        let help_shown = state.shows_help();
        if help_shown {
            self.render_help(need, ui);
        }

        NeedOutcome {
            name: need.name.clone(),
            state,
            phases,
            help_shown,
        }
    }

    /// Run the assessment command once.
    pub fn assess(&self, need: &Need, ui: &mut dyn UserInterface) -> PhaseRecord {
        self.run_phase(Phase::Assess, need, ui)
    }

    /// Run the fulfillment command once.
    pub fn fulfill(&self, need: &Need, ui: &mut dyn UserInterface) -> PhaseRecord {
        self.run_phase(Phase::Fulfill, need, ui)
    }

    /// Show the need's help, or a notice if it can't be rendered.
    ///
    /// Returns whether rendering succeeded. Either way something is shown.
    pub fn render_help(&self, need: &Need, ui: &mut dyn UserInterface) -> bool {
        let markdown = need.help_text().unwrap_or(NO_HELP);

        match self.renderer.render(markdown) {
            Ok(rendered) => {
                ui.show_help(&rendered);
                true
            }
            Err(e) => {
                warn!("Could not render help for '{}': {}", need.name, e);
                ui.show_help(RENDER_FAILED_NOTICE);
                false
            }
        }
    }

    fn run_phase(&self, phase: Phase, need: &Need, ui: &mut dyn UserInterface) -> PhaseRecord {
        let command = match phase {
            Phase::Assess | Phase::Reassess => &need.assess_cmd,
            Phase::Fulfill => &need.fulfill_cmd,
        };
        let verbose = ui.output_mode().shows_command_output();

        ui.show_status(StatusKind::Running, phase.started_label());
        if verbose {
            ui.show_command(command);
        }

        match execute(command, &self.options) {
            Ok(result) if result.success => {
                ui.show_status(StatusKind::Passed, phase.passed_label());
                let has_output = !result.stdout.trim().is_empty() || !result.stderr.trim().is_empty();
                if verbose && has_output {
                    ui.show_command_output(&result.stdout, &result.stderr);
                }
                PhaseRecord {
                    phase,
                    passed: true,
                    exit_code: result.exit_code,
                }
            }
            Ok(result) => {
                ui.show_status(phase.failed_kind(), phase.failed_label());
                ui.show_command_output(&result.stdout, &result.stderr);
                PhaseRecord {
                    phase,
                    passed: false,
                    exit_code: result.exit_code,
                }
            }
            Err(e) => {
                warn!("Could not {} '{}': {}", phase, need.name, e);
                ui.show_status(phase.failed_kind(), phase.failed_label());
                ui.show_command_output("", &e.to_string());
                PhaseRecord {
                    phase,
                    passed: false,
                    exit_code: None,
                }
            }
        }
    }
}
