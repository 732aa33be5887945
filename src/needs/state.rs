//! The resolution state machine.
//!
//! ```text
//! Initial ──assess ok──▶ AssessedOk                         (resolved)
//!    │
//!    └─assess fail──▶ AssessedFail ──fulfill fail──▶ FulfilledFail   (unresolved)
//!                         │
//!                         └─fulfill ok──▶ FulfilledOk ──reassess ok──▶ ReassessedOk   (resolved)
//!                                              │
//!                                              └─reassess fail──▶ ReassessedFail   (unresolved)
//! ```

use std::fmt;

use crate::ui::StatusKind;

/// A step of the protocol that runs one shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First run of the assessment command.
    Assess,
    /// Run of the fulfillment command.
    Fulfill,
    /// Assessment after a successful fulfillment.
    Reassess,
}

impl Phase {
    /// Status text shown when the phase starts.
    pub fn started_label(&self) -> &'static str {
        match self {
            Self::Assess => "Assessing ...",
            Self::Fulfill => "Fulfilling ...",
            Self::Reassess => "Assessing again ...",
        }
    }

    /// Status text shown when the phase's command exits 0.
    pub fn passed_label(&self) -> &'static str {
        match self {
            Self::Assess | Self::Reassess => "Fulfilled",
            Self::Fulfill => "Done",
        }
    }

    /// Status text shown when the phase's command fails.
    pub fn failed_label(&self) -> &'static str {
        match self {
            Self::Assess => "Unfulfilled",
            Self::Fulfill => "Failed",
            Self::Reassess => "Still unfulfilled",
        }
    }

    /// How a failure of this phase is displayed.
    ///
    /// Only the first assessment failing is expected; it leads to fulfillment.
    pub fn failed_kind(&self) -> StatusKind {
        match self {
            Self::Assess => StatusKind::Unmet,
            Self::Fulfill | Self::Reassess => StatusKind::Failed,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Assess => "assess",
            Self::Fulfill => "fulfill",
            Self::Reassess => "reassess",
        };
        write!(f, "{}", s)
    }
}

/// Where a need is in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedState {
    /// Nothing has run yet.
    Initial,
    /// Already satisfied.
    AssessedOk,
    /// Not satisfied; fulfillment comes next.
    AssessedFail,
    /// Fulfillment exited 0; reassessment comes next.
    FulfilledOk,
    /// Fulfillment failed.
    FulfilledFail,
    /// Satisfied after fulfillment.
    ReassessedOk,
    /// Still not satisfied after fulfillment.
    ReassessedFail,
}

impl NeedState {
    /// The phase to run from this state, or `None` if the state is terminal.
    pub fn next_phase(self) -> Option<Phase> {
        match self {
            Self::Initial => Some(Phase::Assess),
            Self::AssessedFail => Some(Phase::Fulfill),
            Self::FulfilledOk => Some(Phase::Reassess),
            Self::AssessedOk | Self::FulfilledFail | Self::ReassessedOk | Self::ReassessedFail => {
                None
            }
        }
    }

    /// The state reached after this state's phase passed or failed.
    ///
    /// Terminal states stay where they are.
    pub fn advance(self, passed: bool) -> Self {
        match (self, passed) {
            (Self::Initial, true) => Self::AssessedOk,
            (Self::Initial, false) => Self::AssessedFail,
            (Self::AssessedFail, true) => Self::FulfilledOk,
            (Self::AssessedFail, false) => Self::FulfilledFail,
            (Self::FulfilledOk, true) => Self::ReassessedOk,
            (Self::FulfilledOk, false) => Self::ReassessedFail,
            (terminal, _) => terminal,
        }
    }

    /// Whether the protocol has finished.
    pub fn is_terminal(self) -> bool {
        self.next_phase().is_none()
    }

    /// Whether this is a terminal state in which the need is satisfied.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::AssessedOk | Self::ReassessedOk)
    }

    /// Whether help should be shown on reaching this state.
    pub fn shows_help(self) -> bool {
        matches!(self, Self::FulfilledFail | Self::ReassessedFail)
    }
}

/// Final verdict on a need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The need is satisfied.
    Fulfilled,
    /// The need could not be satisfied.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(results: &[bool]) -> Vec<NeedState> {
        let mut state = NeedState::Initial;
        let mut trail = vec![state];
        for passed in results {
            state = state.advance(*passed);
            trail.push(state);
        }
        trail
    }

    #[test]
    fn already_satisfied_path() {
        let trail = walk(&[true]);
        assert_eq!(trail.last(), Some(&NeedState::AssessedOk));
        assert!(NeedState::AssessedOk.is_terminal());
        assert!(NeedState::AssessedOk.is_resolved());
        assert!(!NeedState::AssessedOk.shows_help());
    }

    #[test]
    fn fulfilled_path() {
        let trail = walk(&[false, true, true]);
        assert_eq!(
            trail,
            vec![
                NeedState::Initial,
                NeedState::AssessedFail,
                NeedState::FulfilledOk,
                NeedState::ReassessedOk,
            ]
        );
        assert!(NeedState::ReassessedOk.is_resolved());
    }

    #[test]
    fn fulfill_failure_is_terminal() {
        let state = NeedState::Initial.advance(false).advance(false);
        assert_eq!(state, NeedState::FulfilledFail);
        assert!(state.is_terminal());
        assert!(!state.is_resolved());
        assert!(state.shows_help());
    }

    #[test]
    fn reassess_failure_is_terminal() {
        let state = NeedState::Initial
            .advance(false)
            .advance(true)
            .advance(false);
        assert_eq!(state, NeedState::ReassessedFail);
        assert!(state.is_terminal());
        assert!(state.shows_help());
    }

    #[test]
    fn next_phase_follows_protocol() {
        assert_eq!(NeedState::Initial.next_phase(), Some(Phase::Assess));
        assert_eq!(NeedState::AssessedFail.next_phase(), Some(Phase::Fulfill));
        assert_eq!(NeedState::FulfilledOk.next_phase(), Some(Phase::Reassess));
    }

    #[test]
    fn terminal_states_do_not_advance() {
        for state in [
            NeedState::AssessedOk,
            NeedState::FulfilledFail,
            NeedState::ReassessedOk,
            NeedState::ReassessedFail,
        ] {
            assert_eq!(state.advance(true), state);
            assert_eq!(state.advance(false), state);
            assert!(state.next_phase().is_none());
        }
    }

    #[test]
    fn non_terminal_states_are_not_resolved() {
        for state in [
            NeedState::Initial,
            NeedState::AssessedFail,
            NeedState::FulfilledOk,
        ] {
            assert!(!state.is_terminal());
            assert!(!state.is_resolved());
            assert!(!state.shows_help());
        }
    }

    #[test]
    fn phase_labels() {
        assert_eq!(Phase::Assess.started_label(), "Assessing ...");
        assert_eq!(Phase::Assess.passed_label(), "Fulfilled");
        assert_eq!(Phase::Assess.failed_label(), "Unfulfilled");
        assert_eq!(Phase::Fulfill.started_label(), "Fulfilling ...");
        assert_eq!(Phase::Fulfill.passed_label(), "Done");
        assert_eq!(Phase::Fulfill.failed_label(), "Failed");
        assert_eq!(Phase::Reassess.started_label(), "Assessing again ...");
        assert_eq!(Phase::Reassess.passed_label(), "Fulfilled");
        assert_eq!(Phase::Reassess.failed_label(), "Still unfulfilled");
    }

    #[test]
    fn only_first_assessment_failure_is_unmet() {
        assert_eq!(Phase::Assess.failed_kind(), StatusKind::Unmet);
        assert_eq!(Phase::Fulfill.failed_kind(), StatusKind::Failed);
        assert_eq!(Phase::Reassess.failed_kind(), StatusKind::Failed);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Reassess.to_string(), "reassess");
    }
}
