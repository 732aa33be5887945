//! The need resolution protocol.
//!
//! A need is addressed by assessing it, fulfilling it if the assessment
//! fails, and assessing it again after a successful fulfillment. Needs left
//! unresolved get their help shown.
//!
//! - [`state`] - The state machine and phase labels
//! - [`resolver`] - Running the protocol against real shell commands
//!
//! # Example
//!
//! ```
//! use need::config::Need;
//! use need::help::PlainRenderer;
//! use need::needs::{NeedResolver, NeedState};
//! use need::ui::MockUI;
//!
//! let need = Need::new("shell", "true", "echo never runs");
//! let mut ui = MockUI::new();
//!
//! let outcome = NeedResolver::new(&PlainRenderer).address(&need, &mut ui);
//! assert!(outcome.is_success());
//! assert_eq!(outcome.state, NeedState::AssessedOk);
//! ```

pub mod resolver;
pub mod state;

pub use resolver::{NeedOutcome, NeedResolver, PhaseRecord};
pub use state::{NeedState, Phase, Resolution};
