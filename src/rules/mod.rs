//! Game rules: the step engine, legal-action enumeration and the
//! `RulesEngine` trait tying them to a configuration.
//!
//! - `step`: validate one action and build the successor state
//! - `legal_actions` / `legal_actions_reference`: fast and brute-force masks
//! - `StepError`: why an action was rejected

pub mod engine;
pub mod error;
pub mod legal;
pub mod mask;
pub mod step;

pub use engine::{RulesEngine, StepHook};
pub use error::StepError;
pub use legal::{legal_actions, legal_actions_reference};
pub use mask::ActionMask;
pub use step::{move_destinations, step, validate_move};
