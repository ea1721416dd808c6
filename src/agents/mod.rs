//! Agents that choose actions for one side of a game.
//!
//! The engine never picks actions or tracks turns. An agent reads the state
//! and the legal-action mask and returns one action; the driver owns the
//! loop and decides which agent moves next.

pub mod random;

pub use random::RandomAgent;

use thiserror::Error;

use crate::core::{Action, EnvId, GameState, PlayerId};
use crate::rules::RulesEngine;

/// Why an agent could not produce an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent built for {expected} cannot play {found}")]
    IncompatibleEnv { expected: EnvId, found: EnvId },
    #[error("{0} has no legal actions")]
    NoLegalActions(PlayerId),
}

/// Something that picks actions.
pub trait Agent {
    /// Environment this agent was built for.
    fn env_id(&self) -> EnvId;

    /// Choose an action for `player`.
    fn act(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> Result<Action, AgentError>;

    /// Fail unless `engine` runs the rules this agent expects.
    fn check_env(&self, engine: &dyn RulesEngine) -> Result<(), AgentError> {
        let found = engine.env_id();
        if found == self.env_id() {
            Ok(())
        } else {
            Err(AgentError::IncompatibleEnv {
                expected: self.env_id(),
                found,
            })
        }
    }
}
