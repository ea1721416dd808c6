//! Uniformly random agent.

use crate::core::{Action, EnvId, GameRng, GameRngState, GameState, PlayerId};
use crate::rules::RulesEngine;

use super::{Agent, AgentError};

/// Picks uniformly among the legal actions with its own seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    env_id: EnvId,
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(env_id: EnvId, seed: u64) -> Self {
        Self {
            env_id,
            rng: GameRng::new(seed),
        }
    }

    /// Agent for whatever rules `engine` runs.
    #[must_use]
    pub fn for_engine(engine: &dyn RulesEngine, seed: u64) -> Self {
        Self::new(engine.env_id(), seed)
    }

    /// RNG position, for resuming a rollout.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

impl Agent for RandomAgent {
    fn env_id(&self) -> EnvId {
        self.env_id
    }

    fn act(
        &mut self,
        engine: &dyn RulesEngine,
        state: &GameState,
        player: PlayerId,
    ) -> Result<Action, AgentError> {
        self.check_env(engine)?;
        let actions = engine.legal_action_list(state, player);
        self.rng
            .choose(&actions)
            .copied()
            .ok_or(AgentError::NoLegalActions(player))
    }
}
