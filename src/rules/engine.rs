//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions produce the next state
//! - Who has won
//!
//! States are values: `step` borrows the current state and returns a new
//! one, so callers can probe candidate actions against the same state.

use crate::core::{Action, EnvId, GameConfig, GameState, PlayerId};

use super::error::StepError;
use super::mask::ActionMask;

/// Observer passed to [`RulesEngine::step_with_hooks`].
pub type StepHook<'a> = &'a dyn Fn(&GameState, PlayerId, Action);

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `step`: Must be deterministic and must leave `state` untouched on error
/// - `legal_actions`: A set bit means `step` succeeds for that action
/// - Turn order is the caller's business; the engine takes `player` per call
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Identity checked by agents before playing.
    fn env_id(&self) -> EnvId {
        self.config().env_id()
    }

    /// Starting state.
    fn initialize_state(&self) -> GameState {
        GameState::initial(self.config())
    }

    /// Apply an action for `player`.
    fn step(
        &self,
        state: &GameState,
        player: PlayerId,
        action: Action,
    ) -> Result<GameState, StepError>;

    /// Mask of every action `player` may take.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> ActionMask;

    /// Winner of a finished game, `None` while it continues.
    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        if state.is_done() {
            state.winner()
        } else {
            None
        }
    }

    // === Convenience Methods ===

    /// `step` with observers around the transition.
    ///
    /// `pre` sees the current state before the action is checked. `post`
    /// sees the successor and only runs when the step succeeds.
    fn step_with_hooks(
        &self,
        state: &GameState,
        player: PlayerId,
        action: Action,
        pre: Option<StepHook<'_>>,
        post: Option<StepHook<'_>>,
    ) -> Result<GameState, StepError> {
        if let Some(hook) = pre {
            hook(state, player, action);
        }
        let next = self.step(state, player, action)?;
        if let Some(hook) = post {
            hook(&next, player, action);
        }
        Ok(next)
    }

    /// Legal actions as a list, in mask order.
    fn legal_action_list(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.legal_actions(state, player).actions().collect()
    }
}
