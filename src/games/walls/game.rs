//! Wall game implementation.

use crate::core::{Action, ConfigError, GameConfig, GameState, PlayerId, Variant};
use crate::rules::{self, ActionMask, RulesEngine, StepError};

/// Rules for one configured wall game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallGame {
    config: GameConfig,
}

/// Builder for creating a WallGame.
#[derive(Clone, Debug, Default)]
pub struct WallGameBuilder {
    config: GameConfig,
}

impl WallGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from standard Quoridor.
    pub fn quoridor() -> Self {
        Self {
            config: GameConfig::quoridor(),
        }
    }

    /// Start from standard Puoribor.
    pub fn puoribor() -> Self {
        Self {
            config: GameConfig::puoribor(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    pub fn max_walls(mut self, walls: u8) -> Self {
        self.config.max_walls = walls;
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> Result<(WallGame, GameState), ConfigError> {
        let game = WallGame::new(self.config)?;
        let state = game.initialize_state();
        Ok((game, state))
    }
}

impl WallGame {
    /// Rules for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Standard 9×9 Quoridor.
    #[must_use]
    pub fn quoridor() -> Self {
        Self {
            config: GameConfig::quoridor(),
        }
    }

    /// Standard 9×9 Puoribor.
    #[must_use]
    pub fn puoribor() -> Self {
        Self {
            config: GameConfig::puoribor(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Brute-force mask through `step`, for cross-checking `legal_actions`.
    #[must_use]
    pub fn legal_actions_reference(&self, state: &GameState, player: PlayerId) -> ActionMask {
        rules::legal_actions_reference(&self.config, state, player)
    }
}

impl RulesEngine for WallGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn step(
        &self,
        state: &GameState,
        player: PlayerId,
        action: Action,
    ) -> Result<GameState, StepError> {
        rules::step(&self.config, state, player, action)
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> ActionMask {
        rules::legal_actions(&self.config, state, player)
    }
}
