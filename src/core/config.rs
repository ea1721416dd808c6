//! Game configuration.
//!
//! Both wall games share one engine. A `GameConfig` picks the rule variant
//! and the board geometry:
//! - `Variant::Quoridor`: moves and wall placement
//! - `Variant::Puoribor`: additionally allows rotating a 4×4 wall section
//!
//! The engine never hardcodes the board side or wall allowance - it reads
//! them from here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Move and place walls.
    Quoridor,
    /// Move, place walls and rotate wall sections.
    Puoribor,
}

/// Environment identity, `(name, version)`.
///
/// Agents compare this against the engine they are handed to make sure they
/// were built for the same rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnvId {
    pub name: &'static str,
    pub version: u32,
}

impl EnvId {
    #[must_use]
    pub const fn new(name: &'static str, version: u32) -> Self {
        Self { name, version }
    }
}

impl std::fmt::Display for EnvId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot center pieces with even board_size={0}")]
    EvenBoardSize(usize),
    #[error("board_size={size} is below the minimum of {min} for {variant:?}")]
    BoardTooSmall {
        size: usize,
        min: usize,
        variant: Variant,
    },
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Which rule set to play.
    pub variant: Variant,

    /// Width and height of the board (odd, so agents start centered).
    pub board_size: usize,

    /// Walls each agent starts with.
    pub max_walls: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::puoribor()
    }
}

impl GameConfig {
    /// Standard 9×9 Quoridor with ten walls each.
    #[must_use]
    pub fn quoridor() -> Self {
        Self {
            variant: Variant::Quoridor,
            board_size: 9,
            max_walls: 10,
        }
    }

    /// Standard 9×9 Puoribor with ten walls each.
    #[must_use]
    pub fn puoribor() -> Self {
        Self {
            variant: Variant::Puoribor,
            board_size: 9,
            max_walls: 10,
        }
    }

    /// Use a different board side.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Use a different wall allowance.
    pub fn with_max_walls(mut self, walls: u8) -> Self {
        self.max_walls = walls;
        self
    }

    /// Check that agents can be centered and every action kind fits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = match self.variant {
            Variant::Quoridor => 3,
            Variant::Puoribor => 5,
        };
        if self.board_size < min {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min,
                variant: self.variant,
            });
        }
        if self.board_size % 2 == 0 {
            return Err(ConfigError::EvenBoardSize(self.board_size));
        }
        Ok(())
    }

    /// Whether `RotateSection` is part of the action space.
    #[must_use]
    pub fn allows_rotation(&self) -> bool {
        self.variant == Variant::Puoribor
    }

    /// Number of action kinds (planes in the legal-action mask).
    #[must_use]
    pub fn action_kinds(&self) -> usize {
        if self.allows_rotation() {
            4
        } else {
            3
        }
    }

    /// Environment identity for this variant.
    #[must_use]
    pub fn env_id(&self) -> EnvId {
        match self.variant {
            Variant::Quoridor => EnvId::new("quoridor", 0),
            Variant::Puoribor => EnvId::new("puoribor", 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let q = GameConfig::quoridor();
        assert_eq!(q.board_size, 9);
        assert_eq!(q.max_walls, 10);
        assert!(!q.allows_rotation());
        assert_eq!(q.action_kinds(), 3);
        assert_eq!(q.env_id(), EnvId::new("quoridor", 0));

        let p = GameConfig::puoribor();
        assert!(p.allows_rotation());
        assert_eq!(p.action_kinds(), 4);
        assert_eq!(p.env_id(), EnvId::new("puoribor", 3));
        assert_eq!(format!("{}", p.env_id()), "puoribor v3");
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::quoridor().with_board_size(7).with_max_walls(4);

        assert_eq!(config.board_size, 7);
        assert_eq!(config.max_walls, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_even_boards() {
        let config = GameConfig::puoribor().with_board_size(8);
        assert_eq!(config.validate(), Err(ConfigError::EvenBoardSize(8)));
    }

    #[test]
    fn test_validate_rejects_small_rotation_boards() {
        assert!(GameConfig::quoridor().with_board_size(3).validate().is_ok());
        assert!(matches!(
            GameConfig::puoribor().with_board_size(3).validate(),
            Err(ConfigError::BoardTooSmall { min: 5, .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::quoridor().with_max_walls(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
