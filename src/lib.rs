//! # rust-fights
//!
//! Rule engines for two-agent wall games, built for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `step` borrows a state and returns a new one.
//!    A failed step leaves nothing behind, so enumerators can probe every
//!    candidate action against the same state.
//!
//! 2. **Always a Way Home**: no successful transition ever leaves an agent
//!    without a path to its goal row. Every wall change is checked against
//!    fresh shortest-path fields.
//!
//! 3. **Configuration Over Convention**: board size, wall allowance and the
//!    rule variant come from `GameConfig`.
//!
//! ## Games
//!
//! - **Quoridor**: move a token or place a two-cell wall.
//! - **Puoribor**: additionally rotate a 4×4 section of the board, turning
//!   every wall inside it by 90°.
//!
//! ## Modules
//!
//! - `core`: Players, geometry, configuration, actions, board, state, RNG
//! - `reach`: Distance fields and path checks
//! - `rules`: Step engine, legal-action masks, `RulesEngine` trait
//! - `games`: `WallGame` for both variants
//! - `agents`: Agents that pick actions from the legal mask
//!
//! ## Example
//!
//! ```
//! use rust_fights::{Action, Coord, PlayerId, RulesEngine, WallGameBuilder};
//!
//! let (game, state) = WallGameBuilder::puoribor().build().unwrap();
//! let agent = PlayerId::new(0);
//!
//! let mask = game.legal_actions(&state, agent);
//! assert!(mask.contains(Action::Move { to: Coord::new(4, 1) }));
//!
//! let wall = Action::PlaceVerticalWall { anchor: Coord::new(3, 5) };
//! let next = game.step(&state, agent, wall).unwrap();
//! assert_eq!(next.walls_remaining(agent), 9);
//! ```

pub mod core;
pub mod reach;
pub mod rules;
pub mod games;
pub mod agents;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Coord, Direction, Edge, Orientation,
    GameConfig, Variant, EnvId, ConfigError,
    Action, ActionKind, ActionDecodeError,
    Board, GameState, GameStatus,
    StateSnapshot, SnapshotError,
    GameRng, GameRngState,
};

pub use crate::reach::{has_path, DistanceField, PathCell, ReachabilityMap};

pub use crate::rules::{
    legal_actions, legal_actions_reference, step,
    ActionMask, RulesEngine, StepError, StepHook,
};

pub use crate::games::{WallGame, WallGameBuilder};

pub use crate::agents::{Agent, AgentError, RandomAgent};
