//! Core engine types: players, geometry, configuration, actions, board,
//! state, snapshots and RNG.
//!
//! Everything here is plain data. The rules that move a state forward live
//! in `rules`; the shortest-path machinery lives in `reach`.

pub mod player;
pub mod geometry;
pub mod config;
pub mod action;
pub mod board;
pub mod snapshot;
pub mod state;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use geometry::{Coord, Direction, Edge, Orientation};
pub use config::{ConfigError, EnvId, GameConfig, Variant};
pub use action::{Action, ActionDecodeError, ActionKind};
pub use board::{Board, CHANNELS, SECTION_SIDE};
pub use snapshot::{SnapshotError, StateSnapshot, UNREACHABLE};
pub use state::{GameState, GameStatus};
pub use rng::{GameRng, GameRngState};
