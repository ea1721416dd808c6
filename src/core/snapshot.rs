//! Primitive-only state snapshots.
//!
//! A `StateSnapshot` holds nothing but integers and a boolean, so it
//! serializes to any serde format and crosses language boundaries unchanged:
//!
//! ```text
//! {
//!   board:           [6][N][N] small integers,
//!   walls_remaining: [2],
//!   reachability:    [2][N][N][2]  (distance, direction),
//!   done:            bool,
//! }
//! ```
//!
//! Unreachable cells encode as distance `UNREACHABLE` with direction 0.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Coord;
use super::player::PlayerId;

/// Distance written for cells that cannot reach the goal row.
pub const UNREACHABLE: u32 = 99_999;

/// Rejected snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Shape(&'static str),
    #[error("layer for {0} must hold exactly one token")]
    AgentLayer(PlayerId),
    #[error("both agents occupy the same cell")]
    AgentsOverlap,
    #[error("channel {channel} holds invalid value {value}")]
    Label { channel: usize, value: u8 },
    #[error("wall occupancy at {0} does not match the midpoint markers")]
    InconsistentWalls(Coord),
    #[error("{player} has {walls} walls, more than the allowed {max}")]
    TooManyWalls { player: PlayerId, walls: u8, max: u8 },
    #[error("reachability cache does not match the board")]
    StaleReachability,
    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        SnapshotError::Encoding(err.to_string())
    }
}

/// Structural snapshot of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Board layers, `[channel][x][y]`.
    pub board: Vec<Vec<Vec<u8>>>,

    /// Walls left, agent 0 first.
    pub walls_remaining: [u8; 2],

    /// Per agent and cell: `[distance, direction]`.
    #[serde(alias = "memory_cells")]
    pub reachability: Vec<Vec<Vec<[u32; 2]>>>,

    /// Whether the game has ended.
    pub done: bool,
}

impl StateSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode the binary encoding produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> StateSnapshot {
        StateSnapshot {
            board: vec![vec![vec![0, 1], vec![0, 0]]; 6],
            walls_remaining: [3, 2],
            reachability: vec![vec![vec![[0, 2], [UNREACHABLE, 0]]; 2]; 2],
            done: false,
        }
    }

    #[test]
    fn test_bytes_roundtrip() {
        let snapshot = tiny();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(StateSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            StateSnapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Encoding(_))
        ));
    }

    #[test]
    fn test_json_accepts_legacy_field_name() {
        let json = r#"{
            "board": [],
            "walls_remaining": [10, 10],
            "memory_cells": [],
            "done": true
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();

        assert!(snapshot.done);
        assert!(snapshot.reachability.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = tiny();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
