//! Game state: board, wall counters, reachability cache and terminal flag.
//!
//! A `GameState` is an immutable value. The step engine consumes a borrowed
//! state and returns a brand-new one; nothing hands out mutable access to a
//! state that already exists, so any number of candidate actions can be
//! probed against the same state.

use crate::reach::ReachabilityMap;

use super::board::Board;
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use super::snapshot::{SnapshotError, StateSnapshot};

/// Whether the game can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Done,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    walls_remaining: PlayerMap<u8>,
    reachability: ReachabilityMap,
    done: bool,
}

impl GameState {
    /// Starting state for `config`: centered agents, full wall allowance,
    /// empty wall layers. Meant for configs that pass
    /// [`GameConfig::validate`]; other sizes build without panicking but
    /// describe no playable game.
    #[must_use]
    pub fn initial(config: &GameConfig) -> Self {
        Self::from_parts(
            Board::new(config.board_size),
            PlayerMap::with_value(config.max_walls),
            false,
        )
    }

    /// Assemble a state, rebuilding the reachability cache from `board`.
    #[must_use]
    pub fn from_parts(board: Board, walls_remaining: PlayerMap<u8>, done: bool) -> Self {
        let reachability = ReachabilityMap::compute(&board);
        Self {
            board,
            walls_remaining,
            reachability,
            done,
        }
    }

    /// Assemble a state from a board and a cache already computed for it.
    pub(crate) fn with_reachability(
        board: Board,
        walls_remaining: PlayerMap<u8>,
        reachability: ReachabilityMap,
        done: bool,
    ) -> Self {
        Self {
            board,
            walls_remaining,
            reachability,
            done,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn walls_remaining(&self, player: PlayerId) -> u8 {
        self.walls_remaining[player]
    }

    #[must_use]
    pub fn walls(&self) -> PlayerMap<u8> {
        self.walls_remaining
    }

    #[must_use]
    pub fn reachability(&self) -> &ReachabilityMap {
        &self.reachability
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.done {
            GameStatus::Done
        } else {
            GameStatus::InProgress
        }
    }

    /// Agent standing on its goal row, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let size = self.board.size();
        PlayerId::all().find(|&p| self.board.position(p).y == p.goal_row(size) as i32)
    }

    /// Steps `player` needs to reach its goal row, ignoring the opponent.
    #[must_use]
    pub fn distance_to_goal(&self, player: PlayerId) -> Option<u32> {
        self.reachability
            .field(player)
            .distance(self.board.position(player))
    }

    /// The board seen from `player`'s side.
    #[must_use]
    pub fn perspective(&self, player: PlayerId) -> Board {
        self.board.perspective(player)
    }

    // === Snapshots ===

    /// Primitive-only copy of this state.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            board: self.board.layers(),
            walls_remaining: *self.walls_remaining.as_array(),
            reachability: self.reachability.encode(),
            done: self.done,
        }
    }

    /// Rebuild a state from a snapshot.
    ///
    /// The board is validated, the wall counters are checked against
    /// `config`, and the reachability cache is recomputed and must match the
    /// one in the snapshot.
    pub fn from_snapshot(
        snapshot: &StateSnapshot,
        config: &GameConfig,
    ) -> Result<Self, SnapshotError> {
        let board = Board::from_layers(&snapshot.board)?;
        if board.size() != config.board_size {
            return Err(SnapshotError::Shape("board size differs from the configuration"));
        }
        let walls_remaining = PlayerMap::from_array(snapshot.walls_remaining);
        for (player, &walls) in walls_remaining.iter() {
            if walls > config.max_walls {
                return Err(SnapshotError::TooManyWalls {
                    player,
                    walls,
                    max: config.max_walls,
                });
            }
        }

        let state = Self::from_parts(board, walls_remaining, snapshot.done);
        if state.reachability.encode() != snapshot.reachability {
            return Err(SnapshotError::StaleReachability);
        }
        Ok(state)
    }
}
