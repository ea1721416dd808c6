//! Step failures.

use thiserror::Error;

use crate::core::{ActionKind, Coord, PlayerId};

/// Why an action was rejected. The state it was tried against is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum StepError {
    /// Coordinate outside the valid range for the action kind.
    #[error("{0} is outside the valid range")]
    OutOfBounds(Coord),

    /// Destination cell, wall slot or rotated wall position already taken.
    #[error("{0} is occupied")]
    Occupied(Coord),

    /// Destination not reachable by a step or a jump.
    #[error("cannot move to {0}")]
    IllegalMove(Coord),

    /// The acting agent has no walls left.
    #[error("{0} has no walls remaining")]
    NoWallsRemaining(PlayerId),

    /// The action would cut an agent off from its goal row.
    #[error("{0} would cut an agent off from its goal")]
    PathBlocked(Coord),

    /// The game has already finished.
    #[error("the game is over")]
    GameOver,

    /// The action kind is not part of this variant.
    #[error("{0:?} is not available in this variant")]
    UnsupportedAction(ActionKind),

    /// Not one of the two agents.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}
