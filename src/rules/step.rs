//! The step engine: validate one action and build the successor state.
//!
//! ## Move rules
//!
//! From its cell an agent may
//! - step to an orthogonal neighbour when no wall is in the way,
//! - jump straight over an adjacent opponent when nothing blocks the far side,
//! - jump diagonally around an adjacent opponent when the straight jump is
//!   blocked by a wall or the board edge.
//!
//! ## Wall changes
//!
//! Placements and rotations are built on a scratch copy of the board. The
//! copy is only kept if both agents can still reach their goal rows, so a
//! failed step never leaks a half-applied board.

use smallvec::SmallVec;

use crate::core::{
    Action, ActionKind, Board, Coord, Direction, GameConfig, GameState, Orientation, PlayerId,
    SECTION_SIDE,
};
use crate::reach::ReachabilityMap;

use super::error::StepError;

/// Apply `action` for `player`, returning the successor state.
///
/// The engine does not track turn order; callers alternate agents.
///
/// ## Example
///
/// ```
/// use rust_fights::core::{Action, Coord, GameConfig, GameState, PlayerId};
/// use rust_fights::rules::{step, StepError};
///
/// let config = GameConfig::quoridor();
/// let state = GameState::initial(&config);
///
/// let agent = PlayerId::new(0);
/// let next = step(&config, &state, agent, Action::Move { to: Coord::new(4, 1) }).unwrap();
/// assert_eq!(next.board().position(PlayerId::new(0)), Coord::new(4, 1));
///
/// let err = step(&config, &state, PlayerId::new(0), Action::Move { to: Coord::new(4, 2) });
/// assert_eq!(err, Err(StepError::IllegalMove(Coord::new(4, 2))));
/// ```
pub fn step(
    config: &GameConfig,
    state: &GameState,
    player: PlayerId,
    action: Action,
) -> Result<GameState, StepError> {
    if !player.is_valid() {
        return Err(StepError::UnknownPlayer(player));
    }
    if state.is_done() {
        return Err(StepError::GameOver);
    }

    match action {
        Action::Move { to } => apply_move(state, player, to),
        Action::PlaceHorizontalWall { anchor } => {
            place_wall(state, player, Orientation::Horizontal, anchor)
        }
        Action::PlaceVerticalWall { anchor } => {
            place_wall(state, player, Orientation::Vertical, anchor)
        }
        Action::RotateSection { anchor } => {
            if !config.allows_rotation() {
                return Err(StepError::UnsupportedAction(ActionKind::RotateSection));
            }
            rotate_section(state, player, anchor)
        }
    }
}

// === Moves ===

/// Cells `player` can move to on `board`: plain steps, straight jumps and
/// diagonal jumps.
#[must_use]
pub fn move_destinations(board: &Board, player: PlayerId) -> SmallVec<[Coord; 6]> {
    let from = board.position(player);
    let opponent = board.position(player.opponent());
    let mut out = SmallVec::new();

    for direction in Direction::ALL {
        if board.is_blocked(from, direction) {
            continue;
        }
        let next = from.step(direction);
        if next != opponent {
            out.push(next);
        } else if board.can_step(opponent, direction) {
            out.push(opponent.step(direction));
        } else {
            for side in direction.perpendicular() {
                if board.can_step(opponent, side) {
                    out.push(opponent.step(side));
                }
            }
        }
    }

    out
}

/// Check a move without building the successor.
pub fn validate_move(board: &Board, player: PlayerId, to: Coord) -> Result<(), StepError> {
    if !to.within(board.size()) {
        return Err(StepError::OutOfBounds(to));
    }
    if board.occupant(to).is_some() {
        return Err(StepError::Occupied(to));
    }
    if move_destinations(board, player).contains(&to) {
        Ok(())
    } else {
        Err(StepError::IllegalMove(to))
    }
}

fn apply_move(state: &GameState, player: PlayerId, to: Coord) -> Result<GameState, StepError> {
    validate_move(state.board(), player, to)?;

    let mut board = state.board().clone();
    board.move_agent(player, to);
    let done = to.y == player.goal_row(board.size()) as i32;
    Ok(GameState::from_parts(board, state.walls(), done))
}

// === Walls ===

/// Local checks for a wall placement: range, allowance, free slot.
pub(crate) fn check_wall_slot(
    state: &GameState,
    player: PlayerId,
    orientation: Orientation,
    anchor: Coord,
) -> Result<(), StepError> {
    let board = state.board();
    if !anchor.within(board.size().saturating_sub(1)) {
        return Err(StepError::OutOfBounds(anchor));
    }
    if state.walls_remaining(player) == 0 {
        return Err(StepError::NoWallsRemaining(player));
    }
    if !board.wall_slot_free(orientation, anchor) {
        return Err(StepError::Occupied(anchor));
    }
    Ok(())
}

fn place_wall(
    state: &GameState,
    player: PlayerId,
    orientation: Orientation,
    anchor: Coord,
) -> Result<GameState, StepError> {
    check_wall_slot(state, player, orientation, anchor)?;

    let mut board = state.board().clone();
    board.set_wall(orientation, anchor, player);
    commit_walls(state, player, board, anchor)
}

/// Local checks for a rotation; yields the rotated board.
pub(crate) fn rotated_board(
    state: &GameState,
    player: PlayerId,
    anchor: Coord,
) -> Result<Board, StepError> {
    let board = state.board();
    if !anchor.within(board.size().saturating_sub(SECTION_SIDE - 1)) {
        return Err(StepError::OutOfBounds(anchor));
    }
    if state.walls_remaining(player) == 0 {
        return Err(StepError::NoWallsRemaining(player));
    }
    board.rotated_section(anchor).ok_or(StepError::Occupied(anchor))
}

fn rotate_section(
    state: &GameState,
    player: PlayerId,
    anchor: Coord,
) -> Result<GameState, StepError> {
    let board = rotated_board(state, player, anchor)?;
    commit_walls(state, player, board, anchor)
}

/// Keep a changed wall layout if both agents still reach their goals.
fn commit_walls(
    state: &GameState,
    player: PlayerId,
    board: Board,
    anchor: Coord,
) -> Result<GameState, StepError> {
    let reachability = ReachabilityMap::compute(&board);
    if !reachability.connects(&board) {
        return Err(StepError::PathBlocked(anchor));
    }

    let mut walls = state.walls();
    walls[player] -= 1;
    Ok(GameState::with_reachability(board, walls, reachability, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerMap;

    fn hwall(x: i32, y: i32) -> Action {
        Action::PlaceHorizontalWall { anchor: Coord::new(x, y) }
    }

    fn vwall(x: i32, y: i32) -> Action {
        Action::PlaceVerticalWall { anchor: Coord::new(x, y) }
    }

    fn rotate(x: i32, y: i32) -> Action {
        Action::RotateSection { anchor: Coord::new(x, y) }
    }

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    fn state_with(size: usize, a: Coord, b: Coord) -> GameState {
        let board = Board::with_positions(size, PlayerMap::from_array([a, b])).unwrap();
        GameState::from_parts(board, PlayerMap::with_value(10), false)
    }

    #[test]
    fn test_plain_steps() {
        let board = Board::new(9);
        let mut moves = move_destinations(&board, p(0)).to_vec();
        moves.sort_by_key(|c| (c.x, c.y));

        assert_eq!(moves, vec![Coord::new(3, 0), Coord::new(4, 1), Coord::new(5, 0)]);
    }

    #[test]
    fn test_straight_jump() {
        let state = state_with(9, Coord::new(4, 3), Coord::new(4, 4));
        let moves = move_destinations(state.board(), p(0));

        assert!(moves.contains(&Coord::new(4, 5)));
        assert!(!moves.contains(&Coord::new(4, 4)));
        assert!(!moves.contains(&Coord::new(3, 4)));
    }

    #[test]
    fn test_diagonal_jump_when_wall_behind_opponent() {
        let mut state = state_with(9, Coord::new(4, 3), Coord::new(4, 4));
        let mut board = state.board().clone();
        board.set_wall(Orientation::Horizontal, Coord::new(4, 4), p(1));
        state = GameState::from_parts(board, state.walls(), false);

        let moves = move_destinations(state.board(), p(0));
        assert!(!moves.contains(&Coord::new(4, 5)));
        assert!(moves.contains(&Coord::new(3, 4)));
        assert!(moves.contains(&Coord::new(5, 4)));
    }

    #[test]
    fn test_diagonal_jump_at_board_edge() {
        // Opponent on the bottom row: the straight jump leaves the board.
        let state = state_with(5, Coord::new(2, 3), Coord::new(2, 4));
        let moves = move_destinations(state.board(), p(0));

        assert!(moves.contains(&Coord::new(1, 4)));
        assert!(moves.contains(&Coord::new(3, 4)));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn test_move_errors() {
        let config = GameConfig::quoridor();
        let state = state_with(9, Coord::new(4, 3), Coord::new(4, 4));

        let off = step(&config, &state, p(0), Action::Move { to: Coord::new(-1, 3) });
        assert_eq!(off, Err(StepError::OutOfBounds(Coord::new(-1, 3))));

        let onto = step(&config, &state, p(0), Action::Move { to: Coord::new(4, 4) });
        assert_eq!(onto, Err(StepError::Occupied(Coord::new(4, 4))));

        let stay = step(&config, &state, p(0), Action::Move { to: Coord::new(4, 3) });
        assert_eq!(stay, Err(StepError::Occupied(Coord::new(4, 3))));

        let far = step(&config, &state, p(0), Action::Move { to: Coord::new(0, 0) });
        assert_eq!(far, Err(StepError::IllegalMove(Coord::new(0, 0))));
    }

    #[test]
    fn test_move_reaching_goal_ends_game() {
        let config = GameConfig::quoridor();
        let state = state_with(9, Coord::new(0, 7), Coord::new(8, 8));

        let next = step(&config, &state, p(0), Action::Move { to: Coord::new(0, 8) }).unwrap();
        assert!(next.is_done());
        assert_eq!(next.winner(), Some(p(0)));

        let after = step(&config, &next, p(1), Action::Move { to: Coord::new(7, 8) });
        assert_eq!(after, Err(StepError::GameOver));
    }

    #[test]
    fn test_wall_placement_consumes_wall() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);

        let next = step(&config, &state, p(1), vwall(3, 5)).unwrap();
        assert_eq!(next.walls_remaining(p(1)), 9);
        assert_eq!(next.walls_remaining(p(0)), 10);
        assert_eq!(next.board().wall(Orientation::Vertical, Coord::new(3, 6)), Some(p(1)));
        assert!(!next.is_done());
        assert_eq!(state.board().walls().count(), 0);
    }

    #[test]
    fn test_wall_placement_errors() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);
        let placed = step(&config, &state, p(0), hwall(2, 3)).unwrap();

        let range = step(&config, &placed, p(1), hwall(8, 0));
        assert_eq!(range, Err(StepError::OutOfBounds(Coord::new(8, 0))));

        let overlap = step(&config, &placed, p(1), hwall(3, 3));
        assert_eq!(overlap, Err(StepError::Occupied(Coord::new(3, 3))));

        let crossing = step(&config, &placed, p(1), vwall(2, 3));
        assert_eq!(crossing, Err(StepError::Occupied(Coord::new(2, 3))));
    }

    #[test]
    fn test_no_walls_remaining() {
        let config = GameConfig::puoribor();
        let state = GameState::from_parts(Board::new(9), PlayerMap::from_array([0, 10]), false);

        let wall = step(&config, &state, p(0), hwall(0, 0));
        assert_eq!(wall, Err(StepError::NoWallsRemaining(p(0))));

        let turned = step(&config, &state, p(0), rotate(0, 0));
        assert_eq!(turned, Err(StepError::NoWallsRemaining(p(0))));
    }

    #[test]
    fn test_path_blocked_is_atomic() {
        let config = GameConfig::quoridor().with_board_size(5);
        let mut board = Board::new(5);
        // Agent 0 at (2, 0); close the left and right sides of its pocket.
        board.set_wall(Orientation::Vertical, Coord::new(0, 0), p(1));
        board.set_wall(Orientation::Vertical, Coord::new(2, 0), p(1));
        let state = GameState::from_parts(board, PlayerMap::with_value(10), false);
        let saved = state.clone();

        let sealed = step(&config, &state, p(1), hwall(1, 0));
        assert_eq!(sealed, Err(StepError::PathBlocked(Coord::new(1, 0))));
        assert_eq!(state, saved);
    }

    #[test]
    fn test_rotation_requires_puoribor() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);

        let result = step(&config, &state, p(0), rotate(0, 0));
        assert_eq!(result, Err(StepError::UnsupportedAction(ActionKind::RotateSection)));
    }

    #[test]
    fn test_rotation_turns_walls_and_costs_a_wall() {
        let config = GameConfig::puoribor();
        let state = GameState::initial(&config);
        let placed = step(&config, &state, p(0), hwall(2, 3)).unwrap();

        let turned = step(&config, &placed, p(1), rotate(2, 2)).unwrap();
        assert!(turned.board().midpoint(Orientation::Vertical, Coord::new(3, 2)));
        assert_eq!(turned.board().wall(Orientation::Vertical, Coord::new(3, 2)), Some(p(0)));
        assert_eq!(turned.walls_remaining(p(1)), 9);
    }

    #[test]
    fn test_rotation_range() {
        let config = GameConfig::puoribor();
        let state = GameState::initial(&config);

        assert!(step(&config, &state, p(0), rotate(5, 5)).is_ok());
        assert_eq!(
            step(&config, &state, p(0), rotate(6, 0)),
            Err(StepError::OutOfBounds(Coord::new(6, 0)))
        );
    }

    #[test]
    fn test_unknown_player() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);

        let result = step(&config, &state, p(2), Action::Move { to: Coord::new(4, 1) });
        assert_eq!(result, Err(StepError::UnknownPlayer(p(2))));
    }
}
