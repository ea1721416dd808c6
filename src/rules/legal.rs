//! Legal action enumeration.
//!
//! Two enumerators that must agree bit for bit:
//!
//! - [`legal_actions_reference`] tries every `(kind, x, y)` through [`step`]
//!   and records which ones succeed. Slow, but it shares every rule with the
//!   step engine.
//! - [`legal_actions`] derives moves geometrically and runs the local wall
//!   checks directly. A wall change only needs a search when it cuts one of
//!   the cached shortest paths; otherwise the old path still leads home.

use rustc_hash::FxHashSet;

use crate::core::{
    ActionKind, Board, Coord, Edge, GameConfig, GameState, Orientation, PlayerId, PlayerMap,
};
use crate::reach::has_path;

use super::mask::ActionMask;
use super::step::{check_wall_slot, move_destinations, rotated_board, step};

/// Brute-force mask: one `step` per candidate action.
#[must_use]
pub fn legal_actions_reference(
    config: &GameConfig,
    state: &GameState,
    player: PlayerId,
) -> ActionMask {
    let board = state.board();
    let mut mask = ActionMask::new(config.action_kinds(), board.size());

    for kind in ActionKind::ALL.into_iter().take(config.action_kinds()) {
        for at in board.cells() {
            let legal = step(config, state, player, kind.at(at)).is_ok();
            mask.set(kind, at, legal);
        }
    }

    mask
}

/// Fast mask, identical to [`legal_actions_reference`].
#[must_use]
pub fn legal_actions(config: &GameConfig, state: &GameState, player: PlayerId) -> ActionMask {
    let board = state.board();
    let size = board.size();
    let mut mask = ActionMask::new(config.action_kinds(), size);
    if state.is_done() || !player.is_valid() {
        return mask;
    }

    for to in move_destinations(board, player) {
        mask.set(ActionKind::Move, to, true);
    }

    if state.walls_remaining(player) == 0 {
        return mask;
    }
    let paths = CachedPaths::new(state);

    for (kind, orientation) in [
        (ActionKind::PlaceHorizontalWall, Orientation::Horizontal),
        (ActionKind::PlaceVerticalWall, Orientation::Vertical),
    ] {
        for anchor in anchors(size.saturating_sub(1)) {
            if check_wall_slot(state, player, orientation, anchor).is_err() {
                continue;
            }
            let (dx, dy) = orientation.extent();
            let cut = [anchor, anchor.offset(dx, dy)]
                .into_iter()
                .any(|cell| paths.crosses(Edge { cell, orientation }));

            let legal = !cut || {
                let mut next = board.clone();
                next.set_wall(orientation, anchor, player);
                PlayerId::all().all(|p| has_path(&next, p))
            };
            mask.set(kind, anchor, legal);
        }
    }

    if config.allows_rotation() {
        for anchor in anchors(size.saturating_sub(3)) {
            let Ok(next) = rotated_board(state, player, anchor) else {
                continue;
            };
            let legal = PlayerId::all().all(|p| paths.still_open(&next, p) || has_path(&next, p));
            mask.set(ActionKind::RotateSection, anchor, legal);
        }
    }

    mask
}

/// Every anchor in `[0, limit)²`.
fn anchors(limit: usize) -> impl Iterator<Item = Coord> {
    let limit = limit as i32;
    (0..limit).flat_map(move |x| (0..limit).map(move |y| Coord::new(x, y)))
}

/// Edges on each agent's cached shortest path from its token to its goal.
///
/// `None` when the token has no cached path, which forces a search.
struct CachedPaths {
    edges: PlayerMap<Option<FxHashSet<Edge>>>,
}

impl CachedPaths {
    fn new(state: &GameState) -> Self {
        let board = state.board();
        let edges = PlayerMap::new(|p| {
            let field = state.reachability().field(p);
            let from = board.position(p);
            field
                .is_reachable(from)
                .then(|| field.path_edges(from).into_iter().collect())
        });
        Self { edges }
    }

    /// Whether a new wall on `edge` could cut a cached path.
    fn crosses(&self, edge: Edge) -> bool {
        self.edges
            .iter()
            .any(|(_, path)| path.as_ref().map_or(true, |edges| edges.contains(&edge)))
    }

    /// Whether `player`'s cached path is free of walls on `board`.
    fn still_open(&self, board: &Board, player: PlayerId) -> bool {
        self.edges[player]
            .as_ref()
            .is_some_and(|edges| edges.iter().all(|&edge| !board.is_edge_blocked(edge)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_initial_wall_planes_are_full() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);
        let mask = legal_actions(&config, &state, p(0));

        assert_eq!(mask.count_kind(ActionKind::PlaceHorizontalWall), 64);
        assert_eq!(mask.count_kind(ActionKind::PlaceVerticalWall), 64);
        assert_eq!(mask.count_kind(ActionKind::Move), 3);
        assert_eq!(mask, legal_actions_reference(&config, &state, p(0)));
    }

    #[test]
    fn test_initial_rotation_plane() {
        let config = GameConfig::puoribor();
        let state = GameState::initial(&config);
        let mask = legal_actions(&config, &state, p(1));

        assert_eq!(mask.shape(), [4, 9, 9]);
        assert_eq!(mask.count_kind(ActionKind::RotateSection), 36);
        assert!(!mask.get(ActionKind::RotateSection, Coord::new(6, 6)));
        assert_eq!(mask, legal_actions_reference(&config, &state, p(1)));
    }

    #[test]
    fn test_sealing_wall_is_masked_out() {
        let config = GameConfig::quoridor().with_board_size(5);
        let mut state = GameState::initial(&config);
        for action in [
            Action::PlaceVerticalWall { anchor: Coord::new(0, 0) },
            Action::PlaceVerticalWall { anchor: Coord::new(2, 0) },
        ] {
            state = step(&config, &state, p(1), action).unwrap();
        }

        let mask = legal_actions(&config, &state, p(1));
        assert!(!mask.get(ActionKind::PlaceHorizontalWall, Coord::new(1, 0)));
        assert!(!mask.get(ActionKind::PlaceHorizontalWall, Coord::new(1, 1)));
        assert!(mask.get(ActionKind::PlaceHorizontalWall, Coord::new(1, 2)));
        assert_eq!(mask, legal_actions_reference(&config, &state, p(1)));
    }

    #[test]
    fn test_done_state_has_no_actions() {
        let config = GameConfig::puoribor();
        let state = GameState::from_parts(Board::new(9), PlayerMap::with_value(10), true);

        assert_eq!(legal_actions(&config, &state, p(0)).count(), 0);
        assert_eq!(legal_actions_reference(&config, &state, p(0)).count(), 0);
    }

    #[test]
    fn test_unknown_player_has_no_actions() {
        let config = GameConfig::quoridor();
        let state = GameState::initial(&config);

        assert_eq!(legal_actions(&config, &state, p(3)).count(), 0);
        assert_eq!(legal_actions_reference(&config, &state, p(3)).count(), 0);
    }
}
