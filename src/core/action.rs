//! Action representation.
//!
//! Every action names exactly the coordinate it needs:
//! - `Move`: destination cell
//! - `PlaceHorizontalWall` / `PlaceVerticalWall`: top/left anchor of the wall
//! - `RotateSection`: top-left anchor of the 4×4 section
//!
//! On the wire actions are `[kind, x, y]` with `kind` in `0..4`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Coord;

/// Action kind, doubling as the plane index in the legal-action mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move = 0,
    PlaceHorizontalWall = 1,
    PlaceVerticalWall = 2,
    RotateSection = 3,
}

impl ActionKind {
    /// All kinds in plane order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Move,
        ActionKind::PlaceHorizontalWall,
        ActionKind::PlaceVerticalWall,
        ActionKind::RotateSection,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ActionKind::Move),
            1 => Some(ActionKind::PlaceHorizontalWall),
            2 => Some(ActionKind::PlaceVerticalWall),
            3 => Some(ActionKind::RotateSection),
            _ => None,
        }
    }

    /// Build the action of this kind at `at`.
    #[must_use]
    pub const fn at(self, at: Coord) -> Action {
        match self {
            ActionKind::Move => Action::Move { to: at },
            ActionKind::PlaceHorizontalWall => Action::PlaceHorizontalWall { anchor: at },
            ActionKind::PlaceVerticalWall => Action::PlaceVerticalWall { anchor: at },
            ActionKind::RotateSection => Action::RotateSection { anchor: at },
        }
    }
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use rust_fights::core::{Action, ActionKind, Coord};
///
/// let wall = Action::PlaceHorizontalWall { anchor: Coord::new(2, 3) };
/// assert_eq!(wall.kind(), ActionKind::PlaceHorizontalWall);
/// assert_eq!(wall.encode(), [1, 2, 3]);
/// assert_eq!(Action::decode([1, 2, 3]), Ok(wall));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the token to `to`, stepping or jumping.
    Move { to: Coord },
    /// Place a horizontal wall whose left half sits at `anchor`.
    PlaceHorizontalWall { anchor: Coord },
    /// Place a vertical wall whose top half sits at `anchor`.
    PlaceVerticalWall { anchor: Coord },
    /// Rotate the 4×4 section whose top-left cell is `anchor`.
    RotateSection { anchor: Coord },
}

/// Raw action triple that does not name an action kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown action kind {0}")]
pub struct ActionDecodeError(pub i32);

impl Action {
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::PlaceHorizontalWall { .. } => ActionKind::PlaceHorizontalWall,
            Action::PlaceVerticalWall { .. } => ActionKind::PlaceVerticalWall,
            Action::RotateSection { .. } => ActionKind::RotateSection,
        }
    }

    /// The coordinate carried by the action.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        match *self {
            Action::Move { to } => to,
            Action::PlaceHorizontalWall { anchor }
            | Action::PlaceVerticalWall { anchor }
            | Action::RotateSection { anchor } => anchor,
        }
    }

    /// Encode as `[kind, x, y]`.
    #[must_use]
    pub const fn encode(&self) -> [i32; 3] {
        let c = self.coord();
        [self.kind().index() as i32, c.x, c.y]
    }

    /// Decode from `[kind, x, y]`.
    ///
    /// Coordinates are not range checked here; the step engine reports
    /// out-of-range anchors as `OutOfBounds`.
    pub fn decode(raw: [i32; 3]) -> Result<Self, ActionDecodeError> {
        let [kind, x, y] = raw;
        let kind = usize::try_from(kind)
            .ok()
            .and_then(ActionKind::from_index)
            .ok_or(ActionDecodeError(kind))?;
        Ok(kind.at(Coord::new(x, y)))
    }
}

impl TryFrom<[i32; 3]> for Action {
    type Error = ActionDecodeError;

    fn try_from(raw: [i32; 3]) -> Result<Self, Self::Error> {
        Self::decode(raw)
    }
}

impl From<Action> for [i32; 3] {
    fn from(action: Action) -> Self {
        action.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_coord() {
        let action = Action::Move { to: Coord::new(4, 1) };

        assert_eq!(action.kind(), ActionKind::Move);
        assert_eq!(action.coord(), Coord::new(4, 1));
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        assert_eq!(Action::decode([4, 0, 0]), Err(ActionDecodeError(4)));
        assert_eq!(Action::decode([-1, 0, 0]), Err(ActionDecodeError(-1)));
    }

    #[test]
    fn test_decode_keeps_raw_coordinates() {
        let action = Action::try_from([3, -2, 11]).unwrap();
        assert_eq!(action, Action::RotateSection { anchor: Coord::new(-2, 11) });
    }

    #[test]
    fn test_kind_at_matches_index() {
        for kind in ActionKind::ALL {
            let action = kind.at(Coord::new(1, 2));
            assert_eq!(action.kind(), kind);
            assert_eq!(ActionKind::from_index(kind.index()), Some(kind));
            assert_eq!(<[i32; 3]>::from(action), [kind.index() as i32, 1, 2]);
        }
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::RotateSection { anchor: Coord::new(2, 2) };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
