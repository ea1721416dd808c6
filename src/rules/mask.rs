//! Legal-action masks.
//!
//! A mask holds one `N×N` plane per action kind, indexed `[kind][x][y]`. Only
//! the placement range of each kind can ever be set; everything else stays
//! false.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionKind, Coord};

/// Boolean mask of shape `(kinds, size, size)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    kinds: usize,
    size: usize,
    bits: Vec<bool>,
}

impl ActionMask {
    /// All-false mask.
    #[must_use]
    pub fn new(kinds: usize, size: usize) -> Self {
        Self {
            kinds,
            size,
            bits: vec![false; kinds * size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// `(kinds, size, size)`.
    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        [self.kinds, self.size, self.size]
    }

    fn index(&self, kind: ActionKind, at: Coord) -> Option<usize> {
        if kind.index() >= self.kinds || !at.within(self.size) {
            return None;
        }
        Some((kind.index() * self.size + at.x as usize) * self.size + at.y as usize)
    }

    /// Whether the action `kind` at `at` is legal. Anything outside the mask
    /// is not.
    #[must_use]
    pub fn get(&self, kind: ActionKind, at: Coord) -> bool {
        self.index(kind, at).is_some_and(|i| self.bits[i])
    }

    #[must_use]
    pub fn contains(&self, action: Action) -> bool {
        self.get(action.kind(), action.coord())
    }

    pub(crate) fn set(&mut self, kind: ActionKind, at: Coord, legal: bool) {
        if let Some(i) = self.index(kind, at) {
            self.bits[i] = legal;
        }
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of legal actions of one kind.
    #[must_use]
    pub fn count_kind(&self, kind: ActionKind) -> usize {
        if kind.index() >= self.kinds {
            return 0;
        }
        let plane = self.size * self.size;
        self.bits[kind.index() * plane..(kind.index() + 1) * plane]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Legal actions in `[kind][x][y]` order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        let size = self.size;
        self.bits.iter().enumerate().filter(|&(_, &b)| b).filter_map(move |(i, _)| {
            let kind = ActionKind::from_index(i / (size * size))?;
            let rest = i % (size * size);
            Some(kind.at(Coord::new((rest / size) as i32, (rest % size) as i32)))
        })
    }

    /// Flat view in `[kind][x][y]` order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Nested `[kind][x][y]` copy.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<Vec<bool>>> {
        self.bits
            .chunks(self.size * self.size)
            .map(|plane| plane.chunks(self.size).map(<[bool]>::to_vec).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask_is_empty() {
        let mask = ActionMask::new(4, 9);

        assert_eq!(mask.shape(), [4, 9, 9]);
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.actions().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut mask = ActionMask::new(3, 5);
        mask.set(ActionKind::PlaceVerticalWall, Coord::new(1, 3), true);

        assert!(mask.get(ActionKind::PlaceVerticalWall, Coord::new(1, 3)));
        assert!(!mask.get(ActionKind::PlaceVerticalWall, Coord::new(3, 1)));
        assert!(mask.contains(Action::PlaceVerticalWall { anchor: Coord::new(1, 3) }));
        assert_eq!(mask.count_kind(ActionKind::PlaceVerticalWall), 1);
        assert_eq!(mask.count_kind(ActionKind::Move), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut mask = ActionMask::new(3, 5);
        mask.set(ActionKind::RotateSection, Coord::new(0, 0), true);
        mask.set(ActionKind::Move, Coord::new(5, 0), true);

        assert_eq!(mask.count(), 0);
        assert!(!mask.get(ActionKind::RotateSection, Coord::new(0, 0)));
        assert_eq!(mask.count_kind(ActionKind::RotateSection), 0);
    }

    #[test]
    fn test_actions_in_plane_order() {
        let mut mask = ActionMask::new(4, 5);
        mask.set(ActionKind::RotateSection, Coord::new(1, 1), true);
        mask.set(ActionKind::Move, Coord::new(2, 1), true);
        mask.set(ActionKind::Move, Coord::new(1, 2), true);

        let actions: Vec<_> = mask.actions().collect();
        assert_eq!(
            actions,
            vec![
                Action::Move { to: Coord::new(1, 2) },
                Action::Move { to: Coord::new(2, 1) },
                Action::RotateSection { anchor: Coord::new(1, 1) },
            ]
        );
    }

    #[test]
    fn test_to_nested_layout() {
        let mut mask = ActionMask::new(3, 5);
        mask.set(ActionKind::PlaceHorizontalWall, Coord::new(3, 1), true);

        let nested = mask.to_nested();
        assert_eq!(nested.len(), 3);
        assert_eq!(nested[1].len(), 5);
        assert_eq!(nested[1][3].len(), 5);
        assert!(nested[1][3][1]);
        assert_eq!(nested.iter().flatten().flatten().filter(|&&b| b).count(), 1);
    }
}
