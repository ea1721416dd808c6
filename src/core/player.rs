//! Agent identification and per-agent data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two agents. Agent 0 starts on the top
//! edge and races to the bottom row; agent 1 does the opposite.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`, used for wall counters,
//! token positions and reachability tables.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of agents in every wall game.
pub const PLAYER_COUNT: usize = 2;

/// Agent identifier.
///
/// Agent indices are 0-based: the first agent is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Agent 0, starting on the top edge.
    pub const FIRST: PlayerId = PlayerId(0);
    /// Agent 1, starting on the bottom edge.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this ID names one of the two agents.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < PLAYER_COUNT
    }

    /// The other agent.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Row this agent must reach to win on a board of side `size`.
    ///
    /// ```
    /// use rust_fights::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).goal_row(9), 8);
    /// assert_eq!(PlayerId::new(1).goal_row(9), 0);
    /// ```
    #[must_use]
    pub const fn goal_row(self, size: usize) -> usize {
        if self.0 == 0 {
            size.saturating_sub(1)
        } else {
            0
        }
    }

    /// Iterate over both agents.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_fights::core::{PlayerId, PlayerMap};
///
/// let mut walls: PlayerMap<u8> = PlayerMap::with_value(10);
/// walls[PlayerId::new(1)] -= 1;
///
/// assert_eq!(walls[PlayerId::new(0)], 10);
/// assert_eq!(walls[PlayerId::new(1)], 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a PlayerMap from explicit values, agent 0 first.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to an agent's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to an agent's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Both entries, swapped.
    #[must_use]
    pub fn swapped(self) -> Self {
        let [a, b] = self.data;
        Self { data: [b, a] }
    }

    /// Apply a function to both entries.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.map(f),
        }
    }

    /// Borrow the underlying array, agent 0 first.
    #[must_use]
    pub fn as_array(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Agent 0");
        assert!(p1.is_valid());
        assert!(!PlayerId::new(2).is_valid());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_goal_rows_are_opposite_edges() {
        assert_eq!(PlayerId::FIRST.goal_row(5), 4);
        assert_eq!(PlayerId::SECOND.goal_row(5), 0);
        assert_eq!(PlayerId::FIRST.goal_row(0), 0);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_swapped() {
        let map = PlayerMap::from_array([3, 7]).swapped();

        assert_eq!(map[PlayerId::new(0)], 7);
        assert_eq!(map[PlayerId::new(1)], 3);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        assert_eq!(map.as_array(), &[10, 20]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &0), (PlayerId::new(1), &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::from_array([10, 4]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
