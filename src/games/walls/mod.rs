//! Quoridor and Puoribor.
//!
//! Two agents race their tokens to opposite edges of an odd-sized board while
//! placing walls in each other's way. No wall may ever leave an agent without
//! a route to its goal row.
//!
//! - Quoridor: move or place a wall
//! - Puoribor: additionally rotate a 4×4 section, turning every wall inside
//!   it by 90°
//!
//! Both variants share one engine; `GameConfig::variant` picks the rules.

mod game;

pub use game::{WallGame, WallGameBuilder};
