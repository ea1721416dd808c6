//! Concrete games built on the core engine.

pub mod walls;

pub use walls::{WallGame, WallGameBuilder};
