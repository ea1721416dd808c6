//! Python bindings for the wall-game engines.
//!
//! # Quick Start
//!
//! ```python
//! import rust_fights as rf
//!
//! env = rf.PuoriborEnv()
//! state = env.initialize_state()
//!
//! mask = env.legal_actions(state, 0)          # numpy bool array (4, 9, 9)
//! state = env.step(state, 0, [0, 4, 1])       # move agent 0 to (4, 1)
//!
//! snapshot = state.to_dict()
//! restored = rf.State.from_dict(snapshot)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// rust_fights: Quoridor and Puoribor rule engines.
///
/// This module provides:
/// - `QuoridorEnv` / `PuoriborEnv`: step, legal-action masks, perspective
/// - `State`: immutable game state with dict round-trip
#[pymodule]
fn rust_fights(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyState>()?;
    m.add_class::<PyQuoridorEnv>()?;
    m.add_class::<PyPuoriborEnv>()?;

    Ok(())
}
