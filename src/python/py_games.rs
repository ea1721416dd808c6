//! Environment bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, GameConfig, PlayerId};
use crate::games::WallGame;
use crate::rules::RulesEngine;

use super::py_core::{board_array, PyState};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn game_for(config: GameConfig) -> PyResult<WallGame> {
    WallGame::new(config).map_err(to_py_err)
}

/// Decode and apply `action`. `pre_step_fn(state, agent_id, action)` runs
/// first; `post_step_fn(next_state, agent_id, action)` only after success.
fn step(
    game: &WallGame,
    state: &PyState,
    agent_id: u8,
    action: [i32; 3],
    pre_step_fn: Option<&Bound<'_, PyAny>>,
    post_step_fn: Option<&Bound<'_, PyAny>>,
) -> PyResult<PyState> {
    let decoded = Action::decode(action).map_err(to_py_err)?;
    if let Some(hook) = pre_step_fn {
        hook.call1((state.clone(), agent_id, action.to_vec()))?;
    }
    let next = game
        .step(&state.0, PlayerId::new(agent_id), decoded)
        .map(PyState)
        .map_err(to_py_err)?;
    if let Some(hook) = post_step_fn {
        hook.call1((next.clone(), agent_id, action.to_vec()))?;
    }
    Ok(next)
}

fn legal_actions<'py>(
    py: Python<'py>,
    game: &WallGame,
    state: &PyState,
    agent_id: u8,
) -> PyResult<Bound<'py, PyArray3<bool>>> {
    let mask = game.legal_actions(&state.0, PlayerId::new(agent_id));
    PyArray1::from_vec_bound(py, mask.as_slice().to_vec()).reshape(mask.shape())
}

fn perspective<'py>(
    py: Python<'py>,
    state: &PyState,
    agent_id: u8,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let player = PlayerId::new(agent_id);
    if !player.is_valid() {
        return Err(PyValueError::new_err(format!("unknown agent {agent_id}")));
    }
    board_array(py, &state.0.perspective(player))
}

/// Python wrapper for Quoridor.
#[pyclass(name = "QuoridorEnv", frozen)]
pub struct PyQuoridorEnv {
    game: WallGame,
}

#[pymethods]
impl PyQuoridorEnv {
    #[new]
    #[pyo3(signature = (board_size = 9, max_walls = 10))]
    fn new(board_size: usize, max_walls: u8) -> PyResult<Self> {
        let config = GameConfig::quoridor().with_board_size(board_size).with_max_walls(max_walls);
        Ok(Self {
            game: game_for(config)?,
        })
    }

    /// `(name, version)` of these rules.
    #[getter]
    fn env_id(&self) -> (&'static str, u32) {
        let id = self.game.env_id();
        (id.name, id.version)
    }

    fn initialize_state(&self) -> PyState {
        PyState(self.game.initialize_state())
    }

    /// Apply `[kind, x, y]` for `agent_id`; raises `ValueError` if illegal.
    #[pyo3(signature = (state, agent_id, action, pre_step_fn = None, post_step_fn = None))]
    fn step(
        &self,
        state: &PyState,
        agent_id: u8,
        action: [i32; 3],
        pre_step_fn: Option<&Bound<'_, PyAny>>,
        post_step_fn: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<PyState> {
        step(&self.game, state, agent_id, action, pre_step_fn, post_step_fn)
    }

    /// Boolean mask of shape `(3, N, N)`.
    fn legal_actions<'py>(
        &self,
        py: Python<'py>,
        state: &PyState,
        agent_id: u8,
    ) -> PyResult<Bound<'py, PyArray3<bool>>> {
        legal_actions(py, &self.game, state, agent_id)
    }

    /// Board layers as seen by `agent_id`.
    fn perspective<'py>(
        &self,
        py: Python<'py>,
        state: &PyState,
        agent_id: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        perspective(py, state, agent_id)
    }
}

/// Python wrapper for Puoribor.
#[pyclass(name = "PuoriborEnv", frozen)]
pub struct PyPuoriborEnv {
    game: WallGame,
}

#[pymethods]
impl PyPuoriborEnv {
    #[new]
    #[pyo3(signature = (board_size = 9, max_walls = 10))]
    fn new(board_size: usize, max_walls: u8) -> PyResult<Self> {
        let config = GameConfig::puoribor().with_board_size(board_size).with_max_walls(max_walls);
        Ok(Self {
            game: game_for(config)?,
        })
    }

    /// `(name, version)` of these rules.
    #[getter]
    fn env_id(&self) -> (&'static str, u32) {
        let id = self.game.env_id();
        (id.name, id.version)
    }

    fn initialize_state(&self) -> PyState {
        PyState(self.game.initialize_state())
    }

    /// Apply `[kind, x, y]` for `agent_id`; raises `ValueError` if illegal.
    #[pyo3(signature = (state, agent_id, action, pre_step_fn = None, post_step_fn = None))]
    fn step(
        &self,
        state: &PyState,
        agent_id: u8,
        action: [i32; 3],
        pre_step_fn: Option<&Bound<'_, PyAny>>,
        post_step_fn: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<PyState> {
        step(&self.game, state, agent_id, action, pre_step_fn, post_step_fn)
    }

    /// Boolean mask of shape `(4, N, N)`.
    fn legal_actions<'py>(
        &self,
        py: Python<'py>,
        state: &PyState,
        agent_id: u8,
    ) -> PyResult<Bound<'py, PyArray3<bool>>> {
        legal_actions(py, &self.game, state, agent_id)
    }

    /// Board layers as seen by `agent_id`.
    fn perspective<'py>(
        &self,
        py: Python<'py>,
        state: &PyState,
        agent_id: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        perspective(py, state, agent_id)
    }
}
