//! State bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Board, GameConfig, GameState, PlayerId, StateSnapshot};

/// Board layers as a `(6, N, N)` uint8 array.
pub(crate) fn board_array<'py>(
    py: Python<'py>,
    board: &Board,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let size = board.size();
    let flat: Vec<u8> = board.layers().into_iter().flatten().flatten().collect();
    PyArray1::from_vec_bound(py, flat).reshape([crate::core::CHANNELS, size, size])
}

/// Python wrapper for GameState.
///
/// States are immutable; `step` returns a new one.
#[pyclass(name = "State", frozen)]
#[derive(Clone, Debug)]
pub struct PyState(pub GameState);

fn required<'py, T: FromPyObject<'py>>(data: &Bound<'py, PyDict>, keys: &[&str]) -> PyResult<T> {
    for key in keys {
        if let Some(value) = data.get_item(*key)? {
            return value.extract();
        }
    }
    Err(PyValueError::new_err(format!("missing key {:?}", keys[0])))
}

#[pymethods]
impl PyState {
    /// Whether the game has ended.
    #[getter]
    fn done(&self) -> bool {
        self.0.is_done()
    }

    /// Walls left, agent 0 first.
    #[getter]
    fn walls_remaining(&self) -> [u8; 2] {
        *self.0.walls().as_array()
    }

    /// Winning agent index, if the game has ended.
    #[getter]
    fn winner(&self) -> Option<u8> {
        if self.0.is_done() {
            self.0.winner().map(|p| p.0)
        } else {
            None
        }
    }

    /// Board layers as a numpy array.
    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<u8>>> {
        board_array(py, self.0.board())
    }

    /// Steps each agent needs to reach its goal row.
    fn distance_to_goal(&self, agent_id: u8) -> Option<u32> {
        let player = PlayerId::new(agent_id);
        if !player.is_valid() {
            return None;
        }
        self.0.distance_to_goal(player)
    }

    /// Primitive-only snapshot: `board`, `walls_remaining`, `reachability`,
    /// `done`.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let snapshot = self.0.to_snapshot();
        let dict = PyDict::new_bound(py);
        dict.set_item("board", snapshot.board)?;
        dict.set_item("walls_remaining", snapshot.walls_remaining)?;
        dict.set_item("reachability", snapshot.reachability)?;
        dict.set_item("done", snapshot.done)?;
        Ok(dict)
    }

    /// Rebuild a state from `to_dict` output.
    ///
    /// The board size is read from the snapshot; `max_walls` bounds the wall
    /// counters.
    #[staticmethod]
    #[pyo3(signature = (data, max_walls = 10))]
    fn from_dict(data: &Bound<'_, PyDict>, max_walls: u8) -> PyResult<Self> {
        let snapshot = StateSnapshot {
            board: required(data, &["board"])?,
            walls_remaining: required(data, &["walls_remaining"])?,
            reachability: required(data, &["reachability", "memory_cells"])?,
            done: required(data, &["done"])?,
        };
        let size = snapshot.board.first().map_or(0, Vec::len);
        let config = GameConfig::default().with_board_size(size).with_max_walls(max_walls);
        GameState::from_snapshot(&snapshot, &config)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __str__(&self) -> String {
        self.0.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "State(walls_remaining={:?}, done={})",
            self.0.walls().as_array(),
            self.0.is_done()
        )
    }
}
