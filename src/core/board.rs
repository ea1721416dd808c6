//! Board model: token positions and wall layers.
//!
//! The board is exposed as six logical layers, indexed `[channel][x][y]`:
//!
//! | channel | contents |
//! |---------|----------|
//! | 0 | one-hot position of agent 0 |
//! | 1 | one-hot position of agent 1 |
//! | 2 | horizontal wall occupancy, labelled `1 + owner` |
//! | 3 | vertical wall occupancy, labelled `1 + owner` |
//! | 4 | one-hot horizontal wall midpoints |
//! | 5 | one-hot vertical wall midpoints |
//!
//! Internally positions are plain coordinates, so "exactly one token per
//! agent layer" holds by construction. A horizontal wall anchored at `(x, y)`
//! occupies `(x, y)` and `(x + 1, y)` and blocks the edge below those cells; a
//! vertical wall occupies `(x, y)` and `(x, y + 1)` and blocks the edge to
//! their right. The midpoint marker sits on the anchor.

use smallvec::SmallVec;

use super::geometry::{Coord, Direction, Edge, Orientation};
use super::player::{PlayerId, PlayerMap};
use super::snapshot::SnapshotError;

/// Number of logical layers.
pub const CHANNELS: usize = 6;

/// Side of a rotation section, in cells.
pub const SECTION_SIDE: usize = 4;

/// Midpoints per side inside a rotation section.
const SECTION_MIDPOINTS: i32 = SECTION_SIDE as i32 - 1;

/// Immutable-by-convention board value.
///
/// Mutating helpers are crate-private; the step engine always works on a
/// clone and hands out fresh boards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    positions: PlayerMap<Coord>,
    horizontal: Vec<Option<PlayerId>>,
    vertical: Vec<Option<PlayerId>>,
    horizontal_midpoints: Vec<bool>,
    vertical_midpoints: Vec<bool>,
}

impl Board {
    /// Starting layout: agents centered on opposite edges, no walls.
    ///
    /// ```
    /// use rust_fights::core::{Board, Coord, PlayerId};
    ///
    /// let board = Board::new(9);
    /// assert_eq!(board.position(PlayerId::new(0)), Coord::new(4, 0));
    /// assert_eq!(board.position(PlayerId::new(1)), Coord::new(4, 8));
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        let center = (size as i32 - 1) / 2;
        Self::empty(
            size,
            PlayerMap::from_array([Coord::new(center, 0), Coord::new(center, size as i32 - 1)]),
        )
    }

    /// Board with the given token positions and no walls.
    ///
    /// Returns `None` if a token is off-board or both share a cell.
    #[must_use]
    pub fn with_positions(size: usize, positions: PlayerMap<Coord>) -> Option<Self> {
        let [a, b] = *positions.as_array();
        if !a.within(size) || !b.within(size) || a == b {
            return None;
        }
        Some(Self::empty(size, positions))
    }

    fn empty(size: usize, positions: PlayerMap<Coord>) -> Self {
        let cells = size * size;
        Self {
            size,
            positions,
            horizontal: vec![None; cells],
            vertical: vec![None; cells],
            horizontal_midpoints: vec![false; cells],
            vertical_midpoints: vec![false; cells],
        }
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        c.x as usize * self.size + c.y as usize
    }

    // === Queries ===

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell holding an agent's token.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Coord {
        self.positions[player]
    }

    /// Agent standing on `cell`, if any.
    #[must_use]
    pub fn occupant(&self, cell: Coord) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.positions[p] == cell)
    }

    fn occupancy(&self, orientation: Orientation) -> &[Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn midpoints(&self, orientation: Orientation) -> &[bool] {
        match orientation {
            Orientation::Horizontal => &self.horizontal_midpoints,
            Orientation::Vertical => &self.vertical_midpoints,
        }
    }

    /// Owner of the wall occupying `cell` in the given layer.
    #[must_use]
    pub fn wall(&self, orientation: Orientation, cell: Coord) -> Option<PlayerId> {
        if !cell.within(self.size) {
            return None;
        }
        self.occupancy(orientation)[self.idx(cell)]
    }

    /// Whether a wall of `orientation` is anchored at `cell`.
    #[must_use]
    pub fn midpoint(&self, orientation: Orientation, cell: Coord) -> bool {
        cell.within(self.size) && self.midpoints(orientation)[self.idx(cell)]
    }

    /// Whether a wall sits on `edge`.
    #[must_use]
    pub fn is_edge_blocked(&self, edge: Edge) -> bool {
        self.wall(edge.orientation, edge.cell).is_some()
    }

    /// Whether leaving `from` in `direction` is impossible, either because
    /// of a wall or the board edge.
    #[must_use]
    pub fn is_blocked(&self, from: Coord, direction: Direction) -> bool {
        !from.step(direction).within(self.size)
            || self.is_edge_blocked(Edge::crossing(from, direction))
    }

    /// Whether a token may cross from `from` into its neighbour.
    #[must_use]
    pub fn can_step(&self, from: Coord, direction: Direction) -> bool {
        !self.is_blocked(from, direction)
    }

    /// Whether a wall of `orientation` could be anchored at `anchor`: inside
    /// the placement range, not overlapping a wall, not crossing one.
    #[must_use]
    pub fn wall_slot_free(&self, orientation: Orientation, anchor: Coord) -> bool {
        if !anchor.within(self.size - 1) {
            return false;
        }
        let (dx, dy) = orientation.extent();
        self.wall(orientation, anchor).is_none()
            && self.wall(orientation, anchor.offset(dx, dy)).is_none()
            && !self.midpoint(orientation.other(), anchor)
    }

    /// Every wall on the board as `(orientation, anchor, owner)`, ordered by
    /// orientation then anchor.
    pub fn walls(&self) -> impl Iterator<Item = (Orientation, Coord, PlayerId)> + '_ {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |orientation| {
                self.cells().filter_map(move |c| {
                    if self.midpoint(orientation, c) {
                        self.wall(orientation, c).map(|owner| (orientation, c, owner))
                    } else {
                        None
                    }
                })
            })
    }

    /// All cells in `[x][y]` order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let size = self.size as i32;
        (0..size).flat_map(move |x| (0..size).map(move |y| Coord::new(x, y)))
    }

    // === Mutation (crate-private) ===

    pub(crate) fn move_agent(&mut self, player: PlayerId, to: Coord) {
        self.positions[player] = to;
    }

    pub(crate) fn set_wall(&mut self, orientation: Orientation, anchor: Coord, owner: PlayerId) {
        self.write_wall(orientation, anchor, Some(owner));
    }

    pub(crate) fn clear_wall(&mut self, orientation: Orientation, anchor: Coord) {
        self.write_wall(orientation, anchor, None);
    }

    fn write_wall(&mut self, orientation: Orientation, anchor: Coord, owner: Option<PlayerId>) {
        let (dx, dy) = orientation.extent();
        let first = self.idx(anchor);
        let second = self.idx(anchor.offset(dx, dy));
        let (cells, midpoints) = match orientation {
            Orientation::Horizontal => (&mut self.horizontal, &mut self.horizontal_midpoints),
            Orientation::Vertical => (&mut self.vertical, &mut self.vertical_midpoints),
        };
        cells[first] = owner;
        cells[second] = owner;
        midpoints[first] = owner.is_some();
    }

    /// The board after rotating the section anchored at `anchor` by 90°
    /// clockwise.
    ///
    /// Every wall whose midpoint lies strictly inside the section turns with
    /// it and keeps its owner. Returns `None` if the section leaves the board
    /// or a turned wall would land on a wall anchored outside the section.
    #[must_use]
    pub fn rotated_section(&self, anchor: Coord) -> Option<Board> {
        if self.size < SECTION_SIDE || !anchor.within(self.size - SECTION_SIDE + 1) {
            return None;
        }

        let mut next = self.clone();
        let mut turned: SmallVec<[(Orientation, i32, i32, PlayerId); 9]> = SmallVec::new();

        for i in 0..SECTION_MIDPOINTS {
            for j in 0..SECTION_MIDPOINTS {
                let m = anchor.offset(i, j);
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if !self.midpoint(orientation, m) {
                        continue;
                    }
                    if let Some(owner) = self.wall(orientation, m) {
                        next.clear_wall(orientation, m);
                        turned.push((orientation, i, j, owner));
                    }
                }
            }
        }

        for (orientation, i, j, owner) in turned {
            let target = anchor.offset(SECTION_MIDPOINTS - 1 - j, i);
            let orientation = orientation.other();
            if !next.wall_slot_free(orientation, target) {
                return None;
            }
            next.set_wall(orientation, target, owner);
        }

        Some(next)
    }

    /// The board as seen by `player`.
    ///
    /// For agent 0 this is the board itself. For agent 1 the grid is rotated
    /// 180° so its goal edge is on top, the token layers are swapped so it
    /// sits in layer 0, and wall ownership labels are swapped. Applying the
    /// agent-1 perspective twice gives the original board back.
    #[must_use]
    pub fn perspective(&self, player: PlayerId) -> Board {
        if player == PlayerId::FIRST {
            return self.clone();
        }

        let size = self.size;
        let mut view = Self::empty(size, self.positions.map(|c| c.flipped(size)).swapped());

        // An anchor is the top/left half of its wall, so flipped anchors
        // shift back by one cell on both axes.
        for (orientation, anchor, owner) in self.walls() {
            view.set_wall(orientation, anchor.flipped(size).offset(-1, -1), owner.opponent());
        }

        view
    }

    // === Layer encoding ===

    /// Encode as `[channel][x][y]` small integers.
    #[must_use]
    pub fn layers(&self) -> Vec<Vec<Vec<u8>>> {
        let size = self.size;
        let mut layers = vec![vec![vec![0u8; size]; size]; CHANNELS];

        for (player, c) in self.positions.iter().filter(|(_, c)| c.within(size)) {
            layers[player.index()][c.x as usize][c.y as usize] = 1;
        }
        for c in self.cells() {
            let (x, y) = (c.x as usize, c.y as usize);
            let i = self.idx(c);
            layers[2][x][y] = self.horizontal[i].map_or(0, |p| p.0 + 1);
            layers[3][x][y] = self.vertical[i].map_or(0, |p| p.0 + 1);
            layers[4][x][y] = u8::from(self.horizontal_midpoints[i]);
            layers[5][x][y] = u8::from(self.vertical_midpoints[i]);
        }

        layers
    }

    /// Decode and validate a `[channel][x][y]` encoding.
    ///
    /// Wall occupancy must be exactly what the midpoint markers imply.
    pub fn from_layers(layers: &[Vec<Vec<u8>>]) -> Result<Board, SnapshotError> {
        if layers.len() != CHANNELS {
            return Err(SnapshotError::Shape("board must have 6 channels"));
        }
        let size = layers[0].len();
        let square = |l: &Vec<Vec<u8>>| l.len() == size && l.iter().all(|col| col.len() == size);
        if size == 0 || !layers.iter().all(square) {
            return Err(SnapshotError::Shape("board channels must be square and equal"));
        }

        let mut positions = PlayerMap::with_value(Coord::new(0, 0));
        for player in PlayerId::all() {
            let hits = one_hot_cells(&layers[player.index()])
                .map_err(|_| SnapshotError::AgentLayer(player))?;
            match hits.as_slice() {
                [c] => positions[player] = *c,
                _ => return Err(SnapshotError::AgentLayer(player)),
            }
        }
        let mut board =
            Board::with_positions(size, positions).ok_or(SnapshotError::AgentsOverlap)?;

        for (channel, orientation) in [(2, Orientation::Horizontal), (3, Orientation::Vertical)] {
            let midpoints = one_hot_cells(&layers[channel + 2])
                .map_err(|value| SnapshotError::Label { channel: channel + 2, value })?;
            for m in midpoints {
                let label = layers[channel][m.x as usize][m.y as usize];
                let owner = match label {
                    1 | 2 => PlayerId::new(label - 1),
                    _ => return Err(SnapshotError::InconsistentWalls(m)),
                };
                if !board.wall_slot_free(orientation, m) {
                    return Err(SnapshotError::InconsistentWalls(m));
                }
                board.set_wall(orientation, m, owner);
            }
        }

        let rebuilt = board.layers();
        for channel in [2, 3] {
            for c in board.cells() {
                let (x, y) = (c.x as usize, c.y as usize);
                let value = layers[channel][x][y];
                if value > 2 {
                    return Err(SnapshotError::Label { channel, value });
                }
                if value != rebuilt[channel][x][y] {
                    return Err(SnapshotError::InconsistentWalls(c));
                }
            }
        }

        Ok(board)
    }
}

/// Cells set to 1 in a one-hot layer; `Err(value)` on anything but 0/1.
fn one_hot_cells(layer: &[Vec<u8>]) -> Result<Vec<Coord>, u8> {
    let mut hits = Vec::new();
    for (x, column) in layer.iter().enumerate() {
        for (y, &value) in column.iter().enumerate() {
            match value {
                0 => {}
                1 => hits.push(Coord::new(x as i32, y as i32)),
                other => return Err(other),
            }
        }
    }
    Ok(hits)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size as i32;
        writeln!(f, "+{}", "---+".repeat(self.size))?;
        for y in 0..size {
            write!(f, "|")?;
            for x in 0..size {
                let c = Coord::new(x, y);
                match self.occupant(c) {
                    Some(p) => write!(f, " {} ", p.0)?,
                    None => write!(f, "   ")?,
                }
                if self.wall(Orientation::Vertical, c).is_some() {
                    write!(f, "#")?;
                } else if x == size - 1 {
                    write!(f, "|")?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            write!(f, "+")?;
            for x in 0..size {
                let c = Coord::new(x, y);
                if self.wall(Orientation::Horizontal, c).is_some() {
                    write!(f, "===")?;
                } else if y == size - 1 {
                    write!(f, "---")?;
                } else {
                    write!(f, "   ")?;
                }
                write!(f, "+")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
