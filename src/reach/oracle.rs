//! Distance fields and connectivity checks.

use std::collections::VecDeque;

use crate::core::{Board, Coord, Direction, Edge, PlayerId, PlayerMap, UNREACHABLE};

/// Distance to the goal row and the first step of a shortest path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathCell {
    pub distance: u32,
    pub direction: Direction,
}

/// Shortest-path table for one agent.
///
/// Cells on the goal row have distance 0 and point off the board towards
/// the goal edge. Cells never reached by the search hold `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DistanceField {
    size: usize,
    cells: Vec<Option<PathCell>>,
}

impl DistanceField {
    /// Run the search for `player` on `board`.
    ///
    /// Goal cells are seeded left to right and neighbours expanded in
    /// up, right, down, left order; the first discovery of a cell wins.
    #[must_use]
    pub fn compute(board: &Board, player: PlayerId) -> Self {
        let size = board.size();
        let idx = |c: Coord| c.x as usize * size + c.y as usize;
        let mut cells: Vec<Option<PathCell>> = vec![None; size * size];
        let mut queue = VecDeque::with_capacity(size * size);

        let goal = player.goal_row(size) as i32;
        let exit = if player == PlayerId::FIRST {
            Direction::Down
        } else {
            Direction::Up
        };
        for x in 0..size as i32 {
            let c = Coord::new(x, goal);
            cells[idx(c)] = Some(PathCell {
                distance: 0,
                direction: exit,
            });
            queue.push_back((c, 0u32));
        }

        while let Some((here, distance)) = queue.pop_front() {
            for direction in Direction::ALL {
                if board.is_blocked(here, direction) {
                    continue;
                }
                let there = here.step(direction);
                let slot = &mut cells[idx(there)];
                if slot.is_some() {
                    continue;
                }
                *slot = Some(PathCell {
                    distance: distance + 1,
                    direction: direction.opposite(),
                });
                queue.push_back((there, distance + 1));
            }
        }

        Self { size, cells }
    }

    #[must_use]
    pub fn get(&self, cell: Coord) -> Option<PathCell> {
        if !cell.within(self.size) {
            return None;
        }
        self.cells[cell.x as usize * self.size + cell.y as usize]
    }

    /// Steps to the goal row, `None` if it cannot be reached.
    #[must_use]
    pub fn distance(&self, cell: Coord) -> Option<u32> {
        self.get(cell).map(|p| p.distance)
    }

    #[must_use]
    pub fn is_reachable(&self, cell: Coord) -> bool {
        self.get(cell).is_some()
    }

    /// Edges crossed by following the stored directions from `from` to the
    /// goal row. Empty for goal cells and unreachable cells.
    #[must_use]
    pub fn path_edges(&self, from: Coord) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut here = from;
        while let Some(cell) = self.get(here) {
            if cell.distance == 0 {
                break;
            }
            edges.push(Edge::crossing(here, cell.direction));
            here = here.step(cell.direction);
        }
        edges
    }

    /// Encode as `[x][y] -> [distance, direction]`.
    #[must_use]
    pub fn encode(&self) -> Vec<Vec<[u32; 2]>> {
        (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| match self.cells[x * self.size + y] {
                        Some(p) => [p.distance, u32::from(p.direction.index())],
                        None => [UNREACHABLE, 0],
                    })
                    .collect()
            })
            .collect()
    }
}

/// Distance fields for both agents, rebuilt from the board after every
/// successful transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReachabilityMap {
    fields: PlayerMap<DistanceField>,
}

impl ReachabilityMap {
    #[must_use]
    pub fn compute(board: &Board) -> Self {
        Self {
            fields: PlayerMap::new(|player| DistanceField::compute(board, player)),
        }
    }

    #[must_use]
    pub fn field(&self, player: PlayerId) -> &DistanceField {
        &self.fields[player]
    }

    /// Whether both agents can still reach their goal rows on `board`.
    #[must_use]
    pub fn connects(&self, board: &Board) -> bool {
        PlayerId::all().all(|p| self.fields[p].is_reachable(board.position(p)))
    }

    /// Encode as `[agent][x][y] -> [distance, direction]`.
    #[must_use]
    pub fn encode(&self) -> Vec<Vec<Vec<[u32; 2]>>> {
        PlayerId::all().map(|p| self.fields[p].encode()).collect()
    }
}

/// Whether `player`'s token can reach its goal row.
///
/// Searches outward from the token and stops at the first goal cell, so it
/// is usually much cheaper than a full `DistanceField`.
#[must_use]
pub fn has_path(board: &Board, player: PlayerId) -> bool {
    let size = board.size();
    let goal = player.goal_row(size) as i32;
    let start = board.position(player);
    if start.y == goal {
        return true;
    }

    let idx = |c: Coord| c.x as usize * size + c.y as usize;
    let mut seen = vec![false; size * size];
    let mut stack = vec![start];
    seen[idx(start)] = true;

    while let Some(here) = stack.pop() {
        for direction in Direction::ALL {
            if board.is_blocked(here, direction) {
                continue;
            }
            let there = here.step(direction);
            if there.y == goal {
                return true;
            }
            if !seen[idx(there)] {
                seen[idx(there)] = true;
                stack.push(there);
            }
        }
    }
    false
}
