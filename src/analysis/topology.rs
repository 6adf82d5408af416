//! Passage graph of a carved maze
//!
//! Treats every knocked-down interior wall as an undirected edge between the
//! two cells it separated. A maze is perfect when that graph is a spanning
//! tree: connected, acyclic, and with exactly one edge fewer than cells.

use bitvec::prelude::*;
use std::collections::VecDeque;

use crate::io::error::{MazeError, Result};
use crate::spatial::{Direction, Grid, Position};

/// Open connection between two orthogonally adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passage {
    /// The cell that owned the removed wall
    pub owner: Position,
    /// The neighbour on the other side
    pub neighbour: Position,
}

/// Edge list and adjacency of a maze's passages
#[derive(Debug, Clone)]
pub struct MazeTopology {
    passages: Vec<Passage>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    boundary_breaks: usize,
    first_unreachable: Option<Position>,
}

impl MazeTopology {
    /// Collect every removed wall of `grid`
    ///
    /// A cleared left wall in column 0 or a cleared top wall in the last row
    /// has no neighbour behind it; such flags are counted separately as
    /// boundary breaks.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut topology = Self {
            passages: Vec::new(),
            adjacency: vec![Vec::new(); grid.len()],
            edges: Vec::new(),
            boundary_breaks: 0,
            first_unreachable: None,
        };

        for cell in grid.iter() {
            let owner = cell.position();
            let cleared = usize::from(!cell.is_left_wall()) + usize::from(!cell.is_top_wall());
            let mut linked = 0;

            for neighbour in grid.neighbours(owner) {
                let is_open = match owner.direction_to(neighbour) {
                    Some(Direction::Left) => !cell.is_left_wall(),
                    Some(Direction::Up) => !cell.is_top_wall(),
                    _ => false,
                };
                if !is_open {
                    continue;
                }
                if let (Some(a), Some(b)) = (grid.linear_index(owner), grid.linear_index(neighbour))
                {
                    topology.add_passage(owner, neighbour, a, b);
                    linked += 1;
                }
            }

            topology.boundary_breaks += cleared - linked;
        }

        topology.first_unreachable = topology
            .reachable_from(0)
            .first_zero()
            .and_then(|index| grid.position_of(index));

        topology
    }

    fn add_passage(&mut self, owner: Position, neighbour: Position, a: usize, b: usize) {
        self.passages.push(Passage { owner, neighbour });
        self.edges.push((a, b));
        if let Some(list) = self.adjacency.get_mut(a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.push(a);
        }
    }

    /// All interior passages in grid storage order
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    /// Number of cells in the analysed grid
    pub fn cell_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total wall flags cleared, interior and boundary
    pub fn broken_walls(&self) -> usize {
        self.passages.len() + self.boundary_breaks
    }

    /// Cleared wall flags that faced the outside of the grid
    pub const fn boundary_breaks(&self) -> usize {
        self.boundary_breaks
    }

    /// First cell, in row-major order, that the origin cannot reach
    pub const fn first_unreachable(&self) -> Option<Position> {
        self.first_unreachable
    }

    /// Cells reachable from `start_index` through passages
    pub fn reachable_from(&self, start_index: usize) -> BitVec {
        let mut seen = bitvec![0; self.cell_count()];
        if start_index >= self.cell_count() {
            return seen;
        }

        let mut queue = VecDeque::from([start_index]);
        seen.set(start_index, true);

        while let Some(index) = queue.pop_front() {
            for &next in self.adjacency.get(index).map_or(&[][..], Vec::as_slice) {
                if seen.get(next).as_deref() == Some(&false) {
                    seen.set(next, true);
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Whether every cell can reach every other cell
    pub const fn is_connected(&self) -> bool {
        self.first_unreachable.is_none()
    }

    /// Whether the passages contain no loop
    pub fn is_acyclic(&self) -> bool {
        let mut parent: Vec<usize> = (0..self.cell_count()).collect();

        for &(a, b) in &self.edges {
            let (root_a, root_b) = (find_root(&mut parent, a), find_root(&mut parent, b));
            if root_a == root_b {
                return false;
            }
            if let Some(slot) = parent.get_mut(root_a) {
                *slot = root_b;
            }
        }
        true
    }

    /// Whether the passages form a spanning tree with no boundary breaks
    pub fn is_perfect(&self) -> bool {
        self.boundary_breaks == 0
            && self.passages.len() + 1 == self.cell_count().max(1)
            && self.is_connected()
            && self.is_acyclic()
    }

    /// Check the spanning tree property, naming the first violation
    ///
    /// # Errors
    ///
    /// Returns `MazeError::InvalidMaze` describing which property failed
    pub fn verify(&self) -> Result<()> {
        let expected = self.cell_count().saturating_sub(1);
        let reason = if self.boundary_breaks > 0 {
            format!("{} outer walls were removed", self.boundary_breaks)
        } else if self.passages.len() != expected {
            format!(
                "{} passages for {} cells, expected {expected}",
                self.passages.len(),
                self.cell_count()
            )
        } else if let Some(position) = self.first_unreachable() {
            format!("cell {position} is unreachable from {}", Position::ORIGIN)
        } else if !self.is_acyclic() {
            "passages form a loop".to_string()
        } else {
            return Ok(());
        };
        Err(MazeError::InvalidMaze { reason })
    }
}

// Union-find lookup with path halving
fn find_root(parent: &mut [usize], mut index: usize) -> usize {
    while let Some(&up) = parent.get(index) {
        if up == index {
            break;
        }
        let grand = parent.get(up).copied().unwrap_or(up);
        if let Some(slot) = parent.get_mut(index) {
            *slot = grand;
        }
        index = grand;
    }
    index
}
