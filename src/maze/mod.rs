pub mod cell;
mod grid;

use std::collections::BTreeSet;

pub use cell::{Cell, Direction, Wall, are_contiguous, manhattan};
use grid::Grid;

use crate::error::{MazeError, Result};

/// A maze as an undirected graph over a `height` x `width` grid of cells.
///
/// Every cell maps to the set of contiguous cells it is connected to. A wall
/// is the absence of such a connection. The adjacency map is only mutated
/// through [`Maze::add_wall`] and [`Maze::remove_wall`], which always update
/// both endpoints, so the relation stays symmetric and only ever links
/// contiguous cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    neighbors: Grid<BTreeSet<Cell>>,
}

impl Maze {
    /// Creates a fully walled maze with the given height and width.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either side is zero or
    /// the cell count does not fit in a `usize`.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 || height.checked_mul(width).is_none() {
            return Err(MazeError::InvalidDimension { height, width });
        }
        Ok(Maze {
            neighbors: Grid::new(height, width, BTreeSet::new()),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.neighbors.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.neighbors.width()
    }

    /// Checks if the given cell is within the bounds of the maze.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.neighbors.contains(cell)
    }

    fn check_pair(&self, c1: Cell, c2: Cell) -> Result<()> {
        for cell in [c1, c2] {
            if !self.is_in_bounds(cell) {
                return Err(MazeError::InvalidCoordinate {
                    cell,
                    height: self.height(),
                    width: self.width(),
                });
            }
        }
        if !are_contiguous(c1, c2) {
            return Err(MazeError::NotContiguous { a: c1, b: c2 });
        }
        Ok(())
    }

    /// Puts a wall between two contiguous cells. Adding an existing wall is a no-op.
    pub fn add_wall(&mut self, c1: Cell, c2: Cell) -> Result<()> {
        self.check_pair(c1, c2)?;
        self.neighbors[c1].remove(&c2);
        self.neighbors[c2].remove(&c1);
        Ok(())
    }

    /// Removes the wall between two contiguous cells. Removing a missing wall is a no-op.
    pub fn remove_wall(&mut self, c1: Cell, c2: Cell) -> Result<()> {
        self.check_pair(c1, c2)?;
        self.neighbors[c1].insert(c2);
        self.neighbors[c2].insert(c1);
        Ok(())
    }

    /// Carves a passage that generators have already checked to be in bounds
    /// and contiguous.
    pub(crate) fn carve(&mut self, c1: Cell, c2: Cell) {
        debug_assert!(self.check_pair(c1, c2).is_ok());
        self.neighbors[c1].insert(c2);
        self.neighbors[c2].insert(c1);
    }

    /// Whether `c1` and `c2` are directly connected. Out-of-range cells are never connected.
    pub fn is_open(&self, c1: Cell, c2: Cell) -> bool {
        self.neighbors
            .get(c1)
            .is_some_and(|set| set.contains(&c2))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        let width = self.width();
        (0..self.height())
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .collect()
    }

    /// Every wall between a cell and its right or lower neighbour, row-major,
    /// right before down.
    pub fn walls(&self) -> Vec<Wall> {
        let (height, width) = (self.height(), self.width());
        self.cells()
            .into_iter()
            .flat_map(|(row, col)| {
                [
                    (col + 1 < width).then(|| Wall::right_of((row, col))),
                    (row + 1 < height).then(|| Wall::below((row, col))),
                ]
            })
            .flatten()
            .filter(|wall| !self.is_open(wall.a, wall.b))
            .collect()
    }

    /// Closes every passage.
    pub fn fill_all(&mut self) {
        self.neighbors.iter_mut().for_each(|set| set.clear());
    }

    /// Removes every internal wall.
    pub fn open_all(&mut self) {
        let (height, width) = (self.height(), self.width());
        for (row, col) in self.cells() {
            if col + 1 < width {
                self.carve((row, col), (row, col + 1));
            }
            if row + 1 < height {
                self.carve((row, col), (row + 1, col));
            }
        }
    }

    /// The in-bounds cells sharing an edge with `cell`, ignoring walls,
    /// in the order up, down, left, right.
    pub fn contiguous_cells(&self, cell: Cell) -> Vec<Cell> {
        if !self.is_in_bounds(cell) {
            return Vec::new();
        }
        let (height, width) = (self.height(), self.width());
        [
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ]
        .into_iter()
        .filter_map(|dir| dir.step(cell, height, width))
        .collect()
    }

    /// The contiguous cells actually connected to `cell`, same order as
    /// [`Maze::contiguous_cells`].
    pub fn reachable_cells(&self, cell: Cell) -> Vec<Cell> {
        self.contiguous_cells(cell)
            .into_iter()
            .filter(|&c| self.is_open(cell, c))
            .collect()
    }

    /// Number of passages (undirected edges) in the maze.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .into_iter()
            .map(|cell| self.neighbors[cell].len())
            .sum::<usize>()
            / 2
    }

    /// Returns the first pair `(c1, c2)` where `c1` lists `c2` but `c2` does
    /// not list `c1`, or where `c2` is not contiguous to `c1`.
    /// `None` means the adjacency map is consistent.
    pub fn find_asymmetry(&self) -> Option<(Cell, Cell)> {
        self.cells().into_iter().find_map(|c1| {
            self.neighbors[c1]
                .iter()
                .find(|&&c2| {
                    !are_contiguous(c1, c2)
                        || !self.neighbors.get(c2).is_some_and(|set| set.contains(&c1))
                })
                .map(|&c2| (c1, c2))
        })
    }
}
