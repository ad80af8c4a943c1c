/// A grid coordinate `(row, column)`.
pub type Cell = (usize, usize);

/// A wall between a cell and its right or lower neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub a: Cell,
    /// Always `(a.0, a.1 + 1)` or `(a.0 + 1, a.1)`.
    pub b: Cell,
}

impl Wall {
    /// Wall between `a` and the cell to its right.
    pub fn right_of(a: Cell) -> Self {
        Wall { a, b: (a.0, a.1 + 1) }
    }

    /// Wall between `a` and the cell below it.
    pub fn below(a: Cell) -> Self {
        Wall { a, b: (a.0 + 1, a.1) }
    }
}

/// Cardinal directions, listed in the priority order used by the wall follower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub const PRIORITY: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Move one step from `cell`, or `None` if the step would leave the
    /// `height` x `width` grid.
    pub fn step(self, cell: Cell, height: usize, width: usize) -> Option<Cell> {
        let (row, col) = cell;
        let next = match self {
            Direction::East => (row, col.checked_add(1)?),
            Direction::South => (row.checked_add(1)?, col),
            Direction::West => (row, col.checked_sub(1)?),
            Direction::North => (row.checked_sub(1)?, col),
        };
        (next.0 < height && next.1 < width).then_some(next)
    }
}

/// `|Δrow| + |Δcolumn|`, ignoring walls.
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Whether two cells share an edge of the grid.
pub fn are_contiguous(a: Cell, b: Cell) -> bool {
    manhattan(a, b) == 1
}
