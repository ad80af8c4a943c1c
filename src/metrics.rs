//! Distance and topology measures of a maze.

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Maze, manhattan},
    solvers::{solve_bfs, solve_wall_follower},
};

/// Entry point of the maze, used as the origin of dead-end paths.
pub const ORIGIN: Cell = (0, 0);

impl Maze {
    /// Number of edges on the shortest path between `c1` and `c2`.
    pub fn geodesic_distance(&self, c1: Cell, c2: Cell) -> Result<usize> {
        solve_bfs(self, c1, c2)
            .map(|path| path.len() - 1)
            .ok_or(MazeError::NoPath { from: c1, to: c2 })
    }

    /// `|Δrow| + |Δcolumn|`, ignoring walls.
    pub fn manhattan_distance(&self, c1: Cell, c2: Cell) -> usize {
        manhattan(c1, c2)
    }

    /// Cells with exactly one reachable neighbour.
    pub fn dead_ends(&self) -> Vec<Cell> {
        self.cells()
            .into_iter()
            .filter(|&cell| self.reachable_cells(cell).len() == 1)
            .collect()
    }

    pub fn dead_end_count(&self) -> usize {
        self.dead_ends().len()
    }

    /// Longest wall-follower path, counted in cells, from [`ORIGIN`] to any
    /// dead end. Dead ends the follower cannot reach are ignored.
    pub fn worst_dead_end_path_length(&self) -> usize {
        self.dead_ends()
            .into_iter()
            .filter_map(|dead_end| solve_wall_follower(self, ORIGIN, dead_end))
            .map(|path| path.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_reachable(&self, c1: Cell, c2: Cell) -> bool {
        solve_bfs(self, c1, c2).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};

    #[test]
    fn test_open_two_by_two() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_all();
        assert_eq!(maze.dead_end_count(), 0);
        assert_eq!(maze.worst_dead_end_path_length(), 0);
        assert_eq!(maze.geodesic_distance((0, 0), (1, 1)), Ok(2));
    }

    #[test]
    fn test_filled_two_by_two() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.open_all();
        maze.fill_all();
        assert!(!maze.is_reachable((0, 0), (1, 1)));
        assert_eq!(
            maze.geodesic_distance((0, 0), (1, 1)),
            Err(MazeError::NoPath {
                from: (0, 0),
                to: (1, 1)
            })
        );
        assert_eq!(maze.dead_end_count(), 0);
    }

    #[test]
    fn test_geodesic_distance_to_self_is_zero() {
        let maze = generate_maze(Generator::Fusion, 6, 7, &mut get_rng(Some(1))).unwrap();
        for cell in maze.cells() {
            assert_eq!(maze.geodesic_distance(cell, cell), Ok(0));
        }
        let walled = Maze::new(2, 2).unwrap();
        assert_eq!(walled.geodesic_distance((1, 0), (1, 0)), Ok(0));
    }

    #[test]
    fn test_geodesic_distance_at_least_manhattan() {
        let maze = generate_maze(Generator::Wilson, 8, 8, &mut get_rng(Some(12))).unwrap();
        for cell in maze.cells() {
            let geodesic = maze.geodesic_distance((0, 0), cell).unwrap();
            assert!(geodesic >= maze.manhattan_distance((0, 0), cell));
        }
    }

    #[test]
    fn test_manhattan_is_a_metric() {
        let maze = Maze::new(5, 6).unwrap();
        let cells = maze.cells();
        for &a in &cells {
            for &b in &cells {
                let ab = maze.manhattan_distance(a, b);
                assert_eq!(ab, maze.manhattan_distance(b, a));
                assert_eq!(ab == 0, a == b);
                for &c in cells.iter().step_by(7) {
                    assert!(ab <= maze.manhattan_distance(a, c) + maze.manhattan_distance(c, b));
                }
            }
        }
        assert_eq!(maze.manhattan_distance((0, 5), (4, 0)), 9);
    }

    #[test]
    fn test_dead_ends_of_corridor() {
        let mut maze = Maze::new(1, 4).unwrap();
        maze.open_all();
        assert_eq!(maze.dead_ends(), vec![(0, 0), (0, 3)]);
        // Path to (0, 0) is the single origin cell, path to (0, 3) has 4 cells
        assert_eq!(maze.worst_dead_end_path_length(), 4);
    }

    #[test]
    fn test_worst_dead_end_skips_unreachable() {
        let mut maze = Maze::new(2, 3).unwrap();
        maze.remove_wall((0, 0), (0, 1)).unwrap();
        maze.remove_wall((1, 1), (1, 2)).unwrap();
        assert_eq!(maze.dead_end_count(), 4);
        assert_eq!(maze.worst_dead_end_path_length(), 2);
    }

    #[test]
    fn test_single_cell_metrics() {
        let maze = Maze::new(1, 1).unwrap();
        assert_eq!(maze.dead_end_count(), 0);
        assert_eq!(maze.worst_dead_end_path_length(), 0);
        assert!(maze.is_reachable((0, 0), (0, 0)));
    }
}
