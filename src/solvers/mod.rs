use std::collections::HashMap;

mod bfs;
mod dfs;
mod wall_follower;

pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use wall_follower::solve_wall_follower;

use crate::maze::{Cell, Maze};

/// Cells from start to stop inclusive, each consecutive pair connected.
pub type Path = Vec<Cell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
    WallFollower,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Dfs, Solver::Bfs, Solver::WallFollower];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::WallFollower => write!(f, "Wall Follower (right-hand rule)"),
        }
    }
}

/// Finds a path from `start` to `stop` with the chosen algorithm.
/// Returns `None` when there is no path or either endpoint is outside the maze.
pub fn solve_maze(maze: &Maze, solver: Solver, start: Cell, stop: Cell) -> Option<Path> {
    match solver {
        Solver::Dfs => solve_dfs(maze, start, stop),
        Solver::Bfs => solve_bfs(maze, start, stop),
        Solver::WallFollower => solve_wall_follower(maze, start, stop),
    }
}

/// Walks the predecessor links back from `stop` to `start`.
fn rebuild_path(predecessors: &HashMap<Cell, Cell>, start: Cell, stop: Cell) -> Path {
    let mut path = vec![stop];
    let mut cell = stop;
    while cell != start {
        cell = predecessors[&cell];
        path.push(cell);
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};

    pub(crate) fn assert_valid_path(maze: &Maze, path: &Path, start: Cell, stop: Cell) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&stop));
        for pair in path.windows(2) {
            assert!(
                maze.is_open(pair[0], pair[1]),
                "{:?} -> {:?} crosses a wall",
                pair[0],
                pair[1]
            );
        }
    }

    /// Two rooms separated by a full wall.
    pub(crate) fn split_maze() -> Maze {
        let mut maze = Maze::new(3, 4).unwrap();
        maze.open_all();
        for row in 0..3 {
            maze.add_wall((row, 1), (row, 2)).unwrap();
        }
        maze
    }

    #[test]
    fn test_all_solvers_on_generated_mazes() {
        for generator in Generator::ALL {
            let maze = generate_maze(generator, 12, 9, &mut get_rng(Some(4))).unwrap();
            for solver in Solver::ALL {
                let (start, stop) = ((0, 0), (11, 8));
                let path = solve_maze(&maze, solver, start, stop)
                    .unwrap_or_else(|| panic!("{solver} found no path in {generator} maze"));
                assert_valid_path(&maze, &path, start, stop);
            }
        }
    }

    #[test]
    fn test_path_lengths_are_ordered() {
        for seed in 0..20 {
            let maze = generate_maze(Generator::Wilson, 10, 10, &mut get_rng(Some(seed))).unwrap();
            let (start, stop) = ((0, 0), (9, 9));
            let bfs = solve_bfs(&maze, start, stop).unwrap();
            let dfs = solve_dfs(&maze, start, stop).unwrap();
            let follower = solve_wall_follower(&maze, start, stop).unwrap();
            assert!(bfs.len() <= dfs.len());
            assert!(dfs.len() <= follower.len());
        }
    }

    #[test]
    fn test_bfs_is_never_longer_on_open_grid() {
        let mut maze = Maze::new(6, 6).unwrap();
        maze.open_all();
        let bfs = solve_bfs(&maze, (0, 0), (5, 5)).unwrap();
        let dfs = solve_dfs(&maze, (0, 0), (5, 5)).unwrap();
        assert_eq!(bfs.len() - 1, 10);
        assert!(bfs.len() <= dfs.len());
    }

    #[test]
    fn test_disconnected_and_out_of_bounds() {
        let maze = split_maze();
        for solver in Solver::ALL {
            assert_eq!(solve_maze(&maze, solver, (0, 0), (2, 3)), None);
            assert_eq!(solve_maze(&maze, solver, (0, 0), (3, 0)), None);
            assert_eq!(solve_maze(&maze, solver, (9, 9), (0, 0)), None);
            assert!(solve_maze(&maze, solver, (0, 0), (2, 1)).is_some());
        }
    }

    #[test]
    fn test_single_cell_path() {
        let maze = Maze::new(1, 1).unwrap();
        for solver in Solver::ALL {
            assert_eq!(solve_maze(&maze, solver, (0, 0), (0, 0)), Some(vec![(0, 0)]));
        }
    }
}
