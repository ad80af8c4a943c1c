use std::collections::HashSet;

use super::Path;
use crate::maze::{Cell, Direction, Maze};

/// Wall follower with a fixed preference order: east, south, west, north.
///
/// Each step tries the four directions in order and takes every open one
/// leading to a cell not entered before, moving on from the new cell for the
/// remaining directions. So a single step can hop several times, and can
/// overshoot `stop` before backtracking onto it. When nothing moves, the last
/// cell is dropped from the path and the search resumes from the one before.
///
/// `start` is not marked as entered, so the walk may come back through it once.
pub fn solve_wall_follower(maze: &Maze, start: Cell, stop: Cell) -> Option<Path> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(stop) {
        return None;
    }

    let (height, width) = (maze.height(), maze.width());
    let mut entered: HashSet<Cell> = HashSet::new();
    let mut current = start;
    let mut path = vec![start];

    while current != stop {
        let mut moved = false;

        for direction in Direction::PRIORITY {
            let Some(next) = direction.step(current, height, width) else {
                continue;
            };
            if !entered.contains(&next) && maze.is_open(current, next) {
                entered.insert(next);
                current = next;
                path.push(next);
                moved = true;
            }
        }

        if !moved {
            // Backtrack; an empty path means every option is exhausted
            path.pop();
            current = *path.last()?;
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::tests::{assert_valid_path, split_maze};

    fn open(height: usize, width: usize) -> Maze {
        let mut maze = Maze::new(height, width).unwrap();
        maze.open_all();
        maze
    }

    #[test]
    fn test_hops_around_then_backtracks_to_stop() {
        let maze = open(2, 2);
        assert_eq!(
            solve_wall_follower(&maze, (0, 0), (1, 1)),
            Some(vec![(0, 0), (0, 1), (1, 1)])
        );
    }

    #[test]
    fn test_overshoots_stop() {
        // East, south and west all fire in the first step, passing the stop
        // cell (1, 0) and re-entering the start before backtracking.
        let maze = open(2, 2);
        assert_eq!(
            solve_wall_follower(&maze, (0, 0), (1, 0)),
            Some(vec![(0, 0), (0, 1), (1, 1), (1, 0)])
        );
    }

    #[test]
    fn test_start_can_be_crossed_again() {
        let maze = open(1, 3);
        let path = solve_wall_follower(&maze, (0, 1), (0, 0)).unwrap();
        assert_eq!(path, vec![(0, 1), (0, 2), (0, 1), (0, 0)]);
        assert_valid_path(&maze, &path, (0, 1), (0, 0));
    }

    #[test]
    fn test_exhausts_disconnected_region() {
        let maze = split_maze();
        assert_eq!(solve_wall_follower(&maze, (2, 0), (0, 3)), None);
        let path = solve_wall_follower(&maze, (2, 0), (0, 1)).unwrap();
        assert_valid_path(&maze, &path, (2, 0), (0, 1));
    }

    #[test]
    fn test_fully_walled_start() {
        let maze = Maze::new(3, 3).unwrap();
        assert_eq!(solve_wall_follower(&maze, (1, 1), (2, 2)), None);
    }
}
