use std::collections::HashMap;

use super::{Path, rebuild_path};
use crate::maze::{Cell, Maze};

/// Depth-first search with an explicit stack. The first cell to discover a
/// neighbour stays its predecessor. Not guaranteed to find the shortest path.
pub fn solve_dfs(maze: &Maze, start: Cell, stop: Cell) -> Option<Path> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(stop) {
        return None;
    }

    let mut predecessors: HashMap<Cell, Cell> = HashMap::from([(start, start)]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if current == stop {
            return Some(rebuild_path(&predecessors, start, stop));
        }

        for neighbor in maze.reachable_cells(current) {
            if !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    None
}
