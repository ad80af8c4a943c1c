use std::collections::{HashMap, VecDeque};

use super::{Path, rebuild_path};
use crate::maze::{Cell, Maze};

/// Breadth-first search. Cells are discovered in order of distance from
/// `start`, so the rebuilt path has the fewest possible edges.
///
/// The queue is drained even after `stop` has been reached; predecessors
/// never change once set, so the extra work does not affect the result.
pub fn solve_bfs(maze: &Maze, start: Cell, stop: Cell) -> Option<Path> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(stop) {
        return None;
    }

    let mut predecessors: HashMap<Cell, Cell> = HashMap::from([(start, start)]);
    let mut queue = VecDeque::from([start]);
    let mut path = None;

    while let Some(current) = queue.pop_front() {
        if current == stop {
            path = Some(rebuild_path(&predecessors, start, stop));
        }

        for neighbor in maze.reachable_cells(current) {
            if !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    path
}
