use std::collections::HashMap;

use rand::Rng;

use crate::{
    error::Result,
    maze::{Cell, Maze},
};

/// Wilson's algorithm: grow a spanning tree from one random seed cell by
/// attaching loop-erased random walks that start from unvisited cells.
pub fn wilson<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(height, width)?;

    let mut visited = vec![false; height * width];
    let index = |(row, col): Cell| row * width + col;

    let mut unvisited = maze.cells();
    let seed = unvisited.swap_remove(rng.random_range(0..unvisited.len()));
    visited[index(seed)] = true;

    let mut walks = 0usize;
    while !unvisited.is_empty() {
        let origin = unvisited[rng.random_range(0..unvisited.len())];
        let walk = random_walk(&maze, origin, &visited, rng);
        walks += 1;
        tracing::trace!(?origin, len = walk.len(), "walk reached the tree");

        // The last cell of the walk already belongs to the tree
        for pair in walk.windows(2) {
            maze.carve(pair[0], pair[1]);
            visited[index(pair[0])] = true;
        }
        unvisited.retain(|&c| !visited[index(c)]);
    }

    tracing::debug!(
        height,
        width,
        passages = maze.passage_count(),
        walks,
        "wilson maze generated"
    );
    Ok(maze)
}

/// Loop-erased random walk from `origin` until a visited cell is reached.
///
/// Each step moves to a uniformly chosen contiguous cell. Stepping onto a
/// cell already on the walk erases the loop back to that cell, so the
/// returned walk never repeats a cell.
fn random_walk<R: Rng>(maze: &Maze, origin: Cell, visited: &[bool], rng: &mut R) -> Vec<Cell> {
    let width = maze.width();
    let mut walk = vec![origin];
    // Position of each cell of the walk
    let mut positions: HashMap<Cell, usize> = HashMap::from([(origin, 0)]);
    let mut current = origin;

    while !visited[current.0 * width + current.1] {
        let contiguous = maze.contiguous_cells(current);
        current = contiguous[rng.random_range(0..contiguous.len())];

        match positions.get(&current) {
            Some(&position) => {
                for erased in walk.drain(position + 1..) {
                    positions.remove(&erased);
                }
            }
            None => {
                positions.insert(current, walk.len());
                walk.push(current);
            }
        }
    }

    walk
}
