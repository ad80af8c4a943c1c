use rand::Rng;

use crate::{error::Result, maze::Maze};

/// Randomized depth-first search (recursive backtracker) with an explicit stack.
pub fn exhaustive_exploration<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(height, width)?;

    let mut visited = vec![false; height * width];
    let index = |(row, col): (usize, usize)| row * width + col;

    // Initialize the starting point
    let start = (rng.random_range(0..height), rng.random_range(0..width));
    visited[index(start)] = true;

    // The stack keeps the current carving branch
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = maze
            .contiguous_cells(cell)
            .into_iter()
            .filter(|&c| !visited[index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        maze.carve(cell, neighbor);
        visited[index(neighbor)] = true;
        // Carve the maze in that neighbor's direction next
        stack.push(neighbor);
    }

    tracing::debug!(
        height,
        width,
        passages = maze.passage_count(),
        "exhaustive exploration maze generated"
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_every_cell_is_carved() {
        let mut rng = StdRng::seed_from_u64(21);
        let maze = exhaustive_exploration(10, 10, &mut rng).unwrap();
        assert!(
            maze.cells()
                .into_iter()
                .all(|c| !maze.reachable_cells(c).is_empty())
        );
    }

    #[test]
    fn test_long_corridors() {
        // Depth-first carving produces few dead ends compared to the binary tree
        let mut rng = StdRng::seed_from_u64(2);
        let maze = exhaustive_exploration(20, 20, &mut rng).unwrap();
        assert!(maze.dead_end_count() < 20 * 20 / 4);
    }
}
