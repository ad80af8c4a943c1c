//! Random-restart search for a maze whose exit is far from its entry.

use rand::Rng;

use crate::{
    error::{MazeError, Result},
    generators::wilson,
    maze::{Cell, Maze},
    metrics::ORIGIN,
};

/// Reported to the progress callback after each candidate is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// 1-based index of the candidate just evaluated.
    pub iteration: usize,
    pub difficulty: usize,
    /// Geodesic distance from the origin to the end in the best maze so far.
    pub best_distance: usize,
}

/// Generates `difficulty` Wilson mazes after a baseline one and keeps the one
/// with the longest shortest path from `(0, 0)` to `end` (bottom-right corner
/// by default). Ties keep the maze found first.
pub fn generate_hard_maze<R, F>(
    height: usize,
    width: usize,
    difficulty: usize,
    end: Option<Cell>,
    rng: &mut R,
    mut on_progress: F,
) -> Result<Maze>
where
    R: Rng,
    F: FnMut(SearchProgress),
{
    let mut best = wilson(height, width, rng)?;
    let end = end.unwrap_or((height - 1, width - 1));
    if !best.is_in_bounds(end) {
        return Err(MazeError::InvalidCoordinate {
            cell: end,
            height,
            width,
        });
    }
    let mut best_distance = distance_to_end(&best, end).unwrap_or(0);

    for iteration in 1..=difficulty {
        let candidate = wilson(height, width, rng)?;
        let distance = distance_to_end(&candidate, end);
        tracing::debug!(iteration, difficulty, ?distance, best_distance, "hard maze candidate");

        if let Some(distance) = distance {
            if distance > best_distance {
                tracing::info!(iteration, distance, "found a harder maze");
                best_distance = distance;
                // Each candidate is freshly generated, so the incumbent owns it outright
                best = candidate;
            }
        }

        on_progress(SearchProgress {
            iteration,
            difficulty,
            best_distance,
        });
    }

    Ok(best)
}

fn distance_to_end(maze: &Maze, end: Cell) -> Option<usize> {
    if !maze.is_reachable(ORIGIN, end) {
        return None;
    }
    maze.geodesic_distance(ORIGIN, end).ok()
}
