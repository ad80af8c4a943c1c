use rand::Rng;

use crate::{
    error::Result,
    maze::{Cell, Maze},
};

/// Row by row, grow horizontal runs and close each run by carving down from
/// one random member. The last row is a single open corridor.
pub fn sidewinder<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(height, width)?;

    for row in 0..height - 1 {
        let mut run: Vec<Cell> = Vec::new();

        for col in 0..width - 1 {
            run.push((row, col));
            if rng.random_bool(0.5) {
                maze.carve((row, col), (row, col + 1));
            } else {
                carve_down_from_run(&mut maze, &run, rng);
                run.clear();
            }
        }

        // The run always ends on the last column and must reach the next row
        run.push((row, width - 1));
        carve_down_from_run(&mut maze, &run, rng);
    }

    for col in 0..width - 1 {
        maze.carve((height - 1, col), (height - 1, col + 1));
    }

    tracing::debug!(height, width, passages = maze.passage_count(), "sidewinder maze generated");
    Ok(maze)
}

fn carve_down_from_run<R: Rng>(maze: &mut Maze, run: &[Cell], rng: &mut R) {
    let (row, col) = run[rng.random_range(0..run.len())];
    maze.carve((row, col), (row + 1, col));
}
