use rand::Rng;

use crate::{error::Result, maze::Maze};

/// For each cell, carve either down or right. The last row can only go
/// right and the last column can only go down, so passages are biased
/// toward the first row and column.
pub fn binary_tree<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(height, width)?;

    for (row, col) in maze.cells() {
        let can_go_down = row + 1 < height;
        let can_go_right = col + 1 < width;
        let go_down = match (can_go_down, can_go_right) {
            (true, true) => rng.random_bool(0.5),
            (true, false) => true,
            (false, true) => false,
            // Bottom-right cell
            (false, false) => continue,
        };
        if go_down {
            maze.carve((row, col), (row + 1, col));
        } else {
            maze.carve((row, col), (row, col + 1));
        }
    }

    tracing::debug!(height, width, passages = maze.passage_count(), "binary tree maze generated");
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_last_row_and_column_are_corridors() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = binary_tree(6, 6, &mut rng).unwrap();
        // Every cell of the last row is joined to its right neighbour
        for col in 0..5 {
            assert!(maze.is_open((5, col), (5, col + 1)));
        }
        // Every cell of the last column is joined to the cell below
        for row in 0..5 {
            assert!(maze.is_open((row, 5), (row + 1, 5)));
        }
    }

    #[test]
    fn test_each_cell_carves_down_or_right() {
        let mut rng = StdRng::seed_from_u64(11);
        let maze = binary_tree(5, 7, &mut rng).unwrap();
        for (row, col) in maze.cells() {
            if (row, col) == (4, 6) {
                continue;
            }
            let down = row + 1 < 5 && maze.is_open((row, col), (row + 1, col));
            let right = col + 1 < 7 && maze.is_open((row, col), (row, col + 1));
            assert!(down ^ right, "cell {:?} must carve exactly one way", (row, col));
        }
    }
}
