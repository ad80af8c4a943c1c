use rand::{Rng, seq::SliceRandom};

use crate::{error::Result, maze::Maze};

/// Disjoint sets of cells for the fusion generator, with path compression
/// and union by rank.
struct Labels {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl Labels {
    fn new(size: usize) -> Self {
        Labels {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Randomized Kruskal: shuffle every internal wall and knock it down
/// whenever it separates two different components.
pub fn fusion<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(height, width)?;
    maze.fill_all();

    let mut labels = Labels::new(height * width);

    let mut walls = maze.walls();
    walls.shuffle(rng);

    for wall in walls {
        // Convert cell coordinates to label indices
        let idx1 = wall.a.0 * width + wall.a.1;
        let idx2 = wall.b.0 * width + wall.b.1;

        if labels.unite(idx1, idx2) {
            maze.carve(wall.a, wall.b);
        }
    }

    tracing::debug!(height, width, passages = maze.passage_count(), "fusion maze generated");
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_unite() {
        let mut labels = Labels::new(4);
        assert!(labels.unite(0, 1));
        assert!(labels.unite(2, 3));
        assert!(!labels.unite(1, 0));
        assert_ne!(labels.find(0), labels.find(3));
        assert!(labels.unite(1, 3));
        assert_eq!(labels.find(0), labels.find(2));
        assert!(!labels.unite(0, 2));
    }
}
