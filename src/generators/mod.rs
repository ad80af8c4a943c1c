use rand::{Rng, SeedableRng, rngs::StdRng};

mod binary_tree;
mod exploration;
mod kruskal;
mod sidewinder;
mod wilson;

pub use binary_tree::binary_tree;
pub use exploration::exhaustive_exploration;
pub use kruskal::fusion;
pub use sidewinder::sidewinder;
pub use wilson::wilson;

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    BinaryTree,
    Sidewinder,
    Fusion,
    Exploration,
    Wilson,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::Fusion,
        Generator::Exploration,
        Generator::Wilson,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::Fusion => write!(f, "Fusion (Randomized Kruskal)"),
            Generator::Exploration => write!(f, "Exhaustive Exploration (Randomized DFS)"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
        }
    }
}

/// Builds a fresh `height` x `width` maze with the chosen algorithm.
pub fn generate_maze<R: Rng>(
    generator: Generator,
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<Maze> {
    match generator {
        Generator::BinaryTree => binary_tree(height, width, rng),
        Generator::Sidewinder => sidewinder(height, width, rng),
        Generator::Fusion => fusion(height, width, rng),
        Generator::Exploration => exhaustive_exploration(height, width, rng),
        Generator::Wilson => wilson(height, width, rng),
    }
}
