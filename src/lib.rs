//! Mazes as undirected graphs over a grid of cells.
//!
//! A [`Maze`] starts fully walled and is carved by one of the five
//! [`generators`]. The [`solvers`] find paths through it, [`metrics`] measure
//! it, and [`hard_maze`] searches for mazes with a long route from entry to
//! exit. [`render`] turns a maze into box-drawing text.

pub mod error;
pub mod generators;
pub mod hard_maze;
pub mod maze;
pub mod metrics;
pub mod render;
pub mod solvers;

pub use error::{MazeError, Result};
pub use maze::{Cell, Maze, Wall};
