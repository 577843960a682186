//! Seeded perfect-maze generation, wall compaction and path solving.
//!
//! ```
//! use seedmaze::{compact, generate, solve};
//!
//! let maze = generate("42", 5, 5).unwrap();
//! let walls = compact(maze.grid());
//! let path = solve(maze.grid(), maze.start(), maze.end());
//! assert_eq!(walls.len(), 5);
//! assert_eq!(path.first(), Some(maze.start()));
//! ```

pub mod cli;
pub mod compactor;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod random;
pub mod render;
pub mod solvers;

pub use compactor::{Rect, compact};
pub use error::{MazeError, MazeResult};
pub use generators::{GenerationProgress, generate, generate_with_progress};
pub use maze::{Cell, Coord, Grid, Maze};
pub use random::SeededRandom;
pub use solvers::{Path, solve};
