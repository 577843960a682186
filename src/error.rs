use thiserror::Error;

/// Errors surfaced by maze generation and export.
///
/// An unreachable goal is not an error: [`crate::solvers::solve`] reports it with an empty
/// [`crate::solvers::Path`].
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("maze dimensions must be at least 3x3, got {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("maze generation cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
