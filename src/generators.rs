use std::ops::ControlFlow;

use crate::{
    error::{MazeError, MazeResult},
    maze::{Cell, Coord, Grid, Maze, grid::DIRECTIONS},
    random::SeededRandom,
};

/// Smallest accepted row or column count.
pub const MIN_DIMENSION: usize = 3;
/// Default number of carve iterations between two progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Where carving always begins.
pub const START: Coord = Coord::new(1, 1);

/// Snapshot handed to a progress hook during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationProgress {
    /// Loop iterations completed so far (carves and backtracks alike).
    pub iterations: usize,
    /// Cells turned into passages so far, including the start.
    pub carved: usize,
    /// Current depth of the backtracking stack.
    pub stack_depth: usize,
    /// `rows * cols`
    pub total_cells: usize,
}

impl GenerationProgress {
    /// Rough completion estimate in percent, capped at 100.
    pub fn percent(&self) -> usize {
        if self.stack_depth == 0 {
            return 100;
        }
        (self.iterations * 100 / self.total_cells.max(1)).min(100)
    }
}

/// Designated goal for a `rows x cols` maze.
pub fn end_for(rows: usize, cols: usize) -> Coord {
    Coord::new(cols.saturating_sub(2), rows.saturating_sub(2))
}

/// Carve a perfect maze with randomized depth-first backtracking.
///
/// # Errors
/// [`MazeError::InvalidDimensions`] if `rows` or `cols` is below [`MIN_DIMENSION`].
pub fn generate(seed: &str, rows: usize, cols: usize) -> MazeResult<Maze> {
    generate_with_progress(seed, rows, cols, DEFAULT_PROGRESS_INTERVAL, |_| {
        ControlFlow::Continue(())
    })
}

/// Same as [`generate`], calling `on_progress` every `interval` loop iterations and once more
/// when carving finishes. Returning [`ControlFlow::Break`] abandons the partial maze.
///
/// The hook only observes: the carved grid is identical with or without it, whatever
/// the interval.
///
/// # Errors
/// [`MazeError::InvalidDimensions`] for grids smaller than 3x3, and
/// [`MazeError::Cancelled`] when the hook breaks.
pub fn generate_with_progress<F>(
    seed: &str,
    rows: usize,
    cols: usize,
    interval: usize,
    mut on_progress: F,
) -> MazeResult<Maze>
where
    F: FnMut(&GenerationProgress) -> ControlFlow<()>,
{
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }

    let end = end_for(rows, cols);
    if rows % 2 == 0 || cols % 2 == 0 {
        tracing::warn!(
            "[generate] even dimensions {}x{}: end {} may not be a carved room",
            rows,
            cols,
            end
        );
    }

    let interval = interval.max(1);
    let mut rng = SeededRandom::new(seed);
    let mut grid = Grid::new(rows, cols, Cell::Wall);
    grid.set(START, Cell::Passage);

    // The stack only ever holds room cells (odd coordinates reached by carving)
    let mut stack = vec![START];
    let mut progress = GenerationProgress {
        iterations: 0,
        carved: 1,
        stack_depth: 1,
        total_cells: rows * cols,
    };

    while let Some(&current) = stack.last() {
        let mut directions = DIRECTIONS;
        rng.shuffle(&mut directions);

        let carved = directions.into_iter().find_map(|direction| {
            let neighbor = grid
                .offset(current, direction, 2)
                .filter(|&n| grid.is_wall(n))?;
            // Two steps in bounds means the single step between is in bounds too
            let between = grid.offset(current, direction, 1)?;
            Some((between, neighbor))
        });

        match carved {
            Some((between, neighbor)) => {
                grid.set(between, Cell::Passage);
                grid.set(neighbor, Cell::Passage);
                stack.push(neighbor);
                progress.carved += 2;
            }
            None => {
                stack.pop();
            }
        }

        progress.iterations += 1;
        progress.stack_depth = stack.len();
        if progress.iterations % interval == 0 && on_progress(&progress).is_break() {
            tracing::info!(
                "[generate] cancelled after {} iterations",
                progress.iterations
            );
            return Err(MazeError::Cancelled {
                iterations: progress.iterations,
            });
        }
    }

    if progress.iterations % interval != 0 {
        // Final report; the maze is already complete, so a break here changes nothing
        let _ = on_progress(&progress);
    }

    tracing::debug!(
        "[generate] seed {:?} {}x{}: {} passages carved in {} iterations",
        seed,
        rows,
        cols,
        progress.carved,
        progress.iterations
    );

    Ok(Maze::new(grid, seed.to_owned(), START, end))
}
