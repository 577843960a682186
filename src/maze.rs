pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::Cell;
pub use grid::Grid;

/// A cell position, `x` being the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// True if the two coordinates differ by one unit along exactly one axis.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A generated maze: the carved grid together with the seed that produced it
/// and its designated start and end cells.
///
/// This is the value handed from generation to compaction, solving and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    seed: String,
    start: Coord,
    end: Coord,
}

impl Maze {
    pub(crate) fn new(grid: Grid, seed: String, start: Coord, end: Coord) -> Self {
        Maze {
            grid,
            seed,
            start,
            end,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up the maze and keep only its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Whether the designated end sits on the room lattice (odd coordinates, at least 1)
    /// and was carved. Even dimensions can push it onto a wall or the border.
    pub fn end_is_room(&self) -> bool {
        let Coord { x, y } = self.end;
        x >= 1 && y >= 1 && x % 2 == 1 && y % 2 == 1 && self.grid.is_passage(self.end)
    }

    /// Number of 4-adjacent passage pairs, each counted once.
    pub fn passage_edges(&self) -> usize {
        self.grid
            .iter()
            .filter(|&(_, cell)| cell.is_passage())
            .map(|(coord, _)| {
                [(1, 0), (0, 1)]
                    .into_iter()
                    .filter_map(|direction| self.grid.offset(coord, direction, 1))
                    .filter(|&n| self.grid.is_passage(n))
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(Coord::new(3, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 2)));
    }

    #[test]
    fn test_end_is_room() {
        let grid = Grid::from_rows(&["#####", "#...#", "#####", "#####"]);
        let maze = Maze::new(grid.clone(), "s".into(), Coord::new(1, 1), Coord::new(3, 1));
        assert!(maze.end_is_room());
        let even = Maze::new(grid, "s".into(), Coord::new(1, 1), Coord::new(3, 2));
        assert!(!even.end_is_room());
    }

    #[test]
    fn test_passage_edges() {
        let grid = Grid::from_rows(&["#####", "#...#", "#.#.#", "#####"]);
        let maze = Maze::new(grid, "s".into(), Coord::new(1, 1), Coord::new(3, 1));
        assert_eq!(maze.passage_edges(), 4);
    }
}
