use std::fmt;

use super::cell::Cell;
use super::Coord;

/// The four cardinal offsets, in the order both the generator and the solver scan them.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Row-major `rows x cols` buffer of cells, indexed by `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cell: Cell) -> Self {
        let data = vec![cell; rows * cols].into_boxed_slice();
        Grid { data, rows, cols }
    }

    /// Build a grid from row strings, `#` being a wall and anything else a passage.
    /// Rows shorter than the first one are padded with walls.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Self {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let mut grid = Grid::new(rows, cols, Cell::Wall);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().take(cols).enumerate() {
                if ch != '#' {
                    grid.set(Coord::new(x, y), Cell::Passage);
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.x == 0 || coord.y == 0 || coord.x == self.cols - 1 || coord.y == self.rows - 1
    }

    /// Flat index of an in-bounds coordinate.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.y * self.cols + coord.x
    }

    pub fn unravel_index(&self, idx: usize) -> Coord {
        Coord::new(idx % self.cols, idx / self.cols)
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord)
            .then(|| self.data[self.ravel_index(coord)])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    pub fn is_wall(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_wall)
    }

    pub fn is_passage(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_passage)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// The cell `distance` steps away from `coord` along `direction`, if it lies in the grid.
    pub fn offset(&self, coord: Coord, direction: (isize, isize), distance: usize) -> Option<Coord> {
        // NOTE: a negative step that would underflow wraps to a huge value,
        // which the bounds check below then filters out.
        let x = coord
            .x
            .wrapping_add_signed(direction.0.wrapping_mul(distance as isize));
        let y = coord
            .y
            .wrapping_add_signed(direction.1.wrapping_mul(distance as isize));
        let next = Coord::new(x, y);
        self.contains(next).then_some(next)
    }

    /// In-bounds 4-connected neighbours of `coord`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |direction| self.offset(coord, direction, 1))
    }

    /// Neighbours of `coord` that are passages.
    pub fn passage_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .filter(move |&c| self.is_passage(c))
    }

    /// Iterate over every coordinate in row-major order along with its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (self.unravel_index(idx), cell))
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
