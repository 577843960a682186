use crate::maze::{Cell, Coord, Grid};

/// An axis-aligned block of wall cells, `x`/`y` being its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of cells covered.
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        self.x <= coord.x
            && coord.x < self.x + self.width
            && self.y <= coord.y
            && coord.y < self.y + self.height
    }

    pub const fn collide(&self, other: &Rect) -> bool {
        self.x + self.width > other.x
            && self.x < other.x + other.width
            && self.y + self.height > other.y
            && self.y < other.y + other.height
    }

    /// Every covered coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |cy| (x..x + width).map(move |cx| Coord::new(cx, cy)))
    }
}

/// How much a compaction shrank the wall representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactionSummary {
    pub wall_cells: usize,
    pub rects: usize,
}

impl CompactionSummary {
    pub fn new(grid: &Grid, rects: &[Rect]) -> Self {
        CompactionSummary {
            wall_cells: grid.count(Cell::Wall),
            rects: rects.len(),
        }
    }

    /// `round((1 - rects / wall_cells) * 100)`, 0 for a grid without walls.
    pub fn reduction_percent(&self) -> i64 {
        if self.wall_cells == 0 {
            return 0;
        }
        ((1.0 - self.rects as f64 / self.wall_cells as f64) * 100.0).round() as i64
    }
}

/// Cover the wall cells of `grid` with disjoint rectangles.
///
/// Cells are scanned in row-major order. From each wall not yet covered, the rectangle first
/// grows right along the row; a run wider than one cell then grows down while the whole band
/// below is uncovered wall. A single-cell run grows down as a column instead.
///
/// This is a greedy single pass, not a minimum cover: the output only depends on `grid`.
pub fn compact(grid: &Grid) -> Vec<Rect> {
    let mut visited = vec![false; grid.len()];
    let mut rects = Vec::new();

    let is_free = |visited: &[bool], x: usize, y: usize| {
        let idx = y * grid.cols() + x;
        grid.cells()[idx].is_wall() && !visited[idx]
    };

    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            if !is_free(&visited, x, y) {
                continue;
            }

            let width = (x..grid.cols())
                .take_while(|&wx| is_free(&visited, wx, y))
                .count();

            let rect = if width > 1 {
                let height = 1 + (y + 1..grid.rows())
                    .take_while(|&wy| (x..x + width).all(|wx| is_free(&visited, wx, wy)))
                    .count();
                Rect::new(x, y, width, height)
            } else {
                // Covers both the vertical run and the lone cell (height 1)
                let height = (y..grid.rows())
                    .take_while(|&wy| is_free(&visited, x, wy))
                    .count();
                Rect::new(x, y, 1, height)
            };

            for cell in rect.cells() {
                visited[grid.ravel_index(cell)] = true;
            }
            rects.push(rect);
        }
    }

    let summary = CompactionSummary::new(grid, &rects);
    tracing::debug!(
        "[compact] optimized {} walls into {} rectangles ({}% reduction)",
        summary.wall_cells,
        summary.rects,
        summary.reduction_percent()
    );
    rects
}

/// One 1x1 rectangle per wall cell, in row-major order. The unoptimized representation.
pub fn per_cell(grid: &Grid) -> Vec<Rect> {
    grid.iter()
        .filter(|&(_, cell)| cell.is_wall())
        .map(|(coord, _)| Rect::new(coord.x, coord.y, 1, 1))
        .collect()
}

/// Paint `rects` as walls onto an otherwise all-passage `rows x cols` grid.
/// Parts of a rectangle falling outside the grid are ignored.
pub fn rasterize(rects: &[Rect], rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols, Cell::Passage);
    for cell in rects.iter().flat_map(Rect::cells) {
        if grid.contains(cell) {
            grid.set(cell, Cell::Wall);
        }
    }
    grid
}
