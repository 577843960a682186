use std::ops::Deref;

use crate::maze::{Coord, Grid};

/// Ordered cells from a start to a goal. An empty path means the goal was not reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Coord>);

impl Path {
    pub fn first(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// Every consecutive pair of steps is 4-adjacent.
    pub fn is_trail(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Coord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Coord>> for Path {
    fn from(steps: Vec<Coord>) -> Self {
        Path(steps)
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Find a path from `start` to `end` through passage cells with an iterative depth-first search.
///
/// Not necessarily the shortest path, though in a perfect maze it is the only one.
/// Returns an empty [`Path`] when `end` cannot be reached or either endpoint lies outside the grid.
pub fn solve(grid: &Grid, start: Coord, end: Coord) -> Path {
    let (path, pops) = search(grid, start, end);
    tracing::debug!(
        "[solve] {} -> {}: {} steps after {} pops",
        start,
        end,
        path.len(),
        pops
    );
    path
}

/// The search behind [`solve`], also reporting how many stack entries were popped.
fn search(grid: &Grid, start: Coord, end: Coord) -> (Path, usize) {
    if !grid.contains(start) || !grid.contains(end) {
        tracing::warn!("[solve] endpoint outside the {}x{} grid", grid.rows(), grid.cols());
        return (Path::default(), 0);
    }

    let mut visited = vec![false; grid.len()];
    // Each entry remembers how long the trail was when it was pushed,
    // i.e. the trail leading up to the cell that discovered it.
    let mut stack = vec![(start, 0)];
    let mut trail: Vec<Coord> = Vec::new();
    let mut pops = 0;

    while let Some((current, depth)) = stack.pop() {
        pops += 1;
        // Drop whatever dead-end branch was explored since this entry was pushed
        trail.truncate(depth);

        if current == end {
            trail.push(current);
            return (Path(trail), pops);
        }

        let idx = grid.ravel_index(current);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        trail.push(current);

        // Already-visited neighbours are pushed too and skipped when popped
        let depth = trail.len();
        stack.extend(grid.passage_neighbors(current).map(|n| (n, depth)));
    }

    (Path::default(), pops)
}
