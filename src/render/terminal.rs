use std::{collections::HashSet, fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::{
    maze::{Cell, Coord, Maze},
    solvers::Path,
};

/// What a single maze cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Passage,
    Start,
    End,
    /// Part of the solution route.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Passage => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
            Tile::Route => "🟨".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Tile for `coord`, the endpoints taking precedence over the route.
fn tile_at(maze: &Maze, route: &HashSet<Coord>, coord: Coord) -> Tile {
    if coord == maze.start() {
        Tile::Start
    } else if coord == maze.end() {
        Tile::End
    } else if route.contains(&coord) {
        Tile::Route
    } else {
        match maze.grid()[coord] {
            Cell::Wall => Tile::Wall,
            Cell::Passage => Tile::Passage,
        }
    }
}

/// Print the maze row by row, overlaying `solution` when given.
pub fn print_maze<W: Write>(out: &mut W, maze: &Maze, solution: Option<&Path>) -> std::io::Result<()> {
    let route: HashSet<Coord> = solution
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();

    for y in 0..maze.rows() {
        for x in 0..maze.cols() {
            queue!(out, style::Print(tile_at(maze, &route, Coord::new(x, y))))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::generate, solvers::solve};

    #[test]
    fn test_tiles_have_fixed_width() {
        for tile in [Tile::Wall, Tile::Passage, Tile::Start, Tile::End, Tile::Route] {
            // Display asserts the width in debug builds
            assert!(!tile.to_string().is_empty());
        }
    }

    #[test]
    fn test_tile_precedence() {
        let maze = generate("42", 5, 5).unwrap();
        let path = solve(maze.grid(), maze.start(), maze.end());
        let route: HashSet<Coord> = path.iter().copied().collect();
        assert_eq!(tile_at(&maze, &route, Coord::new(1, 1)), Tile::Start);
        assert_eq!(tile_at(&maze, &route, Coord::new(3, 3)), Tile::End);
        assert_eq!(tile_at(&maze, &route, Coord::new(1, 2)), Tile::Route);
        assert_eq!(tile_at(&maze, &route, Coord::new(3, 1)), Tile::Passage);
        assert_eq!(tile_at(&maze, &route, Coord::new(0, 0)), Tile::Wall);
    }

    #[test]
    fn test_print_maze_rows() {
        let maze = generate("42", 5, 5).unwrap();
        let mut out = Vec::new();
        print_maze(&mut out, &maze, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 5);
    }
}
