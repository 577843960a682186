use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable. Every cell starts out as a wall.
    #[default]
    Wall,
    /// Carved and traversable.
    Passage,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_passage(self) -> bool {
        matches!(self, Cell::Passage)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Wall => '#',
            Cell::Passage => '.',
        };
        write!(f, "{}", symbol)
    }
}
