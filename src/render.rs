pub mod svg;
pub mod terminal;

pub use svg::{default_file_name, to_svg};
pub use terminal::Tile;
