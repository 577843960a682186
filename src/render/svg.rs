use std::fmt::Write;

use crate::{compactor::Rect, maze::Maze, solvers::Path};

/// Pixels per maze cell in the exported document.
pub const CELL_PIXELS: usize = 10;

const WALL_FILL: &str = "#000000";
const START_FILL: &str = "#00ff00";
const END_FILL: &str = "#ff0000";
const ROUTE_STROKE: &str = "blue";

/// File name the original tool offers for a download.
pub fn default_file_name(maze: &Maze) -> String {
    format!("maze_{}x{}_{}.svg", maze.rows(), maze.cols(), maze.seed())
}

/// Render `walls` (compacted or per-cell) into a standalone SVG document.
/// The view box is in cell units; a solution, when given, is drawn through cell centres.
pub fn to_svg(maze: &Maze, walls: &[Rect], solution: Option<&Path>) -> String {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut doc = String::with_capacity(64 * (walls.len() + 4));

    // Writing into a String cannot fail
    let _ = writeln!(doc, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        doc,
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        cols * CELL_PIXELS,
        rows * CELL_PIXELS,
        cols,
        rows
    );
    let _ = writeln!(doc, r##"  <rect width="100%" height="100%" fill="#ffffff"/>"##);

    let _ = writeln!(doc, r#"  <g fill="{}">"#, WALL_FILL);
    for rect in walls {
        let _ = writeln!(
            doc,
            r#"    <rect x="{}" y="{}" width="{}" height="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height
        );
    }
    let _ = writeln!(doc, "  </g>");

    for (coord, fill) in [(maze.start(), START_FILL), (maze.end(), END_FILL)] {
        let _ = writeln!(
            doc,
            r#"  <rect x="{}" y="{}" width="1" height="1" fill="{}"/>"#,
            coord.x, coord.y, fill
        );
    }

    if let Some(path) = solution.filter(|p| !p.is_empty()) {
        let data = path
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let op = if i == 0 { 'M' } else { 'L' };
                format!("{} {}.5 {}.5", op, c.x, c.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            doc,
            r#"  <path class="solution" d="{}" stroke="{}" stroke-width="0.2" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
            data, ROUTE_STROKE
        );
    }

    doc.push_str("</svg>\n");
    doc
}
