use std::ops::ControlFlow;

use seedmaze::{
    Cell, Coord, MazeError, SeededRandom,
    compactor::{CompactionSummary, compact, per_cell, rasterize},
    generate, generate_with_progress,
    render::svg,
    solve,
};

#[test]
fn seed_42_five_by_five_end_to_end() {
    let maze = generate("42", 5, 5).unwrap();
    let grid = maze.grid();

    assert!(grid.is_passage(Coord::new(1, 1)));
    assert!((0..5).all(|i| grid.is_wall(Coord::new(i, 0)) && grid.is_wall(Coord::new(i, 4))));
    assert!((0..5).all(|i| grid.is_wall(Coord::new(0, i)) && grid.is_wall(Coord::new(4, i))));

    let walls = compact(grid);
    assert_eq!(&rasterize(&walls, 5, 5), grid);

    let path = solve(grid, Coord::new(1, 1), Coord::new(3, 3));
    assert_eq!(path.first(), Some(Coord::new(1, 1)));
    assert_eq!(path.last(), Some(Coord::new(3, 3)));
    assert!(path.is_trail());
}

#[test]
fn three_by_three_single_cell() {
    for seed in ["", "a", "three"] {
        let maze = generate(seed, 3, 3).unwrap();
        assert_eq!(maze.grid().count(Cell::Passage), 1);
        assert_eq!(maze.start(), maze.end());
        let path = solve(maze.grid(), maze.start(), maze.end());
        assert_eq!(path.to_vec(), vec![Coord::new(1, 1)]);
    }
}

#[test]
fn every_iteration_carves_or_backtracks() {
    let mut reports = 0;
    let mut iterations = 0;
    let maze = generate_with_progress("replay", 9, 9, 1, |p| {
        reports += 1;
        iterations = p.iterations;
        ControlFlow::Continue(())
    })
    .unwrap();

    // Each of the 16 rooms is popped once; all but the start were pushed by a carve
    let rooms = 4 * 4;
    assert_eq!(iterations, 2 * rooms - 1);
    assert_eq!(reports, iterations);
    assert_eq!(maze.grid().count(Cell::Passage), 2 * rooms - 1);
}

#[test]
fn random_source_is_exposed_for_replay() {
    let mut rng = SeededRandom::new("42");
    let draws: Vec<f64> = rng.by_ref().take(3).collect();
    assert_eq!(draws[0], 889_417_639.0 / 2_147_483_648.0);
    assert!(draws.iter().all(|v| (0.0..1.0).contains(v)));
    let replay: Vec<f64> = SeededRandom::new("24").take(3).collect();
    assert_eq!(draws, replay);
}

#[test]
fn anagram_seeds_build_the_same_maze() {
    assert_eq!(
        generate("listen", 15, 21).unwrap().into_grid(),
        generate("silent", 15, 21).unwrap().into_grid()
    );
}

#[test]
fn compaction_shrinks_large_mazes() {
    let maze = generate("big", 101, 101).unwrap();
    let walls = compact(maze.grid());
    let summary = CompactionSummary::new(maze.grid(), &walls);
    assert_eq!(summary.wall_cells, per_cell(maze.grid()).len());
    assert!(summary.rects < summary.wall_cells);
    assert!(summary.reduction_percent() > 0);
    assert_eq!(&rasterize(&walls, 101, 101), maze.grid());
}

#[test]
fn too_small_is_rejected() {
    let err = generate("x", 3, 2).unwrap_err();
    assert!(matches!(err, MazeError::InvalidDimensions { rows: 3, cols: 2 }));
    assert_eq!(
        err.to_string(),
        "maze dimensions must be at least 3x3, got 3 rows x 2 cols"
    );
}

#[test]
fn svg_export_round_trip_through_rectangles() {
    let maze = generate("export", 11, 11).unwrap();
    let walls = compact(maze.grid());
    let path = solve(maze.grid(), maze.start(), maze.end());
    let doc = svg::to_svg(&maze, &walls, Some(&path));
    assert_eq!(doc.matches("<rect x=").count(), walls.len() + 2);
    assert!(doc.contains(r#"class="solution""#));
    assert_eq!(svg::default_file_name(&maze), "maze_11x11_export.svg");
}
