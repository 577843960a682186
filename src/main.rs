use std::{io::Write, ops::ControlFlow};

use clap::Parser;
use crossterm::style::{Attribute, Color, Stylize};
use tracing_appender::non_blocking::WorkerGuard;

use seedmaze::{
    cli::Cli,
    compactor::{self, CompactionSummary},
    error::MazeResult,
    generators::generate_with_progress,
    render::{svg, terminal},
    solvers::solve,
};

/// Install the global subscriber. The returned guard must live until exit so buffered
/// file logs are flushed.
fn init_logging(cli: &Cli) -> std::io::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt().with_max_level(cli.log_level());
    match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, "seedmaze.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn run(cli: &Cli) -> MazeResult<()> {
    let config = cli.config();
    let seed = config.resolved_seed();
    tracing::info!(
        "Generating {}x{} maze with seed {:?}",
        config.rows,
        config.cols,
        seed
    );

    let maze = generate_with_progress(
        &seed,
        config.rows,
        config.cols,
        config.progress_interval,
        |progress| {
            tracing::info!(
                "Generating maze... {}% ({} cells carved)",
                progress.percent(),
                progress.carved
            );
            ControlFlow::Continue(())
        },
    )?;
    if !maze.end_is_room() {
        tracing::warn!("End cell {} is not a carved room", maze.end());
    }

    let walls = if config.optimize {
        compactor::compact(maze.grid())
    } else {
        compactor::per_cell(maze.grid())
    };
    let summary = CompactionSummary::new(maze.grid(), &walls);
    tracing::info!(
        "Optimized {} walls into {} rectangles ({}% reduction)",
        summary.wall_cells,
        summary.rects,
        summary.reduction_percent()
    );

    let solution = cli
        .solve
        .then(|| solve(maze.grid(), maze.start(), maze.end()));

    let mut stdout = std::io::stdout();
    if cli.print {
        terminal::print_maze(&mut stdout, &maze, solution.as_ref())?;
    }

    if let Some(path) = &cli.svg {
        let target = if path.is_dir() {
            path.join(svg::default_file_name(&maze))
        } else {
            path.clone()
        };
        std::fs::write(&target, svg::to_svg(&maze, &walls, solution.as_ref()))?;
        tracing::info!("Wrote {}", target.display());
    }

    let status = match &solution {
        Some(path) if path.is_empty() => String::from("No solution found.").with(Color::Red),
        Some(path) => format!("Solved in {} steps.", path.len()).with(Color::Green),
        None => format!(
            "Maze {}x{} (seed {:?}): {} wall rectangles.",
            maze.rows(),
            maze.cols(),
            maze.seed(),
            walls.len()
        )
        .with(Color::Green),
    };
    writeln!(stdout, "{}", status.attribute(Attribute::Bold))?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let _guard = match init_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
