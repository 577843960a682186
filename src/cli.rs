use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::{config::MazeConfig, generators::DEFAULT_PROGRESS_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "seedmaze", version, about = "Seeded perfect-maze generator and solver")]
pub struct Cli {
    /// Seed text; a random one is picked when omitted
    #[arg(long)]
    pub seed: Option<String>,
    #[arg(long, default_value_t = 50)]
    pub rows: usize,
    #[arg(long, default_value_t = 50)]
    pub cols: usize,
    /// Emit one rectangle per wall cell instead of compacting
    #[arg(long)]
    pub no_optimize: bool,
    /// Solve from the start to the end cell
    #[arg(long)]
    pub solve: bool,
    /// Write an SVG document to this path
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,
    /// Print the maze to the terminal
    #[arg(long)]
    pub print: bool,
    /// Generation iterations between progress reports
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_every: usize,
    /// Write logs to DIR/seedmaze.log instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            seed: self.seed.clone(),
            rows: self.rows,
            cols: self.cols,
            optimize: !self.no_optimize,
            progress_interval: self.progress_every,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::try_parse_from(["seedmaze"]).unwrap();
        assert_eq!(cli.config(), MazeConfig::default());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "seedmaze",
            "--seed",
            "42",
            "--rows",
            "5",
            "--cols",
            "7",
            "--no-optimize",
            "--solve",
            "--svg",
            "out.svg",
            "-vv",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.seed.as_deref(), Some("42"));
        assert_eq!((config.rows, config.cols), (5, 7));
        assert!(!config.optimize);
        assert!(cli.solve);
        assert_eq!(cli.svg, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_non_numeric_rows() {
        assert!(Cli::try_parse_from(["seedmaze", "--rows", "many"]).is_err());
    }
}
