use rand::Rng;

use crate::generators::DEFAULT_PROGRESS_INTERVAL;

/// Parameters for one generate / compact / solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Seed text. `None` or empty picks a fresh random seed.
    pub seed: Option<String>,
    pub rows: usize,
    pub cols: usize,
    /// Compact walls into rectangles instead of one rectangle per wall cell.
    pub optimize: bool,
    /// Generation iterations between progress reports.
    pub progress_interval: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rows: 50,
            cols: 50,
            optimize: true,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl MazeConfig {
    /// The configured seed, or a random one if none was given.
    pub fn resolved_seed(&self) -> String {
        match self.seed.as_deref() {
            Some(seed) if !seed.is_empty() => seed.to_owned(),
            _ => rand::rng().random::<u32>().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MazeConfig::default();
        assert_eq!((config.rows, config.cols), (50, 50));
        assert!(config.optimize);
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn test_resolved_seed() {
        let config = MazeConfig {
            seed: Some("fixed".into()),
            ..Default::default()
        };
        assert_eq!(config.resolved_seed(), "fixed");

        let empty = MazeConfig {
            seed: Some(String::new()),
            ..Default::default()
        };
        let seed = empty.resolved_seed();
        assert!(!seed.is_empty());
        assert!(seed.parse::<u32>().is_ok());
    }
}
