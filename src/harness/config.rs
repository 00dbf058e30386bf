//! Benchmark configuration: input sizes, rank positions and trial counts.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Where in the descending order the benchmark asks for its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// k = 1
    Largest,
    /// k = size / 2 (at least 1)
    Middle,
    /// k = size
    Smallest,
}

impl Position {
    pub fn all() -> &'static [Position] {
        &[Position::Largest, Position::Middle, Position::Smallest]
    }

    /// The rank this position stands for in an input of `size` elements.
    pub fn k_for(self, size: usize) -> usize {
        match self {
            Position::Largest => 1,
            Position::Middle => (size / 2).max(1),
            Position::Smallest => size,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Largest => "1st largest",
            Position::Middle => "Middle",
            Position::Smallest => "Last (smallest)",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Label written into every record.
    pub language: String,
    /// Input sizes, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Rank positions benchmarked for every size.
    pub positions: Vec<Position>,
    /// Random inputs generated per (size, position) pair.
    pub trials: usize,
    /// Seed for input generation and pivot choice; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Where the JSON results go, relative to the working directory.
    pub output: PathBuf,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            language: "Rust".to_string(),
            sizes: vec![100, 1_000, 10_000, 100_000],
            positions: Position::all().to_vec(),
            trials: 20,
            seed: None,
            output: PathBuf::from("rust_results.json"),
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn with_positions(mut self, positions: impl Into<Vec<Position>>) -> Self {
        self.positions = positions.into();
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Number of (size, position) groups the run will produce.
    pub fn group_count(&self) -> usize {
        self.sizes.len() * self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_for_positions() {
        assert_eq!(Position::Largest.k_for(100), 1);
        assert_eq!(Position::Middle.k_for(100), 50);
        assert_eq!(Position::Smallest.k_for(100), 100);
    }

    #[test]
    fn test_middle_never_zero() {
        assert_eq!(Position::Middle.k_for(1), 1);
        assert_eq!(Position::Middle.k_for(3), 1);
    }

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.sizes, vec![100, 1_000, 10_000, 100_000]);
        assert_eq!(config.trials, 20);
        assert_eq!(config.group_count(), 12);
        assert_eq!(config.output, PathBuf::from("rust_results.json"));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = BenchmarkConfig::default()
            .with_sizes([10, 20])
            .with_positions([Position::Middle])
            .with_trials(3)
            .with_seed(99)
            .with_language("Rust (test)");
        assert_eq!(config.group_count(), 2);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.language, "Rust (test)");
    }
}
