//! Shared configuration types for CLI commands

use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output (raises the default log level to `debug`)
    pub verbose: bool,

    /// Print the "go to move" list after every board
    pub show_history: bool,

    /// Emit JSON instead of text where a command supports it
    pub json: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_history: true,
            json: false,
        }
    }
}

impl CommonConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "noughts=debug" } else { "warn" }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Probability of jumping back before a move, exercising history truncation
    pub rewind_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: None,
            rewind_rate: 0.0,
        }
    }
}
