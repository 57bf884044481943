//! Error types for the simulation

use thiserror::Error;

/// A configuration that cannot produce a meaningful simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("grid dimensions must not exceed 2147483647 (got {width}x{height})")]
    GridTooLarge { width: u32, height: u32 },

    #[error("star lifetime range is inverted: min {min} > max {max}")]
    InvertedLifetime { min: u32, max: u32 },

    #[error("habitability range is inverted: min {min} > max {max}")]
    InvertedHabitability { min: f64, max: f64 },

    #[error("{name} must be a finite number (got {value})")]
    NotFinite { name: &'static str, value: f64 },

    #[error("planet orbit radius must be at least 1 (got {0})")]
    OrbitTooSmall(u32),

    #[error("{name} must be a probability in [0, 1] (got {value})")]
    NotAProbability { name: &'static str, value: f64 },

    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },
}

/// Anything that can stop a simulation run
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("reporter failed: {0}")]
    Report(#[from] std::io::Error),
}
