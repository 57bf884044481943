//! Panspermia Core - life spreading between star systems on asteroids
//!
//! A discrete-time simulation of stars, their planets, and the asteroids
//! those planets throw off. Life appears and fades on planets; some
//! asteroids carry it away and, with luck, seed a lifeless world elsewhere.
//!
//! # Architecture
//!
//! - **Components**: plain entity data ([`Star`](components::Star) owns its
//!   [`Planet`](components::Planet)s; [`Asteroid`](components::Asteroid)s
//!   fly free)
//! - **Grid**: the world state container with bounds and lookup queries
//! - **Rules**: four ordered state transitions applied once per tick
//! - **Engine**: owns config, RNG, grid and rules; advances ticks and feeds
//!   reporters
//!
//! # Example
//!
//! ```rust,no_run
//! use panspermia_core::prelude::*;
//!
//! let config = SimulationConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//! let mut sim = Simulation::new(config).expect("valid config");
//!
//! for _ in 0..1000 {
//!     sim.tick();
//! }
//! println!("{} planets alive", sim.stats().living_planets);
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod grid;
pub mod report;
pub mod rules;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::SimulationConfig;
    pub use crate::engine::{RunOutcome, SimRng, Simulation};
    pub use crate::error::{ConfigError, SimError};
    pub use crate::grid::Grid;
    pub use crate::report::{Reporter, Snapshot, WorldStats};
    pub use crate::rules::{RulePipeline, RuleStats, TickRule};
}
