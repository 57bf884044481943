//! Rules - the per-tick state transitions
//!
//! Four rules run once per tick, always in this order:
//!
//! 1. [`StarAging`] - stars age and burn out
//! 2. [`PlanetLife`] - life appears, grows, declines, dies with its star
//! 3. [`AsteroidSpawn`] - living planets eject asteroids
//! 4. [`AsteroidMovement`] - asteroids decay, move, leave the grid or hit planets
//!
//! The order is load-bearing: star death must be visible to planet life,
//! and planet life levels must be settled before spawn chances are scaled.
//! Every rule draws from the single RNG passed in, so the draw order across
//! rules and entities is part of the replay contract.

mod star_aging;
mod planet_life;
mod asteroid_spawn;
mod asteroid_movement;

pub use star_aging::*;
pub use planet_life::*;
pub use asteroid_spawn::*;
pub use asteroid_movement::*;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::grid::Grid;

/// Common surface of every rule, so each one can be driven on its own
pub trait TickRule {
    /// Human-readable name used in statistics output
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Apply the rule to the whole grid for one tick
    fn apply(&mut self, grid: &mut Grid, config: &SimulationConfig, rng: &mut impl Rng);

    fn reset_stats(&mut self);
}

/// Bernoulli trial: true with probability `p`
pub(crate) fn chance(rng: &mut impl Rng, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Counters from all four rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStats {
    pub star_aging: StarAgingStats,
    pub planet_life: PlanetLifeStats,
    pub asteroid_spawn: AsteroidSpawnStats,
    pub asteroid_movement: AsteroidMovementStats,
}

/// The fixed, ordered rule list
#[derive(Debug, Clone, Default)]
pub struct RulePipeline {
    pub star_aging: StarAging,
    pub planet_life: PlanetLife,
    pub asteroid_spawn: AsteroidSpawn,
    pub asteroid_movement: AsteroidMovement,
}

impl RulePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every enabled rule once, in pipeline order
    pub fn run_tick(&mut self, grid: &mut Grid, config: &SimulationConfig, rng: &mut impl Rng) {
        run_rule(&mut self.star_aging, grid, config, rng);
        run_rule(&mut self.planet_life, grid, config, rng);
        run_rule(&mut self.asteroid_spawn, grid, config, rng);
        run_rule(&mut self.asteroid_movement, grid, config, rng);
    }

    pub fn stats(&self) -> RuleStats {
        RuleStats {
            star_aging: self.star_aging.stats,
            planet_life: self.planet_life.stats,
            asteroid_spawn: self.asteroid_spawn.stats,
            asteroid_movement: self.asteroid_movement.stats,
        }
    }

    pub fn reset_stats(&mut self) {
        self.star_aging.reset_stats();
        self.planet_life.reset_stats();
        self.asteroid_spawn.reset_stats();
        self.asteroid_movement.reset_stats();
    }

    /// Rule names in execution order
    pub fn names(&self) -> [&'static str; 4] {
        [
            self.star_aging.name(),
            self.planet_life.name(),
            self.asteroid_spawn.name(),
            self.asteroid_movement.name(),
        ]
    }
}

fn run_rule(
    rule: &mut impl TickRule,
    grid: &mut Grid,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) {
    if rule.is_enabled() {
        rule.apply(grid, config, rng);
    }
}
