//! Star aging - every living star gets one tick older and may burn out

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::TickRule;
use crate::config::SimulationConfig;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarAgingStats {
    pub stars_died: u64,
}

/// Ages stars and marks them dead once they reach their lifetime
#[derive(Debug, Clone)]
pub struct StarAging {
    pub enabled: bool,
    pub stats: StarAgingStats,
}

impl Default for StarAging {
    fn default() -> Self {
        Self {
            enabled: true,
            stats: StarAgingStats::default(),
        }
    }
}

impl TickRule for StarAging {
    fn name(&self) -> &'static str {
        "StarAging"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(&mut self, grid: &mut Grid, _config: &SimulationConfig, _rng: &mut impl Rng) {
        for (idx, star) in grid.stars.iter_mut().enumerate() {
            if star.age_one_tick() {
                debug!(
                    "star {} at ({}, {}) died at age {}",
                    idx, star.position.x, star.position.y, star.age
                );
                self.stats.stars_died += 1;
            }
        }
    }

    fn reset_stats(&mut self) {
        self.stats = StarAgingStats::default();
    }
}
