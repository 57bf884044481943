//! Planet life dynamics - spontaneous life, growth, decline, extinction

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{chance, TickRule};
use crate::components::Planet;
use crate::config::SimulationConfig;
use crate::grid::Grid;

/// Life level change per successful growth or decline trial
pub const LIFE_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetLifeStats {
    pub spontaneous_life_events: u64,
    pub life_extinctions: u64,
}

/// Updates life on every planet, star by star
#[derive(Debug, Clone)]
pub struct PlanetLife {
    pub enabled: bool,
    pub stats: PlanetLifeStats,
}

impl Default for PlanetLife {
    fn default() -> Self {
        Self {
            enabled: true,
            stats: PlanetLifeStats::default(),
        }
    }
}

impl PlanetLife {
    /// Life may appear on its own, more readily on habitable worlds
    fn check_spontaneous_life(
        &mut self,
        planet: &mut Planet,
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) {
        if chance(rng, config.spontaneous_life_chance * planet.habitability) {
            let level = rng.gen_range(0.1..=0.3);
            planet.seed_life(level);
            self.stats.spontaneous_life_events += 1;
            debug!(
                "spontaneous life at ({}, {}) level {:.2}",
                planet.position.x, planet.position.y, level
            );
        }
    }

    /// Independent growth and decline trials; growth applies first
    fn update_life_level(
        &mut self,
        planet: &mut Planet,
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) {
        let growth_chance = config.life_growth_chance * planet.habitability;
        let decline_chance = config.life_decline_chance
            * (2.0 - planet.habitability * config.habitability_sustain_multiplier);

        if chance(rng, growth_chance) {
            planet.grow_life(LIFE_STEP);
        }

        if chance(rng, decline_chance) && planet.decline_life(LIFE_STEP) {
            self.stats.life_extinctions += 1;
            debug!(
                "life died out at ({}, {})",
                planet.position.x, planet.position.y
            );
        }
    }
}

impl TickRule for PlanetLife {
    fn name(&self) -> &'static str {
        "PlanetLife"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(&mut self, grid: &mut Grid, config: &SimulationConfig, rng: &mut impl Rng) {
        for star in grid.stars.iter_mut() {
            let star_alive = star.is_alive;
            for planet in star.planets.iter_mut() {
                if !star_alive {
                    // No sunlight: life dies immediately and never returns
                    if planet.has_life {
                        planet.clear_life();
                        self.stats.life_extinctions += 1;
                        debug!(
                            "life on ({}, {}) died with its star",
                            planet.position.x, planet.position.y
                        );
                    }
                    continue;
                }

                if !planet.has_life {
                    self.check_spontaneous_life(planet, config, rng);
                }

                // Re-checked: life seeded just now also grows/declines this tick
                if planet.has_life {
                    self.update_life_level(planet, config, rng);
                }
            }
        }
    }

    fn reset_stats(&mut self) {
        self.stats = PlanetLifeStats::default();
    }
}
