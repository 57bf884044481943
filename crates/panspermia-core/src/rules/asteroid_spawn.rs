//! Asteroid spawning - living planets of living stars eject rocks

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{chance, TickRule};
use crate::components::{Asteroid, Planet, Vec2};
use crate::config::SimulationConfig;
use crate::grid::Grid;

/// Launch distance from the planet, keeps a new asteroid off its own planet
pub const LAUNCH_OFFSET: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsteroidSpawnStats {
    pub asteroids_spawned: u64,
    pub asteroids_with_life_spawned: u64,
}

/// At most one asteroid per qualifying planet per tick
#[derive(Debug, Clone)]
pub struct AsteroidSpawn {
    pub enabled: bool,
    pub stats: AsteroidSpawnStats,
}

impl Default for AsteroidSpawn {
    fn default() -> Self {
        Self {
            enabled: true,
            stats: AsteroidSpawnStats::default(),
        }
    }
}

impl AsteroidSpawn {
    /// Roll for an asteroid from one planet; more life means more launches
    fn attempt_spawn(
        &mut self,
        planet: &Planet,
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) -> Option<Asteroid> {
        let spawn_chance = config.asteroid_spawn_chance
            * (1.0 + planet.life_level * config.life_level_asteroid_multiplier);
        if !chance(rng, spawn_chance) {
            return None;
        }

        let angle = rng.gen_range(0.0..TAU);
        let direction = Vec2::from_angle(angle);
        let velocity = direction * config.asteroid_speed;
        let position = planet.position.to_vec2() + direction * LAUNCH_OFFSET;

        let contains_life = chance(rng, config.asteroid_life_base_chance);
        let viability = if contains_life {
            config.asteroid_life_initial_viability
        } else {
            0.0
        };

        self.stats.asteroids_spawned += 1;
        if contains_life {
            self.stats.asteroids_with_life_spawned += 1;
        }
        Some(Asteroid::new(position, velocity, contains_life, viability))
    }
}

impl TickRule for AsteroidSpawn {
    fn name(&self) -> &'static str {
        "AsteroidSpawn"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(&mut self, grid: &mut Grid, config: &SimulationConfig, rng: &mut impl Rng) {
        let mut spawned = Vec::new();
        for star in grid.stars.iter().filter(|s| s.is_alive) {
            for planet in star.planets.iter().filter(|p| p.has_life) {
                if let Some(asteroid) = self.attempt_spawn(planet, config, rng) {
                    spawned.push(asteroid);
                }
            }
        }
        for asteroid in spawned {
            grid.add_asteroid(asteroid);
        }
    }

    fn reset_stats(&mut self) {
        self.stats = AsteroidSpawnStats::default();
    }
}
