//! Asteroid movement - viability decay, travel, exits and planet impacts
//!
//! Removals are two-phase: the pass only records which asteroids are
//! finished, and the grid is filtered once the pass is over.

use std::collections::HashSet;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{chance, TickRule};
use crate::components::{AsteroidId, PlanetId};
use crate::config::SimulationConfig;
use crate::grid::{Grid, COLLISION_TOLERANCE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsteroidMovementStats {
    pub asteroids_exited_grid: u64,
    pub asteroid_life_died: u64,
    pub collisions: u64,
    pub successful_seedings: u64,
}

/// Moves every asteroid one step and resolves what it runs into
#[derive(Debug, Clone)]
pub struct AsteroidMovement {
    pub enabled: bool,
    pub stats: AsteroidMovementStats,
}

impl Default for AsteroidMovement {
    fn default() -> Self {
        Self {
            enabled: true,
            stats: AsteroidMovementStats::default(),
        }
    }
}

impl AsteroidMovement {
    /// Try to seed a lifeless planet from a life-carrying asteroid.
    ///
    /// The asteroid is consumed by the caller whatever happens here.
    fn handle_collision(
        &mut self,
        grid: &mut Grid,
        asteroid_idx: usize,
        planet_id: PlanetId,
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) {
        let (carries_life, viability) = {
            let asteroid = &grid.asteroids[asteroid_idx];
            (asteroid.contains_life, asteroid.life_viability)
        };
        let Some(planet) = grid.planet_mut(planet_id) else {
            return;
        };
        if !carries_life || planet.has_life {
            return;
        }

        let success_chance = config.asteroid_seed_base_success
            * planet.habitability
            * config.habitability_seeding_multiplier
            * viability;
        if chance(rng, success_chance) {
            let level = rng.gen_range(0.2..=0.5);
            planet.seed_life(level);
            self.stats.successful_seedings += 1;
            debug!(
                "asteroid seeded life on ({}, {}) level {:.2}",
                planet.position.x, planet.position.y, level
            );
        }
    }
}

impl TickRule for AsteroidMovement {
    fn name(&self) -> &'static str {
        "AsteroidMovement"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply(&mut self, grid: &mut Grid, config: &SimulationConfig, rng: &mut impl Rng) {
        let mut finished: HashSet<AsteroidId> = HashSet::new();

        // The asteroid list does not change length during the pass
        for idx in 0..grid.asteroids.len() {
            let asteroid = &mut grid.asteroids[idx];

            if asteroid.decay_life(config.asteroid_life_decay_rate) {
                self.stats.asteroid_life_died += 1;
            }

            if !asteroid.in_transit && chance(rng, config.asteroid_leave_system_chance) {
                asteroid.in_transit = true;
            }

            asteroid.advance();
            let id = asteroid.id();
            let position = asteroid.position;

            if !grid.in_bounds(position.x, position.y) {
                finished.insert(id);
                self.stats.asteroids_exited_grid += 1;
                continue;
            }

            if let Some(planet_id) = grid.find_planet_at_position(&position, COLLISION_TOLERANCE) {
                self.handle_collision(grid, idx, planet_id, config, rng);
                finished.insert(id);
                self.stats.collisions += 1;
            }
        }

        if !finished.is_empty() {
            grid.asteroids.retain(|a| !finished.contains(&a.id()));
        }
    }

    fn reset_stats(&mut self) {
        self.stats = AsteroidMovementStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn empty_grid() -> Grid {
        let mut grid = Grid::new(20, 20);
        let mut star = Star::new(GridPos::new(2, 2), 1000);
        star.add_planet(Planet::new(GridPos::new(10, 10), StarId(0), 1.0));
        grid.add_star(star);
        grid
    }

    fn certain_seeding() -> SimulationConfig {
        SimulationConfig {
            asteroid_seed_base_success: 1.0,
            habitability_seeding_multiplier: 1.5,
            asteroid_life_decay_rate: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_viability_decay_clamps_and_kills() {
        let mut grid = empty_grid();
        grid.add_asteroid(Asteroid::new(Vec2::new(3.0, 15.0), Vec2::new(1.0, 0.0), true, 0.001));
        let config = SimulationConfig {
            asteroid_life_decay_rate: 0.01,
            ..Default::default()
        };
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        rule.apply(&mut grid, &config, &mut rng);

        let asteroid = &grid.asteroids[0];
        assert!(!asteroid.contains_life);
        assert_eq!(asteroid.life_viability, 0.0);
        assert_eq!(asteroid.position, Vec2::new(4.0, 15.0));
        assert_eq!(rule.stats.asteroid_life_died, 1);
    }

    #[test]
    fn test_exit_removes_without_collision() {
        let mut grid = empty_grid();
        // Steps onto x = 20.0, which is out of a 20-wide grid
        grid.add_asteroid(Asteroid::new(Vec2::new(19.5, 10.0), Vec2::new(0.5, 0.0), true, 1.0));
        grid.add_asteroid(Asteroid::new(Vec2::new(0.2, 5.0), Vec2::new(-1.0, 0.0), false, 0.0));
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        rule.apply(&mut grid, &certain_seeding(), &mut rng);

        assert!(grid.asteroids.is_empty());
        assert_eq!(rule.stats.asteroids_exited_grid, 2);
        assert_eq!(rule.stats.collisions, 0);
    }

    #[test]
    fn test_collision_seeds_lifeless_planet() {
        let mut grid = empty_grid();
        grid.add_asteroid(Asteroid::new(Vec2::new(8.5, 10.0), Vec2::new(1.0, 0.0), true, 1.0));
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        rule.apply(&mut grid, &certain_seeding(), &mut rng);

        let planet = &grid.stars[0].planets[0];
        assert!(planet.has_life);
        assert!((0.2..=0.5).contains(&planet.life_level));
        assert!(grid.asteroids.is_empty());
        assert_eq!(rule.stats.collisions, 1);
        assert_eq!(rule.stats.successful_seedings, 1);
    }

    #[test]
    fn test_lifeless_asteroid_consumed_without_effect() {
        let mut grid = empty_grid();
        grid.add_asteroid(Asteroid::new(Vec2::new(8.5, 10.0), Vec2::new(1.0, 0.0), false, 0.0));
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        rule.apply(&mut grid, &certain_seeding(), &mut rng);

        assert!(!grid.stars[0].planets[0].has_life);
        assert!(grid.asteroids.is_empty());
        assert_eq!(rule.stats.collisions, 1);
        assert_eq!(rule.stats.successful_seedings, 0);
    }

    #[test]
    fn test_living_planet_not_reseeded() {
        let mut grid = empty_grid();
        grid.stars[0].planets[0].seed_life(0.9);
        grid.add_asteroid(Asteroid::new(Vec2::new(8.5, 10.0), Vec2::new(1.0, 0.0), true, 1.0));
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        rule.apply(&mut grid, &certain_seeding(), &mut rng);

        assert_eq!(grid.stars[0].planets[0].life_level, 0.9);
        assert!(grid.asteroids.is_empty());
        assert_eq!(rule.stats.collisions, 1);
        assert_eq!(rule.stats.successful_seedings, 0);
    }

    #[test]
    fn test_survivors_keep_order() {
        let mut grid = empty_grid();
        let a = grid.add_asteroid(Asteroid::new(Vec2::new(1.0, 18.0), Vec2::new(1.0, 0.0), false, 0.0));
        let b = grid.add_asteroid(Asteroid::new(Vec2::new(8.5, 10.0), Vec2::new(1.0, 0.0), false, 0.0));
        let c = grid.add_asteroid(Asteroid::new(Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), false, 0.0));
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        rule.apply(&mut grid, &certain_seeding(), &mut rng);

        let left: Vec<AsteroidId> = grid.asteroids.iter().map(|x| x.id()).collect();
        assert_eq!(left, vec![a, c]);
        assert!(grid.asteroid(b).is_none());
    }

    #[test]
    fn test_transit_flag_only_ever_set() {
        let mut grid = Grid::new(1000, 1000);
        grid.add_asteroid(Asteroid::new(Vec2::new(1.0, 500.0), Vec2::new(1.0, 0.0), false, 0.0));
        let config = SimulationConfig {
            asteroid_leave_system_chance: 1.0,
            ..Default::default()
        };
        let mut rule = AsteroidMovement::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..5 {
            rule.apply(&mut grid, &config, &mut rng);
            assert!(grid.asteroids[0].in_transit);
        }
    }
}
