//! Reporting interface - read-only views handed to renderers

use std::io;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::rules::RuleStats;

/// Population counts at one moment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldStats {
    pub tick: u64,
    pub total_stars: usize,
    pub alive_stars: usize,
    pub total_planets: usize,
    pub living_planets: usize,
    pub total_asteroids: usize,
    pub asteroids_with_life: usize,
}

impl WorldStats {
    pub fn collect(grid: &Grid, tick: u64) -> Self {
        Self {
            tick,
            total_stars: grid.stars.len(),
            alive_stars: grid.alive_star_count(),
            total_planets: grid.planet_count(),
            living_planets: grid.living_planets().count(),
            total_asteroids: grid.asteroids.len(),
            asteroids_with_life: grid.asteroids_with_life().count(),
        }
    }
}

/// Everything a reporter may look at. Borrowing the grid immutably keeps
/// reporters from touching simulation state.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub grid: &'a Grid,
    pub world: WorldStats,
    pub rules: RuleStats,
}

/// Something that renders or records snapshots
pub trait Reporter {
    /// Called on the display interval and once when a run ends
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Called after every tick. Most reporters don't care.
    fn on_tick(&mut self, _snapshot: &Snapshot<'_>) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        (**self).report(snapshot)
    }

    fn on_tick(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        (**self).on_tick(snapshot)
    }
}

/// Keeps every snapshot's counters in memory; handy for tests and tooling
#[derive(Debug, Clone, Default)]
pub struct StatsRecorder {
    pub history: Vec<(WorldStats, RuleStats)>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for StatsRecorder {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.history.push((snapshot.world, snapshot.rules));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::*;

    #[test]
    fn test_world_stats_collect() {
        let mut grid = Grid::new(30, 30);
        let mut star = Star::new(GridPos::new(5, 5), 10);
        let mut living = Planet::new(GridPos::new(6, 5), StarId(0), 0.5);
        living.seed_life(0.4);
        star.add_planet(living);
        star.add_planet(Planet::new(GridPos::new(4, 5), StarId(0), 0.5));
        grid.add_star(star);
        let mut dead = Star::new(GridPos::new(20, 20), 10);
        dead.is_alive = false;
        grid.add_star(dead);
        grid.add_asteroid(Asteroid::new(Vec2::new(1.0, 1.0), Vec2::ZERO, true, 0.5));
        grid.add_asteroid(Asteroid::new(Vec2::new(2.0, 1.0), Vec2::ZERO, false, 0.0));

        let stats = WorldStats::collect(&grid, 7);
        assert_eq!(
            stats,
            WorldStats {
                tick: 7,
                total_stars: 2,
                alive_stars: 1,
                total_planets: 2,
                living_planets: 1,
                total_asteroids: 2,
                asteroids_with_life: 1,
            }
        );
    }
}
