//! Stars - fixed anchors that own their planets and eventually burn out

use serde::{Deserialize, Serialize};

use super::{GridPos, Planet};

/// Index of a star in the grid's star list.
///
/// Stars are never removed, so an id stays valid for the lifetime of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StarId(pub usize);

/// A star system: one star plus the planets it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub position: GridPos,
    /// Ticks until natural death, drawn once at creation
    pub lifetime: u32,
    /// Ticks lived so far
    pub age: u32,
    pub is_alive: bool,
    pub planets: Vec<Planet>,
}

impl Star {
    pub fn new(position: GridPos, lifetime: u32) -> Self {
        Self {
            position,
            lifetime,
            age: 0,
            is_alive: true,
            planets: Vec::new(),
        }
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }

    /// Advance age by one tick. Returns true if the star died on this tick.
    ///
    /// Dead stars are inert: calling this on one does nothing.
    pub fn age_one_tick(&mut self) -> bool {
        if !self.is_alive {
            return false;
        }
        self.age += 1;
        if self.age >= self.lifetime {
            self.is_alive = false;
            return true;
        }
        false
    }

    /// Ticks left before the star dies (0 once dead)
    pub fn remaining_lifetime(&self) -> u32 {
        if self.is_alive {
            self.lifetime.saturating_sub(self.age)
        } else {
            0
        }
    }

    pub fn living_planet_count(&self) -> usize {
        self.planets.iter().filter(|p| p.has_life).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_dies_at_lifetime() {
        let mut star = Star::new(GridPos::new(5, 5), 3);
        assert!(!star.age_one_tick());
        assert!(!star.age_one_tick());
        assert!(star.age_one_tick());
        assert!(!star.is_alive);
        assert_eq!(star.age, 3);
    }

    #[test]
    fn test_dead_star_is_inert() {
        let mut star = Star::new(GridPos::new(0, 0), 1);
        assert!(star.age_one_tick());
        for _ in 0..10 {
            assert!(!star.age_one_tick());
        }
        assert_eq!(star.age, 1);
        assert!(!star.is_alive);
        assert_eq!(star.remaining_lifetime(), 0);
    }

    #[test]
    fn test_living_planet_count() {
        let mut star = Star::new(GridPos::new(4, 4), 10);
        let mut alive = Planet::new(GridPos::new(5, 4), StarId(0), 0.8);
        alive.seed_life(0.5);
        star.add_planet(alive);
        star.add_planet(Planet::new(GridPos::new(3, 4), StarId(0), 0.8));
        assert_eq!(star.living_planet_count(), 1);
        assert_eq!(star.remaining_lifetime(), 10);
        star.age_one_tick();
        assert_eq!(star.remaining_lifetime(), 9);
    }
}
