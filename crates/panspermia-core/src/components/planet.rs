//! Planets - where life appears, grows, declines and gets seeded

use serde::{Deserialize, Serialize};

use super::{GridPos, StarId, Vec2};

/// Handle to a planet: owning star plus position in that star's planet list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId {
    pub star: usize,
    pub index: usize,
}

/// A planet orbiting a star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub position: GridPos,
    /// Back-reference to the owning star (lookup only)
    pub star: StarId,
    /// Fixed at creation
    pub habitability: f64,
    pub has_life: bool,
    /// 0.0 - 1.0, always 0.0 without life
    pub life_level: f64,
}

impl Planet {
    pub fn new(position: GridPos, star: StarId, habitability: f64) -> Self {
        Self {
            position,
            star,
            habitability,
            has_life: false,
            life_level: 0.0,
        }
    }

    /// Euclidean distance from the planet's cell to an arbitrary point
    pub fn distance_to(&self, point: &Vec2) -> f64 {
        self.position.to_vec2().distance(point)
    }

    /// Give the planet life at the given level (clamped to 0-1)
    pub fn seed_life(&mut self, level: f64) {
        self.has_life = true;
        self.life_level = level.clamp(0.0, 1.0);
    }

    /// Wipe out all life on the planet
    pub fn clear_life(&mut self) {
        self.has_life = false;
        self.life_level = 0.0;
    }

    /// Raise life level by `amount`, capped at 1.0
    pub fn grow_life(&mut self, amount: f64) {
        self.life_level = (self.life_level + amount).min(1.0);
    }

    /// Lower life level by `amount`, floored at 0.0.
    /// Returns true if this pushed life to extinction.
    pub fn decline_life(&mut self, amount: f64) -> bool {
        self.life_level = (self.life_level - amount).max(0.0);
        if self.life_level <= 0.0 {
            self.clear_life();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet() -> Planet {
        Planet::new(GridPos::new(10, 10), StarId(0), 0.5)
    }

    #[test]
    fn test_new_planet_is_lifeless() {
        let p = planet();
        assert!(!p.has_life);
        assert_eq!(p.life_level, 0.0);
    }

    #[test]
    fn test_growth_is_capped() {
        let mut p = planet();
        p.seed_life(0.95);
        p.grow_life(0.1);
        assert_eq!(p.life_level, 1.0);
    }

    #[test]
    fn test_decline_to_zero_is_extinction() {
        let mut p = planet();
        p.seed_life(0.05);
        assert!(p.decline_life(0.1));
        assert!(!p.has_life);
        assert_eq!(p.life_level, 0.0);
    }

    #[test]
    fn test_partial_decline_keeps_life() {
        let mut p = planet();
        p.seed_life(0.5);
        assert!(!p.decline_life(0.1));
        assert!(p.has_life);
        assert!((p.life_level - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to() {
        let p = planet();
        assert!((p.distance_to(&Vec2::new(13.0, 14.0)) - 5.0).abs() < 1e-12);
    }
}
