//! Asteroids - ejected rocks that may carry life between systems

use serde::{Deserialize, Serialize};

use super::Vec2;

/// Identity of an asteroid within a grid, assigned when it is added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AsteroidId(pub u64);

impl std::fmt::Display for AsteroidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "asteroid#{}", self.0)
    }
}

/// An asteroid travelling in a straight line across the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub(crate) id: AsteroidId,
    pub position: Vec2,
    /// Fixed at spawn
    pub velocity: Vec2,
    pub contains_life: bool,
    /// 0.0 - 1.0, always 0.0 without life
    pub life_viability: f64,
    /// Set once the asteroid has left its home system
    pub in_transit: bool,
}

impl Asteroid {
    /// Create an asteroid. A lifeless asteroid always has zero viability.
    pub fn new(position: Vec2, velocity: Vec2, contains_life: bool, life_viability: f64) -> Self {
        Self {
            id: AsteroidId::default(),
            position,
            velocity,
            contains_life,
            life_viability: if contains_life {
                life_viability.clamp(0.0, 1.0)
            } else {
                0.0
            },
            in_transit: false,
        }
    }

    pub fn id(&self) -> AsteroidId {
        self.id
    }

    /// Move one step along the velocity
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Decay carried life by `rate`. Returns true if the life died on this call.
    pub fn decay_life(&mut self, rate: f64) -> bool {
        if !self.contains_life {
            return false;
        }
        self.life_viability -= rate;
        if self.life_viability <= 0.0 {
            self.contains_life = false;
            self.life_viability = 0.0;
            return true;
        }
        false
    }

    pub fn distance_to(&self, point: &Vec2) -> f64 {
        self.position.distance(point)
    }
}
