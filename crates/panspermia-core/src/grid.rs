//! Grid - the world state container
//!
//! Owns every star (and through them every planet) plus the live asteroid
//! population. Enumeration order is always star insertion order, then each
//! star's planet order; rules depend on it for deterministic replay.

use serde::{Deserialize, Serialize};

use crate::components::*;

/// Collision radius used when matching an asteroid to a planet
pub const COLLISION_TOLERANCE: f64 = 1.0;

/// The simulated region of space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub stars: Vec<Star>,
    pub asteroids: Vec<Asteroid>,
    next_asteroid_id: u64,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stars: Vec::new(),
            asteroids: Vec::new(),
            next_asteroid_id: 0,
        }
    }

    /// Append a star and return its id.
    ///
    /// Planets already attached to the star are re-pointed at the new id.
    pub fn add_star(&mut self, mut star: Star) -> StarId {
        let id = StarId(self.stars.len());
        for planet in &mut star.planets {
            planet.star = id;
        }
        self.stars.push(star);
        id
    }

    /// Append an asteroid, giving it a fresh identity
    pub fn add_asteroid(&mut self, mut asteroid: Asteroid) -> AsteroidId {
        let id = AsteroidId(self.next_asteroid_id);
        self.next_asteroid_id += 1;
        asteroid.id = id;
        self.asteroids.push(asteroid);
        id
    }

    /// Remove an asteroid by identity. Returns false if it was already gone.
    pub fn remove_asteroid(&mut self, id: AsteroidId) -> bool {
        match self.asteroids.iter().position(|a| a.id == id) {
            Some(idx) => {
                self.asteroids.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn asteroid(&self, id: AsteroidId) -> Option<&Asteroid> {
        self.asteroids.iter().find(|a| a.id == id)
    }

    /// Half-open bounds check: `0 <= x < width` and `0 <= y < height`
    pub fn in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width as f64 && y >= 0.0 && y < self.height as f64
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id.0)
    }

    /// Resolve a planet's back-reference
    pub fn parent_star(&self, planet: &Planet) -> Option<&Star> {
        self.star(planet.star)
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.stars.get(id.star)?.planets.get(id.index)
    }

    pub fn planet_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.stars.get_mut(id.star)?.planets.get_mut(id.index)
    }

    /// All planets in stable order (star order, then planet order)
    pub fn all_planets(&self) -> impl Iterator<Item = &Planet> {
        self.stars.iter().flat_map(|s| s.planets.iter())
    }

    /// All planets with their handles, in the same order as [`Grid::all_planets`]
    pub fn planet_ids(&self) -> impl Iterator<Item = PlanetId> + '_ {
        self.stars.iter().enumerate().flat_map(|(star, s)| {
            (0..s.planets.len()).map(move |index| PlanetId { star, index })
        })
    }

    pub fn planet_count(&self) -> usize {
        self.stars.iter().map(|s| s.planets.len()).sum()
    }

    pub fn living_planets(&self) -> impl Iterator<Item = &Planet> {
        self.all_planets().filter(|p| p.has_life)
    }

    pub fn asteroids_with_life(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.contains_life)
    }

    pub fn alive_star_count(&self) -> usize {
        self.stars.iter().filter(|s| s.is_alive).count()
    }

    /// First planet (in stable order) within `tolerance` of `position`.
    ///
    /// Deliberately first-match, not nearest: when two planets qualify the
    /// earlier-enumerated one always wins.
    pub fn find_planet_at_position(&self, position: &Vec2, tolerance: f64) -> Option<PlanetId> {
        self.planet_ids().find(|&id| {
            self.planet(id)
                .map(|p| p.distance_to(position) <= tolerance)
                .unwrap_or(false)
        })
    }
}
