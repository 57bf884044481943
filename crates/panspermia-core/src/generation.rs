//! World generation - star placement, planetary systems, initial life

use std::f64::consts::TAU;

use log::info;
use rand::seq::index;
use rand::Rng;

use crate::components::*;
use crate::config::SimulationConfig;
use crate::grid::Grid;

/// Build a fresh grid from the configuration.
///
/// Draw order per star is position, lifetime, planets; initial life is
/// seeded once every star exists.
pub fn generate_world(config: &SimulationConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(config.grid_width, config.grid_height);

    for _ in 0..config.num_stars {
        let position = find_star_position(&grid, config, rng);
        let lifetime = rng.gen_range(config.star_min_lifetime..=config.star_max_lifetime);
        let star_id = grid.add_star(Star::new(position, lifetime));
        spawn_planets_for_star(&mut grid, star_id, config, rng);
    }

    let seeded = seed_initial_life(&mut grid, config.initial_life_planets, rng);

    info!(
        "generated {}x{} world: {} stars, {} planets, {} seeded with life",
        grid.width,
        grid.height,
        grid.stars.len(),
        grid.planet_count(),
        seeded
    );

    grid
}

/// Pick a cell at least `min_star_separation` from every existing star.
///
/// Falls back to an unconstrained cell once the attempts run out, so a
/// crowded grid still gets its stars.
pub fn find_star_position(grid: &Grid, config: &SimulationConfig, rng: &mut impl Rng) -> GridPos {
    for _ in 0..config.star_placement_attempts {
        let candidate = random_cell(grid, rng);
        let clear = grid
            .stars
            .iter()
            .all(|s| s.position.distance(&candidate) >= config.min_star_separation);
        if clear {
            return candidate;
        }
    }
    random_cell(grid, rng)
}

fn random_cell(grid: &Grid, rng: &mut impl Rng) -> GridPos {
    GridPos::new(
        rng.gen_range(0..grid.width as i32),
        rng.gen_range(0..grid.height as i32),
    )
}

/// Roll a planetary system for the star and attach it
pub fn spawn_planets_for_star(
    grid: &mut Grid,
    star_id: StarId,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) {
    let Some(star_position) = grid.star(star_id).map(|s| s.position) else {
        return;
    };

    let num_planets = (0..config.max_planets_per_star)
        .filter(|_| rng.gen::<f64>() < config.planet_spawn_chance)
        .count();

    let max_x = grid.width as i32 - 1;
    let max_y = grid.height as i32 - 1;
    let mut planets = Vec::with_capacity(num_planets);

    for _ in 0..num_planets {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(1.0..=config.planet_orbit_radius as f64);

        // Offsets truncate toward zero, so planets sit on whole cells
        let x = star_position.x.saturating_add((angle.cos() * distance) as i32);
        let y = star_position.y.saturating_add((angle.sin() * distance) as i32);
        let position = GridPos::new(x.clamp(0, max_x), y.clamp(0, max_y));

        let habitability =
            rng.gen_range(config.planet_habitability_min..=config.planet_habitability_max);

        planets.push(Planet::new(position, star_id, habitability));
    }

    if let Some(star) = grid.stars.get_mut(star_id.0) {
        for planet in planets {
            star.add_planet(planet);
        }
    }
}

/// Give life to `count` distinct planets chosen uniformly at random.
///
/// Returns how many were seeded; an empty world seeds nothing.
pub fn seed_initial_life(grid: &mut Grid, count: u32, rng: &mut impl Rng) -> usize {
    let ids: Vec<PlanetId> = grid.planet_ids().collect();
    if ids.is_empty() {
        return 0;
    }

    let amount = (count as usize).min(ids.len());
    let chosen = index::sample(rng, ids.len(), amount);

    for i in chosen.iter() {
        let level = rng.gen_range(0.3..=0.7);
        if let Some(planet) = grid.planet_mut(ids[i]) {
            planet.seed_life(level);
        }
    }
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_world_shape() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = generate_world(&config, &mut rng);

        assert_eq!(grid.stars.len(), 10);
        assert!(grid.asteroids.is_empty());
        for (idx, star) in grid.stars.iter().enumerate() {
            assert!(star.is_alive);
            assert_eq!(star.age, 0);
            assert!((500..=2000).contains(&star.lifetime));
            assert!(star.planets.len() <= 5);
            for planet in &star.planets {
                assert_eq!(planet.star, StarId(idx));
                assert!(planet.position.x >= 0 && planet.position.x < 100);
                assert!(planet.position.y >= 0 && planet.position.y < 100);
                assert!(planet.position.distance(&star.position) <= 3.0 * std::f64::consts::SQRT_2);
                assert!((0.2..=1.0).contains(&planet.habitability));
            }
        }
    }

    #[test]
    fn test_initial_life_count() {
        let config = SimulationConfig {
            initial_life_planets: 4,
            planet_spawn_chance: 1.0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = generate_world(&config, &mut rng);

        assert_eq!(grid.planet_count(), 50);
        let living: Vec<&Planet> = grid.living_planets().collect();
        assert_eq!(living.len(), 4);
        for planet in living {
            assert!((0.3..=0.7).contains(&planet.life_level));
        }
    }

    #[test]
    fn test_initial_life_capped_by_planet_count() {
        let mut grid = Grid::new(20, 20);
        let mut star = Star::new(GridPos::new(5, 5), 10);
        star.add_planet(Planet::new(GridPos::new(6, 5), StarId(0), 0.5));
        star.add_planet(Planet::new(GridPos::new(4, 5), StarId(0), 0.5));
        grid.add_star(star);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(seed_initial_life(&mut grid, 10, &mut rng), 2);
        assert_eq!(grid.living_planets().count(), 2);
    }

    #[test]
    fn test_empty_world_seeds_nothing() {
        let config = SimulationConfig {
            num_stars: 0,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = generate_world(&config, &mut rng);
        assert!(grid.stars.is_empty());
        assert_eq!(grid.planet_count(), 0);
    }

    #[test]
    fn test_stars_respect_separation_when_room() {
        let config = SimulationConfig {
            num_stars: 4,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let grid = generate_world(&config, &mut rng);
        for (i, a) in grid.stars.iter().enumerate() {
            for b in grid.stars.iter().skip(i + 1) {
                assert!(a.position.distance(&b.position) >= 10.0);
            }
        }
    }

    #[test]
    fn test_crowded_grid_still_places_stars() {
        let config = SimulationConfig {
            grid_width: 5,
            grid_height: 5,
            num_stars: 6,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = generate_world(&config, &mut rng);
        assert_eq!(grid.stars.len(), 6);
        for star in &grid.stars {
            assert!(star.position.x < 5 && star.position.y < 5);
        }
    }

    #[test]
    fn test_widest_grid_generates_in_bounds() {
        let config = SimulationConfig {
            grid_width: i32::MAX as u32,
            grid_height: 3,
            num_stars: 4,
            planet_spawn_chance: 1.0,
            planet_orbit_radius: 1_000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let grid = generate_world(&config, &mut rng);
        assert_eq!(grid.stars.len(), 4);
        for planet in grid.all_planets() {
            assert!(planet.position.x >= 0 && planet.position.x < i32::MAX);
            assert!(planet.position.y >= 0 && planet.position.y < 3);
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let config = SimulationConfig::default();
        let a = generate_world(&config, &mut ChaCha8Rng::seed_from_u64(5));
        let b = generate_world(&config, &mut ChaCha8Rng::seed_from_u64(5));
        let positions = |g: &Grid| -> Vec<(GridPos, u32, usize)> {
            g.stars.iter().map(|s| (s.position, s.lifetime, s.planets.len())).collect()
        };
        assert_eq!(positions(&a), positions(&b));
    }
}
