//! Simulation configuration
//!
//! Every tunable number the world generator and the rules consume. Defaults
//! give a 100x100 grid with ten stars and slow, rare panspermia. With
//! `#[serde(default)]` a partial JSON document overrides only what it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for world generation and the rule pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // Grid
    pub grid_width: u32,
    pub grid_height: u32,

    // Star/planet generation
    pub num_stars: u32,
    /// Minimum distance between two stars at placement time
    pub min_star_separation: f64,
    /// Rejection-sampling tries before giving up on separation
    pub star_placement_attempts: u32,
    /// Per-slot chance of a planet, tried `max_planets_per_star` times
    pub planet_spawn_chance: f64,
    pub max_planets_per_star: u32,
    /// Max planet distance from its star
    pub planet_orbit_radius: u32,
    /// Number of planets that start with life
    pub initial_life_planets: u32,

    // Star lifecycle (ticks)
    pub star_min_lifetime: u32,
    pub star_max_lifetime: u32,

    // Planet properties
    pub planet_habitability_min: f64,
    pub planet_habitability_max: f64,

    // Asteroid mechanics
    /// Per living planet per tick, before life-level scaling
    pub asteroid_spawn_chance: f64,
    pub asteroid_life_base_chance: f64,
    pub asteroid_leave_system_chance: f64,
    /// Units per tick
    pub asteroid_speed: f64,
    /// Viability lost per tick
    pub asteroid_life_decay_rate: f64,
    pub asteroid_life_initial_viability: f64,

    // Life mechanics
    pub asteroid_seed_base_success: f64,
    pub life_growth_chance: f64,
    pub life_decline_chance: f64,
    /// How much life level boosts asteroid spawn chance
    pub life_level_asteroid_multiplier: f64,
    pub spontaneous_life_chance: f64,
    /// How much habitability boosts seeding success
    pub habitability_seeding_multiplier: f64,
    /// How much habitability slows life decline
    pub habitability_sustain_multiplier: f64,

    // Run control
    pub max_ticks: u64,
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    pub random_seed: Option<u64>,

    // Reporting
    /// Report every N ticks (0 = final state only)
    pub display_every_n_ticks: u64,
    pub stats_every_n_ticks: u64,
    pub show_stats: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            num_stars: 10,
            min_star_separation: 10.0,
            star_placement_attempts: 100,
            planet_spawn_chance: 0.7,
            max_planets_per_star: 5,
            planet_orbit_radius: 3,
            initial_life_planets: 3,
            star_min_lifetime: 500,
            star_max_lifetime: 2000,
            planet_habitability_min: 0.2,
            planet_habitability_max: 1.0,
            asteroid_spawn_chance: 0.01,
            asteroid_life_base_chance: 0.05,
            asteroid_leave_system_chance: 0.1,
            asteroid_speed: 1.0,
            asteroid_life_decay_rate: 0.001,
            asteroid_life_initial_viability: 1.0,
            asteroid_seed_base_success: 0.3,
            life_growth_chance: 0.05,
            life_decline_chance: 0.02,
            life_level_asteroid_multiplier: 2.0,
            spontaneous_life_chance: 0.0001,
            habitability_seeding_multiplier: 1.5,
            habitability_sustain_multiplier: 0.8,
            max_ticks: 1000,
            random_seed: None,
            display_every_n_ticks: 10,
            stats_every_n_ticks: 100,
            show_stats: true,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration for values no simulation can run with.
    ///
    /// Zero stars is valid; it just produces an empty world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        // Positions are i32 grid cells
        if self.grid_width > i32::MAX as u32 || self.grid_height > i32::MAX as u32 {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.star_min_lifetime > self.star_max_lifetime {
            return Err(ConfigError::InvertedLifetime {
                min: self.star_min_lifetime,
                max: self.star_max_lifetime,
            });
        }
        let habitability_bounds = [
            ("planet_habitability_min", self.planet_habitability_min),
            ("planet_habitability_max", self.planet_habitability_max),
        ];
        for (name, value) in habitability_bounds {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        if self.planet_habitability_min > self.planet_habitability_max {
            return Err(ConfigError::InvertedHabitability {
                min: self.planet_habitability_min,
                max: self.planet_habitability_max,
            });
        }
        if self.planet_orbit_radius < 1 {
            return Err(ConfigError::OrbitTooSmall(self.planet_orbit_radius));
        }

        let probabilities = [
            ("planet_spawn_chance", self.planet_spawn_chance),
            ("asteroid_spawn_chance", self.asteroid_spawn_chance),
            ("asteroid_life_base_chance", self.asteroid_life_base_chance),
            ("asteroid_leave_system_chance", self.asteroid_leave_system_chance),
            ("asteroid_life_initial_viability", self.asteroid_life_initial_viability),
            ("asteroid_seed_base_success", self.asteroid_seed_base_success),
            ("life_growth_chance", self.life_growth_chance),
            ("life_decline_chance", self.life_decline_chance),
            ("spontaneous_life_chance", self.spontaneous_life_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::NotAProbability { name, value });
            }
        }

        let non_negative = [
            ("asteroid_speed", self.asteroid_speed),
            ("asteroid_life_decay_rate", self.asteroid_life_decay_rate),
            ("min_star_separation", self.min_star_separation),
        ];
        for (name, value) in non_negative {
            // NaN fails this comparison too
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_stars_is_valid() {
        let config = SimulationConfig {
            num_stars: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_lifetime_rejected() {
        let config = SimulationConfig {
            star_min_lifetime: 10,
            star_max_lifetime: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedLifetime { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = SimulationConfig {
            grid_width: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = SimulationConfig {
            grid_width: 3_000_000_000,
            grid_height: 3_000_000_000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: 3_000_000_000,
                height: 3_000_000_000
            })
        );

        let widest = SimulationConfig {
            grid_width: i32::MAX as u32,
            grid_height: 1,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_nan_habitability_rejected() {
        let config = SimulationConfig {
            planet_habitability_max: f64::NAN,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NotFinite { name, .. }) => assert_eq!(name, "planet_habitability_max"),
            other => panic!("unexpected: {:?}", other),
        }

        let config = SimulationConfig {
            planet_habitability_min: f64::NEG_INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn test_bad_probability_rejected() {
        let config = SimulationConfig {
            life_growth_chance: 1.5,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NotAProbability { name, .. }) => assert_eq!(name, "life_growth_chance"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = SimulationConfig {
            asteroid_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "num_stars": 3, "random_seed": 7 }"#).unwrap();
        assert_eq!(config.num_stars, 3);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.grid_width, 100);
        assert_eq!(config.asteroid_seed_base_success, 0.3);
    }
}
