//! Simulation engine - owns the world and drives the rule pipeline

use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::generation::generate_world;
use crate::grid::Grid;
use crate::report::{Reporter, Snapshot, WorldStats};
use crate::rules::{RulePipeline, RuleStats};

/// The one random stream every rule draws from
pub type SimRng = ChaCha8Rng;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticks_run: u64,
    /// Stopped early by the caller's flag
    pub interrupted: bool,
}

/// Main simulation driver
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    rng: SimRng,
    pipeline: RulePipeline,
    tick_number: u64,
}

impl Simulation {
    /// Validate the config, seed the RNG and generate a world
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = match config.random_seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        let grid = generate_world(&config, &mut rng);
        Ok(Self::from_grid(config, grid, rng))
    }

    /// Run an existing world instead of generating one
    pub fn from_grid(config: SimulationConfig, grid: Grid, rng: SimRng) -> Self {
        Self {
            config,
            grid,
            rng,
            pipeline: RulePipeline::new(),
            tick_number: 0,
        }
    }

    /// Advance one tick: every rule once, in order
    pub fn tick(&mut self) {
        self.pipeline
            .run_tick(&mut self.grid, &self.config, &mut self.rng);
        self.tick_number += 1;
        trace!(
            "tick {} done, {} asteroids in flight",
            self.tick_number,
            self.grid.asteroids.len()
        );
    }

    /// Run `ticks` ticks (or `max_ticks` from the config).
    ///
    /// Reporters are called every `display_every_n_ticks` ticks and once
    /// more at the end.
    pub fn run(
        &mut self,
        ticks: Option<u64>,
        reporters: &mut [&mut dyn Reporter],
    ) -> Result<RunOutcome, SimError> {
        self.run_until(ticks, reporters, &AtomicBool::new(false))
    }

    /// Like [`Simulation::run`], but stops early once `stop` is set.
    ///
    /// The flag is only read between ticks, so the world is always left at
    /// a completed tick boundary.
    pub fn run_until(
        &mut self,
        ticks: Option<u64>,
        reporters: &mut [&mut dyn Reporter],
        stop: &AtomicBool,
    ) -> Result<RunOutcome, SimError> {
        let ticks = ticks.unwrap_or(self.config.max_ticks);
        let interval = self.config.display_every_n_ticks;
        let mut outcome = RunOutcome {
            ticks_run: 0,
            interrupted: false,
        };

        for _ in 0..ticks {
            if stop.load(Ordering::Relaxed) {
                outcome.interrupted = true;
                break;
            }

            self.tick();
            outcome.ticks_run += 1;

            let snapshot = self.snapshot();
            for reporter in reporters.iter_mut() {
                reporter.on_tick(&snapshot)?;
            }
            if interval > 0 && self.tick_number % interval == 0 {
                for reporter in reporters.iter_mut() {
                    reporter.report(&snapshot)?;
                }
            }
        }

        if outcome.interrupted {
            info!("run interrupted at tick {}", self.tick_number);
        } else {
            info!("run finished at tick {}", self.tick_number);
        }

        let snapshot = self.snapshot();
        for reporter in reporters.iter_mut() {
            reporter.report(&snapshot)?;
        }

        Ok(outcome)
    }

    pub fn tick_number(&self) -> u64 {
        self.tick_number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &RulePipeline {
        &self.pipeline
    }

    /// Access to rule enable flags and counters
    pub fn pipeline_mut(&mut self) -> &mut RulePipeline {
        &mut self.pipeline
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats::collect(&self.grid, self.tick_number)
    }

    pub fn rule_stats(&self) -> RuleStats {
        self.pipeline.stats()
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick: self.tick_number,
            grid: &self.grid,
            world: self.stats(),
            rules: self.rule_stats(),
        }
    }
}
