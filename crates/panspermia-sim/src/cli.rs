//! Command-line arguments
//!
//! Hand-parsed; flags override a JSON config file, which overrides the
//! built-in defaults.

use std::path::PathBuf;

use panspermia_core::config::SimulationConfig;

/// Report interval used when neither a flag nor a config file sets one
const DEFAULT_DISPLAY_INTERVAL: u64 = 100;

pub const USAGE: &str = "\
Panspermia Simulation - model the spread of life through space

Usage: panspermia-sim [OPTIONS]

Options:
  --ticks N                 Number of ticks to run (default: from config)
  --seed N                  Random seed for reproducible simulations
  --stars N                 Number of stars to spawn (default: 10)
  --grid-size W H           Grid size (default: 100 100)
  --initial-life N          Planets starting with life (default: 3)
  --visualizer KIND         ascii | compact | detailed | json | none (default: compact)
  --display-interval N      Report every N ticks, 0 = final state only (default: 100)
  --scale N                 ASCII visualizer scale divisor (default: 1)
  --no-stats                Disable periodic statistics lines
  --config FILE             Load a JSON configuration file
  --verbose                 Log simulation events to stderr
  -h, --help                Print this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visualizer {
    Ascii,
    #[default]
    Compact,
    Detailed,
    Json,
    None,
}

impl std::str::FromStr for Visualizer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Visualizer::Ascii),
            "compact" => Ok(Visualizer::Compact),
            "detailed" => Ok(Visualizer::Detailed),
            "json" => Ok(Visualizer::Json),
            "none" => Ok(Visualizer::None),
            other => Err(format!("unknown visualizer '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub stars: Option<u32>,
    pub grid_size: Option<(u32, u32)>,
    pub initial_life: Option<u32>,
    pub visualizer: Visualizer,
    pub display_interval: Option<u64>,
    pub scale: u32,
    pub no_stats: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            ticks: None,
            seed: None,
            stars: None,
            grid_size: None,
            initial_life: None,
            visualizer: Visualizer::default(),
            display_interval: None,
            scale: 1,
            no_stats: false,
            config: None,
            verbose: false,
            help: false,
        }
    }
}

fn value<'a>(flag: &str, args: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, String> {
    args.next().ok_or_else(|| format!("{} expects a value", flag))
}

fn number<'a, T: std::str::FromStr>(
    flag: &str,
    args: &mut impl Iterator<Item = &'a str>,
) -> Result<T, String> {
    let raw = value(flag, args)?;
    raw.parse()
        .map_err(|_| format!("{} expects a non-negative integer, got '{}'", flag, raw))
}

/// Parse arguments (without the program name)
pub fn parse_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg {
            "--ticks" => parsed.ticks = Some(number(arg, &mut args)?),
            "--seed" => parsed.seed = Some(number(arg, &mut args)?),
            "--stars" => parsed.stars = Some(number(arg, &mut args)?),
            "--grid-size" => {
                let w = number(arg, &mut args)?;
                let h = number(arg, &mut args)?;
                parsed.grid_size = Some((w, h));
            }
            "--initial-life" => parsed.initial_life = Some(number(arg, &mut args)?),
            "--visualizer" => parsed.visualizer = value(arg, &mut args)?.parse()?,
            "--display-interval" => parsed.display_interval = Some(number(arg, &mut args)?),
            "--scale" => {
                let scale: u32 = number(arg, &mut args)?;
                if scale == 0 {
                    return Err("--scale must be at least 1".to_string());
                }
                parsed.scale = scale;
            }
            "--no-stats" => parsed.no_stats = true,
            "--config" => parsed.config = Some(PathBuf::from(value(arg, &mut args)?)),
            "--verbose" => parsed.verbose = true,
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(parsed)
}

impl CliArgs {
    /// Layer the flags over a base configuration (defaults or a loaded file)
    pub fn apply(&self, mut config: SimulationConfig, from_file: bool) -> SimulationConfig {
        if let Some(ticks) = self.ticks {
            config.max_ticks = ticks;
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(stars) = self.stars {
            config.num_stars = stars;
        }
        if let Some((w, h)) = self.grid_size {
            config.grid_width = w;
            config.grid_height = h;
        }
        if let Some(initial) = self.initial_life {
            config.initial_life_planets = initial;
        }
        match self.display_interval {
            Some(interval) => config.display_every_n_ticks = interval,
            None if !from_file => config.display_every_n_ticks = DEFAULT_DISPLAY_INTERVAL,
            None => {}
        }
        if self.no_stats {
            config.show_stats = false;
        }
        config
    }
}
