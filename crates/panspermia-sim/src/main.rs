//! Panspermia Simulation Runner
//!
//! Generates a world, runs the tick pipeline and prints what happened.
//! Runs entirely in-process; output goes to stdout, logs to stderr.
//!
//! Usage:
//!   cargo run -p panspermia-sim -- --seed 42 --ticks 2000
//!   cargo run -p panspermia-sim -- --visualizer ascii --scale 2
//!   cargo run -p panspermia-sim -- --config sim.json --visualizer json

mod cli;
mod render;

use std::fs;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use panspermia_core::prelude::*;
use tracing::Level;

use cli::{parse_args, CliArgs, Visualizer, USAGE};
use render::{
    format_stats_line, write_rule_stats, AsciiRenderer, CompactRenderer, DetailedRenderer,
    JsonLinesRenderer, StatsLine,
};

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(raw.iter().map(String::as_str)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}\n\n{}", msg, USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return;
    }

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn load_config(args: &CliArgs) -> anyhow::Result<SimulationConfig> {
    match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let base: SimulationConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?;
            Ok(args.apply(base, true))
        }
        None => Ok(args.apply(SimulationConfig::default(), false)),
    }
}

fn make_renderer(kind: Visualizer, scale: u32) -> Option<Box<dyn Reporter>> {
    match kind {
        Visualizer::Ascii => Some(Box::new(AsciiRenderer::new(io::stdout(), scale))),
        Visualizer::Compact => Some(Box::new(CompactRenderer::new(io::stdout()))),
        Visualizer::Detailed => Some(Box::new(DetailedRenderer::new(io::stdout()))),
        Visualizer::Json => Some(Box::new(JsonLinesRenderer::new(io::stdout()))),
        Visualizer::None => None,
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let config = load_config(args)?;
    // JSON output stays machine-readable: no banners
    let chatty = args.visualizer != Visualizer::Json;

    if chatty {
        print_header(&config);
    }

    let mut sim = Simulation::new(config.clone()).context("starting simulation")?;

    if chatty {
        let stats = sim.stats();
        println!(
            "\nInitialized with {} stars and {} planets",
            stats.total_stars, stats.total_planets
        );
        println!("Starting life planets: {}", stats.living_planets);
    }

    let mut renderer = make_renderer(args.visualizer, args.scale);
    let stats_every = if config.show_stats && chatty {
        config.stats_every_n_ticks
    } else {
        0
    };
    let mut stats_line = StatsLine::new(io::stdout(), stats_every);

    let mut reporters: Vec<&mut dyn Reporter> = Vec::new();
    reporters.push(&mut stats_line);
    if let Some(renderer) = renderer.as_mut() {
        reporters.push(&mut **renderer);
    }

    // Ctrl-C stops at the next tick boundary; the final report still goes out
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))
        .context("installing Ctrl-C handler")?;

    let outcome = sim.run_until(None, &mut reporters, &stop)?;

    if chatty {
        let mut out = io::stdout().lock();
        if outcome.interrupted {
            writeln!(out, "\n\nSimulation interrupted at tick {}.", sim.tick_number())?;
        }
        writeln!(out, "\n=== Final Statistics ===")?;
        writeln!(out, "{}", format_stats_line(&sim.stats()))?;
        write_rule_stats(&mut out, sim.pipeline())?;
        writeln!(out, "\n{}", "=".repeat(60))?;
        writeln!(out, "SIMULATION COMPLETE")?;
        writeln!(out, "{}", "=".repeat(60))?;
    }

    Ok(())
}

fn print_header(config: &SimulationConfig) {
    println!("{}", "=".repeat(60));
    println!("PANSPERMIA SIMULATION");
    println!("{}", "=".repeat(60));
    println!("Grid Size: {}x{}", config.grid_width, config.grid_height);
    println!("Stars: {}", config.num_stars);
    println!("Initial Life Planets: {}", config.initial_life_planets);
    println!("Max Ticks: {}", config.max_ticks);
    if let Some(seed) = config.random_seed {
        println!("Random Seed: {}", seed);
    }
    println!("{}", "=".repeat(60));
}
