//! Text renderings of simulation snapshots
//!
//! All renderers write to any `io::Write`, so tests can capture output in
//! a `Vec<u8>` while the binary hands them stdout.

use std::io::{self, Write};

use panspermia_core::prelude::*;
use serde::Serialize;

// ── ASCII map ───────────────────────────────────────────────────────────

/// Draws the grid as characters, one cell per `scale`x`scale` block
pub struct AsciiRenderer<W: Write> {
    out: W,
    scale: u32,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, scale: u32) -> Self {
        Self {
            out,
            scale: scale.max(1),
        }
    }

    fn cell(&self, x: f64, y: f64) -> (usize, usize) {
        let scale = self.scale as i64;
        ((x as i64 / scale) as usize, (y as i64 / scale) as usize)
    }

    /// Build the character map; asteroids are drawn last so they sit on top
    pub fn draw(&self, grid: &Grid) -> Vec<Vec<char>> {
        let width = (grid.width / self.scale) as usize;
        let height = (grid.height / self.scale) as usize;
        let mut display = vec![vec!['.'; width]; height];

        let put = |display: &mut Vec<Vec<char>>, (x, y): (usize, usize), glyph: char| {
            if x < width && y < height {
                display[y][x] = glyph;
            }
        };

        for star in &grid.stars {
            let glyph = if star.is_alive { '*' } else { 'x' };
            put(&mut display, self.cell(star.position.x as f64, star.position.y as f64), glyph);

            for planet in &star.planets {
                let glyph = match (planet.has_life, planet.life_level) {
                    (true, level) if level > 0.7 => 'O',
                    (true, level) if level > 0.3 => 'o',
                    (true, _) => '°',
                    (false, _) => '·',
                };
                put(
                    &mut display,
                    self.cell(planet.position.x as f64, planet.position.y as f64),
                    glyph,
                );
            }
        }

        for asteroid in &grid.asteroids {
            let glyph = if asteroid.contains_life { '#' } else { '+' };
            put(&mut display, self.cell(asteroid.position.x, asteroid.position.y), glyph);
        }

        display
    }
}

impl<W: Write> Reporter for AsciiRenderer<W> {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let display = self.draw(snapshot.grid);
        let width = display.first().map(|row| row.len()).unwrap_or(0);
        let border = format!("+{}+", "-".repeat(width));

        writeln!(self.out, "\nTick {}", snapshot.tick)?;
        writeln!(self.out, "{}", border)?;
        for row in &display {
            let line: String = row.iter().collect();
            writeln!(self.out, "|{}|", line)?;
        }
        writeln!(self.out, "{}", border)?;

        writeln!(self.out, "\nLegend:")?;
        writeln!(self.out, "  * = Living star     x = Dead star")?;
        writeln!(
            self.out,
            "  O = High life       o = Medium life    ° = Low life    · = No life (planet)"
        )?;
        writeln!(self.out, "  # = Asteroid (life) + = Asteroid (no life)")?;
        writeln!(self.out, "  . = Empty space")?;
        self.out.flush()
    }
}

// ── Compact summary ─────────────────────────────────────────────────────

/// A few headline counts per report
pub struct CompactRenderer<W: Write> {
    out: W,
}

impl<W: Write> CompactRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for CompactRenderer<W> {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let w = &snapshot.world;
        writeln!(self.out, "\n--- Tick {} ---", w.tick)?;
        writeln!(self.out, "Living Planets: {}/{}", w.living_planets, w.total_planets)?;
        writeln!(self.out, "Stars Alive: {}/{}", w.alive_stars, w.total_stars)?;
        writeln!(
            self.out,
            "Asteroids: {} ({} with life)",
            w.total_asteroids, w.asteroids_with_life
        )?;
        self.out.flush()
    }
}

// ── Detailed listing ────────────────────────────────────────────────────

const MAX_STARS_SHOWN: usize = 5;
const MAX_ENTRIES_SHOWN: usize = 10;

/// Per-entity listing, truncated to the first few of each kind
pub struct DetailedRenderer<W: Write> {
    out: W,
}

impl<W: Write> DetailedRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn more(&mut self, total: usize, shown: usize) -> io::Result<()> {
        if total > shown {
            writeln!(self.out, "  ... and {} more", total - shown)?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for DetailedRenderer<W> {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let grid = snapshot.grid;
        writeln!(self.out, "\n=== Tick {} ===", snapshot.tick)?;

        writeln!(self.out, "\nStars ({}):", grid.stars.len())?;
        for (i, star) in grid.stars.iter().take(MAX_STARS_SHOWN).enumerate() {
            let status = if star.is_alive { "alive" } else { "DEAD" };
            writeln!(
                self.out,
                "  {}. ({}, {}) - {}, age {}/{}, {} ticks left, {} planets ({} living)",
                i + 1,
                star.position.x,
                star.position.y,
                status,
                star.age,
                star.lifetime,
                star.remaining_lifetime(),
                star.planets.len(),
                star.living_planet_count()
            )?;
        }
        self.more(grid.stars.len(), MAX_STARS_SHOWN)?;

        let living: Vec<&Planet> = grid.living_planets().collect();
        writeln!(self.out, "\nLiving Planets ({}):", living.len())?;
        for (i, planet) in living.iter().take(MAX_ENTRIES_SHOWN).enumerate() {
            writeln!(
                self.out,
                "  {}. ({}, {}) - life={:.2}, hab={:.2}",
                i + 1,
                planet.position.x,
                planet.position.y,
                planet.life_level,
                planet.habitability
            )?;
        }
        self.more(living.len(), MAX_ENTRIES_SHOWN)?;

        let carriers: Vec<&Asteroid> = grid.asteroids_with_life().collect();
        writeln!(self.out, "\nAsteroids with Life ({}):", carriers.len())?;
        for (i, asteroid) in carriers.iter().take(MAX_ENTRIES_SHOWN).enumerate() {
            writeln!(
                self.out,
                "  {}. pos=({:.1},{:.1}), viability={:.2}",
                i + 1,
                asteroid.position.x,
                asteroid.position.y,
                asteroid.life_viability
            )?;
        }
        self.more(carriers.len(), MAX_ENTRIES_SHOWN)?;
        self.out.flush()
    }
}

// ── JSON lines ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonReport<'a> {
    world: &'a WorldStats,
    rules: &'a RuleStats,
}

/// One JSON object per report, for piping into other tools
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for JsonLinesRenderer<W> {
    fn report(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let report = JsonReport {
            world: &snapshot.world,
            rules: &snapshot.rules,
        };
        serde_json::to_writer(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

// ── Periodic stats line ─────────────────────────────────────────────────

pub fn format_stats_line(w: &WorldStats) -> String {
    format!(
        "Tick {}: Living Planets: {}/{}, Asteroids: {} ({} with life), Stars: {}/{}",
        w.tick,
        w.living_planets,
        w.total_planets,
        w.total_asteroids,
        w.asteroids_with_life,
        w.alive_stars,
        w.total_stars
    )
}

/// Prints a one-line summary every `every` ticks
pub struct StatsLine<W: Write> {
    out: W,
    every: u64,
}

impl<W: Write> StatsLine<W> {
    pub fn new(out: W, every: u64) -> Self {
        Self { out, every }
    }
}

impl<W: Write> Reporter for StatsLine<W> {
    fn report(&mut self, _snapshot: &Snapshot<'_>) -> io::Result<()> {
        Ok(())
    }

    fn on_tick(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if self.every > 0 && snapshot.tick % self.every == 0 {
            writeln!(self.out, "{}", format_stats_line(&snapshot.world))?;
        }
        Ok(())
    }
}

// ── Rule statistics ─────────────────────────────────────────────────────

/// Per-rule counters, one block per rule in pipeline order
pub fn write_rule_stats(out: &mut impl Write, pipeline: &RulePipeline) -> io::Result<()> {
    let stats = pipeline.stats();
    let [aging, life, spawn, movement] = pipeline.names();

    writeln!(out, "\n{}:", aging)?;
    writeln!(out, "  stars_died: {}", stats.star_aging.stars_died)?;

    writeln!(out, "\n{}:", life)?;
    writeln!(
        out,
        "  spontaneous_life_events: {}",
        stats.planet_life.spontaneous_life_events
    )?;
    writeln!(out, "  life_extinctions: {}", stats.planet_life.life_extinctions)?;

    writeln!(out, "\n{}:", spawn)?;
    writeln!(
        out,
        "  asteroids_spawned: {}",
        stats.asteroid_spawn.asteroids_spawned
    )?;
    writeln!(
        out,
        "  asteroids_with_life_spawned: {}",
        stats.asteroid_spawn.asteroids_with_life_spawned
    )?;

    let m = &stats.asteroid_movement;
    writeln!(out, "\n{}:", movement)?;
    writeln!(out, "  asteroids_exited_grid: {}", m.asteroids_exited_grid)?;
    writeln!(out, "  asteroid_life_died: {}", m.asteroid_life_died)?;
    writeln!(out, "  collisions: {}", m.collisions)?;
    writeln!(out, "  successful_seedings: {}", m.successful_seedings)?;
    Ok(())
}
