/*
 * Flock Simulation
 *
 * Console driver for the boid flocking simulation. Agents follow three
 * steering rules each tick:
 * 1. Cohesion: pull toward the centroid of neighbors within radius
 * 2. Alignment: nudge velocity toward the neighborhood average
 * 3. Separation: push away from close neighbors
 *
 * The scenario arrives on stdin (configuration line, agent lines, then one
 * time delta per line until end of input) and the per-tick population state
 * is written to stdout. Logs go to stderr so stdout stays a clean stream.
 */

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use flocksim::input::ScenarioReader;
use flocksim::renderer;
use flocksim::Simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format for per-tick state
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Generate the initial population randomly within the given half-extent
    /// instead of reading agent lines from the input
    #[arg(long, value_name = "HALF_EXTENT")]
    scatter: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let mut reader = ScenarioReader::new(stdin.lock());
    let scenario = reader
        .read_scenario(args.scatter)
        .context("failed to read scenario")?;

    info!(
        boids = scenario.boids.len(),
        params = ?scenario.params,
        "scenario loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Format::Json = args.format {
        renderer::write_header_json(&mut out, &scenario.params, scenario.boids.len())
            .context("failed to write run header")?;
    }

    let mut sim = Simulation::new(scenario.boids, scenario.params);

    while let Some(dt) = reader
        .read_delta()
        .context("failed to read time delta")?
    {
        sim.step(dt);
        debug!(tick = sim.ticks(), dt, "tick complete");

        match args.format {
            Format::Text => renderer::write_tick(&mut out, sim.boids()),
            Format::Json => renderer::write_tick_json(&mut out, &sim),
        }
        .context("failed to write tick output")?;
        out.flush()?;
    }

    info!(
        ticks = sim.ticks(),
        time = sim.elapsed(),
        "input exhausted, simulation complete"
    );

    Ok(())
}
