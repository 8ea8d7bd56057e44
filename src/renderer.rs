/*
 * Renderer Module
 *
 * This module emits simulation state after each tick:
 * - text: one line per agent in index order, "posX posY velX velY", every
 *   field fixed to exactly 3 decimal places (the compatibility contract)
 * - json: one snapshot object per tick, preceded by a one-off header object
 *   describing the effective configuration
 */

use std::io::{self, Write};

use serde::Serialize;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::physics::Simulation;

// Per-agent slice of a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct BoidSnapshot {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

// Complete state of one tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub time: f64,
    pub boids: Vec<BoidSnapshot>,
}

impl TickSnapshot {
    pub fn from_simulation(sim: &Simulation) -> Self {
        Self {
            tick: sim.ticks(),
            time: sim.elapsed(),
            boids: sim
                .boids()
                .iter()
                .map(|b| BoidSnapshot {
                    x: b.position.x,
                    y: b.position.y,
                    vx: b.velocity.x,
                    vy: b.velocity.y,
                })
                .collect(),
        }
    }
}

// Effective configuration, emitted once at the start of a JSON run.
#[derive(Debug, Clone, Serialize)]
pub struct RunHeader<'a> {
    pub params: &'a SimulationParams,
    pub count: usize,
}

pub fn write_tick<W: Write>(out: &mut W, boids: &[Boid]) -> io::Result<()> {
    for boid in boids {
        writeln!(
            out,
            "{:.3} {:.3} {:.3} {:.3}",
            boid.position.x, boid.position.y, boid.velocity.x, boid.velocity.y
        )?;
    }
    Ok(())
}

pub fn write_tick_json<W: Write>(out: &mut W, sim: &Simulation) -> io::Result<()> {
    let snapshot = TickSnapshot::from_simulation(sim);
    serde_json::to_writer(&mut *out, &snapshot)?;
    writeln!(out)
}

pub fn write_header_json<W: Write>(
    out: &mut W,
    params: &SimulationParams,
    count: usize,
) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &RunHeader { params, count })?;
    writeln!(out)
}
