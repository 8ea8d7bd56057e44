/*
 * Input Module
 *
 * This module parses the scenario stream that drives the simulation:
 * - one configuration line: cohesion radius, separation radius, separation
 *   max force, alignment radius, the three rule gains, and the agent count
 * - one line per agent: posX posY velX velY
 * - thereafter one floating-point time delta per line, until end of input
 *
 * Any malformed token is fatal; errors carry the line number and the
 * offending token so the operator can fix the feed.
 */

use std::io::BufRead;

use thiserror::Error;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::rules::{Alignment, Cohesion, Separation};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
}

// A parsed initial state: rule parameters plus the starting population.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub params: SimulationParams,
    pub boids: Vec<Boid>,
}

// Line-oriented reader over the scenario stream. Tracks line numbers so
// parse errors point at the right place.
pub struct ScenarioReader<R> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> ScenarioReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    // Next line of input, or None once the stream ends
    fn next_line(&mut self) -> Result<Option<(usize, &str)>, ScenarioError> {
        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some((self.line_no, self.buf.trim_end())))
    }

    fn require_line(&mut self, what: &'static str) -> Result<(usize, String), ScenarioError> {
        match self.next_line()? {
            Some((no, line)) => Ok((no, line.to_string())),
            None => Err(ScenarioError::UnexpectedEof(what)),
        }
    }

    // Read the configuration header and the initial population. When a
    // scatter extent is supplied the agent lines are skipped and the
    // population is generated randomly instead.
    pub fn read_scenario(&mut self, scatter: Option<f64>) -> Result<Scenario, ScenarioError> {
        let (no, line) = self.require_line("the configuration header")?;
        let (params, count) = parse_header(&line, no)?;

        let boids = match scatter {
            Some(half_extent) => Boid::scatter(&mut rand::thread_rng(), count, half_extent),
            None => {
                let mut boids = Vec::with_capacity(count);
                for _ in 0..count {
                    let (no, line) = self.require_line("an agent line")?;
                    boids.push(parse_boid(&line, no)?);
                }
                boids
            }
        };

        Ok(Scenario { params, boids })
    }

    // One time delta per line; None once the stream ends
    pub fn read_delta(&mut self) -> Result<Option<f64>, ScenarioError> {
        match self.next_line()? {
            Some((no, line)) => parse_delta(line, no).map(Some),
            None => Ok(None),
        }
    }
}

fn parse_f64(token: &str, line: usize) -> Result<f64, ScenarioError> {
    token.parse().map_err(|_| ScenarioError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_usize(token: &str, line: usize) -> Result<usize, ScenarioError> {
    token.parse().map_err(|_| ScenarioError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

// Header field order is the external contract:
// cohesionRadius separationRadius separationMaxForce alignmentRadius
// cohesionK separationK alignmentK agentCount
pub fn parse_header(line: &str, line_no: usize) -> Result<(SimulationParams, usize), ScenarioError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 8 {
        return Err(ScenarioError::FieldCount {
            line: line_no,
            expected: 8,
            found: fields.len(),
        });
    }

    let cohesion_radius = parse_f64(fields[0], line_no)?;
    let separation_radius = parse_f64(fields[1], line_no)?;
    let separation_max_force = parse_f64(fields[2], line_no)?;
    let alignment_radius = parse_f64(fields[3], line_no)?;
    let cohesion_k = parse_f64(fields[4], line_no)?;
    let separation_k = parse_f64(fields[5], line_no)?;
    let alignment_k = parse_f64(fields[6], line_no)?;
    let count = parse_usize(fields[7], line_no)?;

    let params = SimulationParams::new(
        Cohesion::new(cohesion_radius, cohesion_k),
        Separation::new(separation_radius, separation_k, separation_max_force),
        Alignment::new(alignment_radius, alignment_k),
    );

    Ok((params, count))
}

// Agent line: posX posY velX velY
pub fn parse_boid(line: &str, line_no: usize) -> Result<Boid, ScenarioError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(ScenarioError::FieldCount {
            line: line_no,
            expected: 4,
            found: fields.len(),
        });
    }

    Ok(Boid::from_components(
        parse_f64(fields[0], line_no)?,
        parse_f64(fields[1], line_no)?,
        parse_f64(fields[2], line_no)?,
        parse_f64(fields[3], line_no)?,
    ))
}

// Tick line: a single time delta
pub fn parse_delta(line: &str, line_no: usize) -> Result<f64, ScenarioError> {
    parse_f64(line.trim(), line_no)
}
