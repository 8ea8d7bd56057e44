/*
 * Physics Module
 *
 * This module drives the flocking simulation forward one tick at a time.
 * Each tick:
 * - every rule reads a frozen snapshot of the population
 * - the three forces are summed per agent
 * - velocity integrates first, position integrates from the new velocity
 *   (semi-implicit Euler)
 * - the next-state buffer becomes current once every agent is written
 *
 * The whole-population rescans make a tick O(n^2). That cost profile is a
 * deliberate property of the model, not an accident.
 */

use tracing::trace;

use crate::boid::Boid;
use crate::params::SimulationParams;

// Lifecycle of the tick driver: Idle until the first delta arrives, then
// Stepping for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Idle,
    Stepping,
}

pub struct Simulation {
    current: Vec<Boid>,
    next: Vec<Boid>,
    params: SimulationParams,
    state: SimulationState,
    ticks: u64,
    elapsed: f64,
}

impl Simulation {
    pub fn new(boids: Vec<Boid>, params: SimulationParams) -> Self {
        let next = boids.clone();
        Self {
            current: boids,
            next,
            params,
            state: SimulationState::Idle,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.current
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // Simulated time accumulated across all ticks so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    // Advance the whole population by one tick of dt seconds
    pub fn step(&mut self, dt: f64) {
        step_into(&self.current, &mut self.next, &self.params, dt);
        std::mem::swap(&mut self.current, &mut self.next);

        self.state = SimulationState::Stepping;
        self.ticks += 1;
        self.elapsed += dt;
    }
}

// Compute and integrate one tick, reading `current` and writing `next`.
// Rules only ever see the pre-tick snapshot; no agent is read after being
// written within the same tick.
pub fn step_into(current: &[Boid], next: &mut [Boid], params: &SimulationParams, dt: f64) {
    debug_assert_eq!(current.len(), next.len());

    for i in 0..current.len() {
        let cohesion = params.cohesion.compute_force(current, i);
        let separation = params.separation.compute_force(current, i);
        let alignment = params.alignment.compute_force(current, i);
        let combined = cohesion + separation + alignment;

        trace!(boid = i, ?cohesion, ?separation, ?alignment, "steering forces");

        // New velocity feeds the position update within the same tick
        let velocity = current[i].velocity + combined * dt;
        next[i].velocity = velocity;
        next[i].position = current[i].position + velocity * dt;
    }
}
