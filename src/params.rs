/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that bundles the three
 * rule parameter sets. Parameters are configured once, before the first
 * tick, and stay invariant for the lifetime of a run.
 */

use serde::Serialize;

use crate::rules::{Alignment, Cohesion, Separation};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulationParams {
    pub cohesion: Cohesion,
    pub separation: Separation,
    pub alignment: Alignment,
}

impl SimulationParams {
    pub fn new(cohesion: Cohesion, separation: Separation, alignment: Alignment) -> Self {
        Self {
            cohesion,
            separation,
            alignment,
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            cohesion: Cohesion::new(50.0, 1.0),
            separation: Separation::new(25.0, 1.0, 10.0),
            alignment: Alignment::new(50.0, 1.0),
        }
    }
}
