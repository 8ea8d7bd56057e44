/*
 * Boid Module
 *
 * This module defines the Boid struct: the unit of state the simulation
 * evolves. A boid is a position and a velocity; its identity is its index
 * in the population, which is fixed for the lifetime of a run.
 */

use rand::Rng;

use crate::vector2::Vector2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self { position, velocity }
    }

    pub fn from_components(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(vx, vy))
    }

    // Spawn a boid at a random position within the square
    // [-half_extent, half_extent]^2, heading in a random direction at speed 2
    pub fn random<R: Rng>(rng: &mut R, half_extent: f64) -> Self {
        let position = if half_extent > 0.0 {
            Vector2::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(-half_extent..half_extent),
            )
        } else {
            Vector2::ZERO
        };

        let vx = rng.gen_range(-1.0..1.0);
        let vy = rng.gen_range(-1.0..1.0);
        let velocity = Vector2::new(vx, vy).normalized() * 2.0;

        Self::new(position, velocity)
    }

    // Generate a whole population of randomly placed boids
    pub fn scatter<R: Rng>(rng: &mut R, count: usize, half_extent: f64) -> Vec<Boid> {
        (0..count).map(|_| Boid::random(rng, half_extent)).collect()
    }
}
