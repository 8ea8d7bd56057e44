/*
 * Force Rules Module
 *
 * The three steering rules of the flocking model. Each rule is a plain
 * value type carrying its own parameters; computing a force scans the whole
 * population and derives one steering vector for one target agent:
 * 1. Cohesion: pull toward the centroid of neighbors within radius
 * 2. Alignment: nudge velocity toward the neighborhood average
 * 3. Separation: push away from close neighbors with inverse-square falloff
 *
 * Rules never mutate the population; callers hand them a frozen snapshot.
 */

use serde::Serialize;

use crate::boid::Boid;
use crate::vector2::Vector2;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cohesion {
    pub radius: f64,
    pub k: f64,
}

impl Cohesion {
    pub fn new(radius: f64, k: f64) -> Self {
        Self { radius, k }
    }

    pub fn compute_force(&self, boids: &[Boid], index: usize) -> Vector2 {
        let agent = &boids[index];
        let mut center_of_mass = Vector2::ZERO;
        let mut neighbours = 0usize;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }
            if agent.position.distance(other.position) <= self.radius {
                center_of_mass += other.position;
                neighbours += 1;
            }
        }

        // No neighbors, no pull
        if neighbours == 0 {
            return Vector2::ZERO;
        }

        center_of_mass /= neighbours as f64;

        let to_center = center_of_mass - agent.position;
        let distance_to_center = to_center.magnitude();

        // Magnitude grows linearly with distance and saturates at the radius
        let force_magnitude = self.k * distance_to_center.min(self.radius) / self.radius;
        to_center.normalized() * force_magnitude
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Alignment {
    pub radius: f64,
    pub k: f64,
}

impl Alignment {
    pub fn new(radius: f64, k: f64) -> Self {
        Self { radius, k }
    }

    pub fn compute_force(&self, boids: &[Boid], index: usize) -> Vector2 {
        let agent = &boids[index];
        let mut average_velocity = Vector2::ZERO;
        let mut neighbours = 0usize;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }
            if agent.position.distance(other.position) <= self.radius {
                average_velocity += other.velocity;
                neighbours += 1;
            }
        }

        // The agent always counts itself, so the average is never over zero
        average_velocity += agent.velocity;
        neighbours += 1;

        average_velocity /= neighbours as f64;

        // The average stays un-normalized while the current velocity is
        // normalized; reference output depends on exactly this mix.
        (average_velocity - agent.velocity.normalized()) * self.k
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Separation {
    pub radius: f64,
    pub k: f64,
    pub max_force: f64,
}

impl Separation {
    pub fn new(radius: f64, k: f64, max_force: f64) -> Self {
        Self {
            radius,
            k,
            max_force,
        }
    }

    pub fn compute_force(&self, boids: &[Boid], index: usize) -> Vector2 {
        let agent_position = boids[index].position;
        let mut separation_force = Vector2::ZERO;
        let mut neighbours = 0usize;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }
            let distance = agent_position.distance(other.position);
            // Coincident agents are skipped: the inverse-square term has no
            // defined direction at zero distance.
            if distance > 0.0 && distance <= self.radius {
                let away = agent_position - other.position;
                separation_force += away / (distance * distance);
                neighbours += 1;
            }
        }

        if neighbours == 0 {
            return Vector2::ZERO;
        }

        separation_force /= neighbours as f64;

        let force_magnitude = self.k * separation_force.magnitude();
        if force_magnitude > self.max_force {
            // Clamp to the cap, keeping the direction
            separation_force.normalized() * self.max_force
        } else {
            separation_force * self.k
        }
    }
}
