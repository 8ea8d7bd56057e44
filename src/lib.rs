/*
 * Flock Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulator.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use params::SimulationParams;
pub use physics::{Simulation, SimulationState};
pub use rules::{Alignment, Cohesion, Separation};
pub use vector2::Vector2;

// Define modules
pub mod boid;
pub mod vector2;
pub mod rules;
pub mod params;
pub mod physics;
pub mod input;
pub mod renderer;

// Constants
// Vectors whose squared distance falls below this compare equal.
pub const APPROX_EPSILON: f64 = 1.0e-6;
