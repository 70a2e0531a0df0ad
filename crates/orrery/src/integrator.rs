//! Time integration for N-body systems
//!
//! This module provides integrators for evolving a [`StarSystem`] forward in
//! time. The integrators are stateless: the fixed time step and the elapsed
//! clock belong to [`Simulation`](crate::simulation::Simulation).

use crate::forces::{compute_forces, ForceModel};
use crate::state::StarSystem;

/// A time integrator for N-body systems
///
/// Integrators advance the system state forward in time by computing
/// forces from a force model and updating velocities and positions.
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `system` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to evaluate
    fn step(&self, system: &mut StarSystem, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    ///
    /// Returns the simulated time covered, `n_steps * dt`.
    fn integrate(
        &self,
        system: &mut StarSystem,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(system, dt, force);
        }
        n_steps as f64 * dt
    }
}

/// Semi-implicit (symplectic) Euler integrator (1st order)
///
/// Each step:
///
/// 1. Snapshot: freeze every body's mass and position
/// 2. Kick: `v(t + dt) = v(t) + F(x(t)) / m * dt`, forces from the snapshot only
/// 3. Drift: `x(t + dt) = x(t) + v(t + dt) * dt`, using the new velocity
///
/// # Examples
///
/// ```
/// use orrery::body::{BodyRecord, BodyRole};
/// use orrery::forces::NewtonianGravity;
/// use orrery::integrator::{Integrator, SemiImplicitEuler};
/// use orrery::state::StarSystem;
///
/// let mut system = StarSystem::new();
/// system.add_body(BodyRole::Star, BodyRecord::new("Sun", 1.989e30, 6.957e8, [0.0; 3], [0.0; 3], [255, 255, 0])).unwrap();
/// system.add_body(BodyRole::Planet, BodyRecord::new("Earth", 5.972e24, 6.371e6, [1.496e11, 0.0, 0.0], [0.0, 29.78e3, 0.0], [0, 0, 255])).unwrap();
///
/// let integrator = SemiImplicitEuler;
/// integrator.step(&mut system, 3600.0, &NewtonianGravity::new());
///
/// assert!(system.bodies()[1].position.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, system: &mut StarSystem, dt: f64, force: &dyn ForceModel) {
        // All forces from the same instant
        let snapshot = system.snapshot();
        let forces = compute_forces(force, &snapshot);

        // Kick, then drift with the committed velocities
        system
            .bodies_mut()
            .iter_mut()
            .zip(forces.iter())
            .for_each(|(body, f)| {
                body.apply_force(f, dt);
            });

        system.bodies_mut().iter_mut().for_each(|body| {
            body.drift(dt);
        });
    }
}
