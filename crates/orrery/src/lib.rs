//! Gravitational N-body engine for star/planet systems.
//!
//! Bodies are point masses in SI units. Forces come from Newton's law
//! evaluated directly over every pair, and a semi-implicit Euler integrator
//! advances the system in fixed steps while each body's recent path is kept
//! in a time-windowed trajectory.
//!
//! ```
//! use orrery::prelude::*;
//! use units::Time;
//!
//! let sun = BodyRecord::new("Sun", 1.989e30, 6.957e8, [0.0; 3], [0.0; 3], [255, 255, 0]);
//! let earth = BodyRecord::new("Earth", 5.972e24, 6.371e6, [1.496e11, 0.0, 0.0], [0.0, 29.78e3, 0.0], [0, 0, 255]);
//!
//! let config = SimulationConfig::default().with_trajectory_retention(Time::from_days(30.0));
//! let mut sim = Simulation::from_records(vec![sun], vec![earth], config).unwrap();
//!
//! sim.advance(Time::from_days(1.0).to_seconds());
//! assert_eq!(sim.elapsed_time(), 86_400.0);
//! assert_eq!(sim.trajectory(BodyId(1)).unwrap().len(), 25);
//! ```

pub mod body;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod prepare;
pub mod simulation;
pub mod state;
pub mod trajectory;

#[cfg(test)]
mod state_test;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::body::{Body, BodyId, BodyRecord, BodyRole, BodySnapshot, PointMass};
    pub use crate::config::SimulationConfig;
    pub use crate::error::{OrreryError, OrreryResult};
    pub use crate::forces::{ForceModel, NewtonianGravity, G};
    pub use crate::integrator::{Integrator, SemiImplicitEuler};
    pub use crate::simulation::Simulation;
    pub use crate::state::StarSystem;
    pub use crate::trajectory::{Trajectory, TrajectorySample};
}
