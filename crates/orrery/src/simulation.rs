//! Main simulation driver.
//!
//! Owns the system, the fixed time step, the elapsed clock and the trajectory
//! histories, and performs each step as one indivisible unit.

use log::{debug, info, trace, warn};

use crate::body::{Body, BodyId, BodyRecord, BodySnapshot};
use crate::config::SimulationConfig;
use crate::error::OrreryResult;
use crate::forces::NewtonianGravity;
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::state::StarSystem;
use crate::trajectory::{Trajectory, TrajectoryTracker};

/// A star system being integrated forward in fixed steps
///
/// There is no pause state: a caller that wants to pause simply stops
/// calling [`advance`](Self::advance) and resumes later.
///
/// # Examples
///
/// ```
/// use orrery::body::BodyRecord;
/// use orrery::config::SimulationConfig;
/// use orrery::simulation::Simulation;
///
/// let sun = BodyRecord::new("Sun", 1.989e30, 6.957e8, [0.0; 3], [0.0; 3], [255, 255, 0]);
/// let earth = BodyRecord::new("Earth", 5.972e24, 6.371e6, [1.496e11, 0.0, 0.0], [0.0, 29.78e3, 0.0], [0, 0, 255]);
///
/// let mut sim = Simulation::from_records(vec![sun], vec![earth], SimulationConfig::default()).unwrap();
///
/// // 10.5 hours with a one hour step: the half hour is not simulated
/// let steps = sim.advance(37_800.0);
/// assert_eq!(steps, 10);
/// assert_eq!(sim.elapsed_time(), 36_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    system: StarSystem,
    integrator: SemiImplicitEuler,
    gravity: NewtonianGravity,
    config: SimulationConfig,
    elapsed_time: f64,
    steps_taken: u64,
    trajectories: TrajectoryTracker,
}

impl Simulation {
    /// Wraps an assembled system
    ///
    /// Every body's history starts with its initial position at time zero.
    ///
    /// # Errors
    ///
    /// Fails when `config` does not validate.
    pub fn new(system: StarSystem, config: SimulationConfig) -> OrreryResult<Self> {
        config.validate()?;

        let mut trajectories = TrajectoryTracker::new();
        for body in system.bodies() {
            trajectories.record(body.id, body.position, 0.0);
        }

        info!(
            "simulation ready: {} bodies, dt = {} s, trajectory retention = {:?} s",
            system.body_count(),
            config.time_step,
            config.trajectory_retention
        );

        Ok(Self {
            system,
            integrator: SemiImplicitEuler,
            gravity: NewtonianGravity::with_constant(config.gravitational_constant),
            config,
            elapsed_time: 0.0,
            steps_taken: 0,
            trajectories,
        })
    }

    /// Validates the records, builds the system, then the simulation
    ///
    /// # Errors
    ///
    /// Any body or configuration validation failure. Nothing is simulated
    /// unless every record is valid.
    pub fn from_records(
        stars: Vec<BodyRecord>,
        planets: Vec<BodyRecord>,
        config: SimulationConfig,
    ) -> OrreryResult<Self> {
        let system = StarSystem::from_records(stars, planets)?;
        Self::new(system, config)
    }

    /// One atomic step of `dt` seconds
    ///
    /// Velocities and positions of every body are updated, each body gets a
    /// trajectory sample stamped with the new elapsed time, the clock moves
    /// forward, and histories are pruned to the retention window.
    pub fn step(&mut self) {
        let dt = self.config.time_step;
        self.integrator.step(&mut self.system, dt, &self.gravity);

        let now = self.elapsed_time + dt;
        for body in self.system.bodies() {
            self.trajectories.record(body.id, body.position, now);
        }
        self.elapsed_time = now;
        self.steps_taken += 1;

        if let Some(window) = self.config.trajectory_retention {
            self.trajectories.prune_all(now, window);
        }

        trace!("step {} done at t = {} s", self.steps_taken, now);
    }

    /// Performs exactly `n` steps
    pub fn run_steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Advances by the whole number of steps that fit in `duration` seconds
    ///
    /// Performs `floor(duration / dt)` steps and returns that count. The
    /// remainder is dropped, not carried over to the next call. Negative or
    /// non-finite durations perform no steps.
    pub fn advance(&mut self, duration: f64) -> usize {
        let n = self.steps_in(duration);
        self.run_steps(n);
        n
    }

    /// Number of whole steps `advance(duration)` would take
    pub fn steps_in(&self, duration: f64) -> usize {
        let dt = self.config.time_step;
        if !duration.is_finite() || duration < 0.0 {
            warn!("cannot advance by {duration} s; no steps taken");
            return 0;
        }

        let steps = (duration / dt).floor();
        let remainder = duration - steps * dt;
        if remainder > 0.0 {
            debug!("advance({duration}) covers {steps} steps; {remainder} s not simulated");
        }
        steps as usize
    }

    /// Total simulated seconds since creation
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn time_step(&self) -> f64 {
        self.config.time_step
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn system(&self) -> &StarSystem {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        self.system.bodies()
    }

    /// Retained samples of one body, oldest first
    pub fn trajectory(&self, id: BodyId) -> Option<&Trajectory> {
        self.trajectories.get(id)
    }

    pub fn trajectories(&self) -> &TrajectoryTracker {
        &self.trajectories
    }

    /// Copies of everything a renderer needs to draw the bodies
    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.system.bodies().iter().map(|b| b.snapshot()).collect()
    }

    /// Kinetic plus potential energy of the whole system in joules
    pub fn total_energy(&self) -> f64 {
        self.system.total_energy(&self.gravity)
    }
}
