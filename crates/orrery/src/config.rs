//! Simulation settings
//!
//! All values are SI seconds so the driver never converts units itself.
//! Builders take [`units::Time`] so callers can think in hours and days.

use serde::{Deserialize, Serialize};
use units::Time;

use crate::error::{OrreryError, OrreryResult};
use crate::forces::G;

/// Default step: one hour
pub const DEFAULT_TIME_STEP_HOURS: f64 = 1.0;

/// Default trajectory window: one 365-day year
pub const DEFAULT_RETENTION_DAYS: f64 = 365.0;

/// Fixed step, trajectory window and gravitational constant for a run
///
/// Deserializes from camelCase keys; missing keys fall back to the
/// defaults, and an explicit `null` retention disables pruning.
///
/// # Examples
///
/// ```
/// use orrery::config::SimulationConfig;
/// use units::Time;
///
/// let config = SimulationConfig::default()
///     .with_time_step(Time::from_hours(6.0))
///     .with_trajectory_retention(Time::from_days(90.0));
///
/// assert_eq!(config.time_step, 21_600.0);
/// assert_eq!(config.trajectory_retention, Some(7_776_000.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Fixed integration step in seconds
    pub time_step: f64,
    /// Maximum trajectory sample age in seconds, `None` keeps everything
    pub trajectory_retention: Option<f64>,
    /// Gravitational constant in N·m²/kg²
    pub gravitational_constant: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: Time::from_hours(DEFAULT_TIME_STEP_HOURS).to_seconds(),
            trajectory_retention: Some(Time::from_days(DEFAULT_RETENTION_DAYS).to_seconds()),
            gravitational_constant: G,
        }
    }
}

impl SimulationConfig {
    pub fn with_time_step(mut self, dt: Time) -> Self {
        self.time_step = dt.to_seconds();
        self
    }

    pub fn with_trajectory_retention(mut self, window: Time) -> Self {
        self.trajectory_retention = Some(window.to_seconds());
        self
    }

    /// Keeps every trajectory sample for the whole run
    pub fn without_trajectory_retention(mut self) -> Self {
        self.trajectory_retention = None;
        self
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Rejects settings the driver cannot run with
    ///
    /// # Errors
    ///
    /// * `InvalidTimeStep` unless the step is finite and positive
    /// * `InvalidRetention` for a NaN or negative window (infinity is allowed)
    /// * `InvalidGravitationalConstant` unless `G` is finite and non-negative
    pub fn validate(&self) -> OrreryResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(OrreryError::InvalidTimeStep(self.time_step));
        }
        if let Some(window) = self.trajectory_retention {
            if window.is_nan() || window < 0.0 {
                return Err(OrreryError::InvalidRetention(window));
            }
        }
        if !self.gravitational_constant.is_finite() || self.gravitational_constant < 0.0 {
            return Err(OrreryError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        Ok(())
    }
}
