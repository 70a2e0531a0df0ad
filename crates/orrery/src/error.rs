//! Error types for orrery.
//!
//! Every error is a construction-time validation failure. Once a
//! [`Simulation`](crate::simulation::Simulation) exists, stepping is infallible.

use thiserror::Error;

use crate::body::BodyId;

/// Result type alias for orrery operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Validation failures raised while assembling a system or simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrreryError {
    /// Mass must be strictly positive (and finite).
    #[error("body '{name}' has non-positive mass {mass:e} kg")]
    NonPositiveMass {
        /// Display name of the offending body.
        name: String,
        /// Rejected mass in kilograms.
        mass: f64,
    },

    /// Radius must be finite and non-negative.
    #[error("body '{name}' has invalid radius {radius:e} m")]
    NegativeRadius {
        /// Display name of the offending body.
        name: String,
        /// Rejected radius in meters.
        radius: f64,
    },

    /// A position component is NaN or infinite.
    #[error("body '{name}' has a non-finite position")]
    NonFinitePosition {
        /// Display name of the offending body.
        name: String,
    },

    /// A velocity component is NaN or infinite.
    #[error("body '{name}' has a non-finite velocity")]
    NonFiniteVelocity {
        /// Display name of the offending body.
        name: String,
    },

    /// Two bodies in one system share an id.
    #[error("duplicate body id {0}")]
    DuplicateBodyId(BodyId),

    /// Time step must be finite and strictly positive.
    #[error("invalid time step {0} s")]
    InvalidTimeStep(f64),

    /// Retention window must be non-negative and not NaN.
    #[error("invalid trajectory retention {0} s")]
    InvalidRetention(f64),

    /// The gravitational constant must be finite and non-negative.
    #[error("invalid gravitational constant {0}")]
    InvalidGravitationalConstant(f64),
}
