//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait, the Newtonian gravity law,
//! and `compute_forces`, which evaluates the total force on every body from a
//! single frozen snapshot of positions.

use crate::body::PointMass;
use nalgebra::Vector3;

pub mod gravity;


pub use gravity::NewtonianGravity;

/// Newtonian gravitational constant in N·m²/kg² (CODATA 2018)
pub const G: f64 = 6.67430e-11;

/// Separation in meters below which two bodies count as coincident
pub const COINCIDENCE_THRESHOLD: f64 = 1e-10;

/// A pairwise force law between point masses
///
/// Implementations only see immutable snapshots, so `total_force` may be
/// evaluated for several bodies at once.
///
/// # Examples
///
/// ```
/// use orrery::body::PointMass;
/// use orrery::forces::{ForceModel, NewtonianGravity};
/// use nalgebra::Point3;
///
/// let snapshot = [
///     PointMass::new(1.989e30, Point3::origin()),
///     PointMass::new(5.972e24, Point3::new(1.496e11, 0.0, 0.0)),
/// ];
///
/// let gravity = NewtonianGravity::new();
/// let on_earth = gravity.total_force(1, &snapshot);
///
/// // Pulled back toward the star
/// assert!(on_earth.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Force in newtons exerted by `from` on `on`
    fn pairwise_force(&self, on: &PointMass, from: &PointMass) -> Vector3<f64>;

    /// Sum of pairwise forces on `snapshot[idx]` from every other entry
    fn total_force(&self, idx: usize, snapshot: &[PointMass]) -> Vector3<f64> {
        let on = &snapshot[idx];
        snapshot
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, from)| self.pairwise_force(on, from))
            .fold(Vector3::zeros(), |acc, f| acc + f)
    }

    /// Potential energy of the whole snapshot in joules (optional)
    ///
    /// Default implementation returns 0.0.
    fn potential_energy(&self, _snapshot: &[PointMass]) -> f64 {
        0.0
    }
}

/// Total force on every body, all computed from the same snapshot
///
/// With the `parallel` feature the per-body sums are spread over the rayon
/// thread pool. Each sum only reads `snapshot`, so the result is identical
/// to the sequential path.
pub fn compute_forces(force: &dyn ForceModel, snapshot: &[PointMass]) -> Vec<Vector3<f64>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..snapshot.len())
            .into_par_iter()
            .map(|i| force.total_force(i, snapshot))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..snapshot.len())
            .map(|i| force.total_force(i, snapshot))
            .collect()
    }
}
