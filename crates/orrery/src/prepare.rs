//! Initial-condition helpers for data loaders
//!
//! These functions turn orbital descriptions into plain [`BodyRecord`]s
//! before a system is built. Randomness only enters through an explicitly
//! seeded [`ChaChaRng`], so the same seed always yields the same records;
//! the integrator itself never draws random numbers.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::body::{BodyRecord, Color};
use crate::forces::gravity::circular_velocity;

/// A body to be placed on a circular orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularOrbit {
    pub name: String,
    /// Mass in kg
    pub mass: f64,
    /// Physical radius in m
    pub radius: f64,
    /// Orbital radius around the central body in m
    pub distance: f64,
    pub color: Color,
}

/// Places `orbit` at `angle` radians around `central`, in the xy-plane
///
/// The body moves counter-clockwise at circular speed `√(G·M / d)`
/// relative to the central body.
///
/// # Examples
///
/// ```
/// use orrery::body::BodyRecord;
/// use orrery::forces::G;
/// use orrery::prepare::{circular_orbit_at, CircularOrbit};
///
/// let sun = BodyRecord::new("Sun", 1.989e30, 6.957e8, [0.0; 3], [0.0; 3], [255, 255, 0]);
/// let earth = CircularOrbit {
///     name: "Earth".into(),
///     mass: 5.972e24,
///     radius: 6.371e6,
///     distance: 1.496e11,
///     color: [0, 0, 255],
/// };
///
/// let record = circular_orbit_at(&sun, &earth, 0.0, G);
/// assert_eq!(record.position, [1.496e11, 0.0, 0.0]);
/// assert!(record.velocity[1] > 29_000.0);
/// ```
pub fn circular_orbit_at(central: &BodyRecord, orbit: &CircularOrbit, angle: f64, g: f64) -> BodyRecord {
    let speed = circular_velocity(g, central.mass, orbit.distance);
    let (sin, cos) = angle.sin_cos();

    let position = [
        central.position[0] + orbit.distance * cos,
        central.position[1] + orbit.distance * sin,
        central.position[2],
    ];
    let velocity = [
        central.velocity[0] - speed * sin,
        central.velocity[1] + speed * cos,
        central.velocity[2],
    ];

    BodyRecord::new(
        orbit.name.clone(),
        orbit.mass,
        orbit.radius,
        position,
        velocity,
        orbit.color,
    )
}

/// Like [`circular_orbit_at`] with a starting angle drawn uniformly from `[0, 2π)`
pub fn circular_orbit(
    central: &BodyRecord,
    orbit: &CircularOrbit,
    g: f64,
    rng: &mut ChaChaRng,
) -> BodyRecord {
    let angle: f64 = rng.random::<f64>() * TAU;
    circular_orbit_at(central, orbit, angle, g)
}
