use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, OrreryResult};

/// Stable handle assigned once when a body joins a system.
///
/// Ids are never derived from mutable state, so they are safe map keys
/// while positions and velocities change every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation grouping. Physics treats every role the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRole {
    Star,
    Planet,
}

/// RGB display color, carried through untouched.
pub type Color = [u8; 3];

/// Initial conditions for one body as handed over by a data loader.
///
/// Units are SI: kilograms, meters, meters per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub color: Color,
}

impl BodyRecord {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: [f64; 3],
        velocity: [f64; 3],
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
            color,
        }
    }
}

/// The part of a body the gravity law reads: an immutable copy taken at
/// the start of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub mass: f64,             // kg
    pub position: Point3<f64>, // m
}

impl PointMass {
    pub fn new(mass: f64, position: Point3<f64>) -> Self {
        Self { mass, position }
    }
}

/// Read-only view of a body for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: BodyId,
    pub name: String,
    pub role: BodyRole,
    /// Position [x, y, z] in meters
    pub position: [f64; 3],
    /// Physical radius in meters
    pub radius: f64,
    pub color: Color,
}

/// A point-mass body with a stable identity.
///
/// Equality and hashing use `id` only.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub role: BodyRole,
    pub mass: f64,               // kg
    pub radius: f64,             // m (display only, never enters the force law)
    pub position: Point3<f64>,   // m
    pub velocity: Vector3<f64>,  // m/s
    pub color: Color,
}

impl Body {
    /// Builds a body from a loader record, rejecting invalid physics.
    ///
    /// # Errors
    ///
    /// Fails when the mass is not strictly positive, the radius is negative or
    /// non-finite, or any position or velocity component is non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{Body, BodyId, BodyRecord, BodyRole};
    ///
    /// let record = BodyRecord::new("Earth", 5.972e24, 6.371e6, [1.496e11, 0.0, 0.0], [0.0, 29.78e3, 0.0], [0, 0, 255]);
    /// let earth = Body::new(BodyId(1), BodyRole::Planet, record).unwrap();
    /// assert_eq!(earth.position.x, 1.496e11);
    ///
    /// let massless = BodyRecord::new("Ghost", 0.0, 1.0, [0.0; 3], [0.0; 3], [0, 0, 0]);
    /// assert!(Body::new(BodyId(2), BodyRole::Planet, massless).is_err());
    /// ```
    pub fn new(id: BodyId, role: BodyRole, record: BodyRecord) -> OrreryResult<Self> {
        let body = Body {
            id,
            name: record.name,
            role,
            mass: record.mass,
            radius: record.radius,
            position: Point3::from(record.position),
            velocity: Vector3::from(record.velocity),
            color: record.color,
        };
        body.validate()?;
        Ok(body)
    }

    /// Checks the physical invariants: `mass > 0`, `radius >= 0`, finite state.
    pub fn validate(&self) -> OrreryResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(OrreryError::NonPositiveMass {
                name: self.name.clone(),
                mass: self.mass,
            });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(OrreryError::NegativeRadius {
                name: self.name.clone(),
                radius: self.radius,
            });
        }
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(OrreryError::NonFinitePosition {
                name: self.name.clone(),
            });
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(OrreryError::NonFiniteVelocity {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn point_mass(&self) -> PointMass {
        PointMass::new(self.mass, self.position)
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }

    /// Applies a constant force for `dt` seconds and returns the velocity change.
    pub fn apply_force(&mut self, force: &Vector3<f64>, dt: f64) -> Vector3<f64> {
        let dv = delta_velocity(force, self.mass, dt);
        self.velocity += dv;
        dv
    }

    /// Moves the body along its current velocity for `dt` seconds.
    pub fn drift(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
            position: [self.position.x, self.position.y, self.position.z],
            radius: self.radius,
            color: self.color,
        }
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Body {}

impl Hash for Body {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Velocity change produced by a constant force: `Δv = (F / m) * dt`.
pub fn delta_velocity(force: &Vector3<f64>, mass: f64, dt: f64) -> Vector3<f64> {
    (force / mass) * dt
}
