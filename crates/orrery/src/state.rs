use log::debug;
use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId, BodyRecord, BodyRole, PointMass};
use crate::error::{OrreryError, OrreryResult};
use crate::forces::ForceModel;

/// All bodies of a star/planet system in one homogeneous store
///
/// Bodies keep their insertion order for the lifetime of the system, so
/// iteration is deterministic. Stars and planets differ only by their
/// [`BodyRole`] tag, which the physics never looks at.
#[derive(Debug, Clone, Default)]
pub struct StarSystem {
    bodies: Vec<Body>,
    /// Next available body ID
    next_id: u32,
}

impl StarSystem {
    /// Creates an empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a system from loader records, stars first
    ///
    /// Ids are handed out in order: the first star gets `BodyId(0)`, the
    /// first planet follows the last star.
    ///
    /// # Errors
    ///
    /// Fails on the first record that does not validate; no partially built
    /// system is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{BodyId, BodyRecord};
    /// use orrery::state::StarSystem;
    ///
    /// let sun = BodyRecord::new("Sun", 1.989e30, 6.957e8, [0.0; 3], [0.0; 3], [255, 255, 0]);
    /// let earth = BodyRecord::new("Earth", 5.972e24, 6.371e6, [1.496e11, 0.0, 0.0], [0.0, 29.78e3, 0.0], [0, 0, 255]);
    ///
    /// let system = StarSystem::from_records(vec![sun], vec![earth]).unwrap();
    ///
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(system.stars().count(), 1);
    /// assert_eq!(system.get_body(BodyId(1)).unwrap().name, "Earth");
    /// ```
    pub fn from_records(stars: Vec<BodyRecord>, planets: Vec<BodyRecord>) -> OrreryResult<Self> {
        let mut system = Self::new();
        let star_count = stars.len();
        let planet_count = planets.len();

        for record in stars {
            system.add_body(BodyRole::Star, record)?;
        }
        for record in planets {
            system.add_body(BodyRole::Planet, record)?;
        }

        debug!("assembled system with {star_count} stars and {planet_count} planets");
        Ok(system)
    }

    /// Validates a record and adds it with a fresh id
    pub fn add_body(&mut self, role: BodyRole, record: BodyRecord) -> OrreryResult<BodyId> {
        let body = Body::new(BodyId(self.next_id), role, record)?;
        self.insert(body)
    }

    /// Adds an already built body, keeping its id
    ///
    /// # Errors
    ///
    /// Fails when the body breaks a physical invariant or its id is taken.
    pub fn insert(&mut self, body: Body) -> OrreryResult<BodyId> {
        body.validate()?;
        if self.index_of(body.id).is_some() {
            return Err(OrreryError::DuplicateBodyId(body.id));
        }

        let id = body.id;
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.bodies.push(body);
        Ok(id)
    }

    /// Every body, in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn stars(&self) -> impl Iterator<Item = &Body> + '_ {
        self.with_role(BodyRole::Star)
    }

    pub fn planets(&self) -> impl Iterator<Item = &Body> + '_ {
        self.with_role(BodyRole::Planet)
    }

    pub fn with_role(&self, role: BodyRole) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(move |b| b.role == role)
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.iter().map(|b| b.id)
    }

    /// Gets a reference to a body by ID
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Position of a body in iteration order
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Frozen masses and positions, in body order
    pub fn snapshot(&self) -> Vec<PointMass> {
        self.bodies.iter().map(Body::point_mass).collect()
    }

    /// Total force on one body from all others at the current instant
    ///
    /// Returns `None` for unknown ids. Does not mutate anything.
    pub fn total_force(&self, id: BodyId, force: &dyn ForceModel) -> Option<Vector3<f64>> {
        let idx = self.index_of(id)?;
        Some(force.total_force(idx, &self.snapshot()))
    }

    /// Total kinetic energy in joules
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total potential energy in joules under `force`
    pub fn potential_energy(&self, force: &dyn ForceModel) -> f64 {
        force.potential_energy(&self.snapshot())
    }

    /// Kinetic plus potential energy
    ///
    /// This should stay nearly constant for an isolated system
    /// (useful for checking numerical drift)
    pub fn total_energy(&self, force: &dyn ForceModel) -> f64 {
        self.kinetic_energy() + self.potential_energy(force)
    }

    /// Returns the total momentum of all bodies
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum `Σ m (r × v)` about the origin
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.position.coords.cross(&b.velocity) * b.mass)
            .fold(Vector3::zeros(), |acc, l| acc + l)
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<Point3<f64>> {
        if self.bodies.is_empty() {
            return None;
        }
        let total_mass: f64 = self.bodies.iter().map(|b| b.mass).sum();
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector3::zeros(), |acc, r| acc + r);
        Some(Point3::from(weighted / total_mass))
    }
}
