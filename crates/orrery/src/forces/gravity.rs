//! Direct N-body gravity (O(N²) implementation)

use crate::body::{Body, PointMass};
use crate::forces::{ForceModel, COINCIDENCE_THRESHOLD, G};
use nalgebra::Vector3;

/// Newton's law of universal gravitation
///
/// `F = G · m₁ · m₂ / d² · r̂`, pointing from the body acted on toward the
/// attracting body. Pairs closer than `threshold` are treated as coincident
/// and exert no force on each other.
///
/// # Examples
///
/// ```
/// use orrery::forces::{NewtonianGravity, ForceModel};
/// use orrery::body::PointMass;
/// use nalgebra::Point3;
///
/// let a = PointMass::new(1e24, Point3::origin());
/// let b = PointMass::new(1e24, Point3::new(1e8, 0.0, 0.0));
///
/// let gravity = NewtonianGravity::new();
/// let f = gravity.pairwise_force(&a, &b);
///
/// assert!((f.x - 6.6743e21).abs() / 6.6743e21 < 1e-12);
/// assert_eq!(f, -gravity.pairwise_force(&b, &a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    /// Gravitational constant (N·m²/kg²)
    pub g: f64,
    /// Coincidence distance (m)
    pub threshold: f64,
}

impl NewtonianGravity {
    /// Creates the law with the CODATA value of `G`
    pub fn new() -> Self {
        Self {
            g: G,
            threshold: COINCIDENCE_THRESHOLD,
        }
    }

    /// Creates the law with a custom gravitational constant
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::forces::NewtonianGravity;
    ///
    /// // Unit constant keeps hand-checked numbers small
    /// let gravity = NewtonianGravity::with_constant(1.0);
    /// assert_eq!(gravity.g, 1.0);
    /// ```
    pub fn with_constant(g: f64) -> Self {
        Self {
            g,
            ..Self::new()
        }
    }

    /// Replaces the coincidence distance
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Force exerted by `from` on `on`
    pub fn force(&self, on: &Body, from: &Body) -> Vector3<f64> {
        self.pairwise_force(&on.point_mass(), &from.point_mass())
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for NewtonianGravity {
    fn pairwise_force(&self, on: &PointMass, from: &PointMass) -> Vector3<f64> {
        let r = from.position - on.position;
        let d = r.magnitude();

        if d < self.threshold {
            return Vector3::zeros();
        }

        // F(a, b) == -F(b, a) bit for bit: the mass product commutes
        let magnitude = self.g * (on.mass * from.mass) / (d * d);
        (r / d) * magnitude
    }

    fn potential_energy(&self, snapshot: &[PointMass]) -> f64 {
        // Each pair counted once
        snapshot
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                snapshot[i + 1..].iter().map(move |b| {
                    let d = (b.position - a.position).magnitude();
                    if d < self.threshold {
                        0.0
                    } else {
                        -self.g * a.mass * b.mass / d
                    }
                })
            })
            .sum()
    }
}

/// Speed of a circular orbit of radius `distance` around `central_mass`
///
/// # Examples
///
/// ```
/// use orrery::forces::gravity::circular_velocity;
/// use orrery::forces::G;
///
/// // Earth around the Sun: close to 29.8 km/s
/// let v = circular_velocity(G, 1.989e30, 1.496e11);
/// assert!((v - 29_785.0).abs() < 10.0);
/// ```
pub fn circular_velocity(g: f64, central_mass: f64, distance: f64) -> f64 {
    (g * central_mass / distance).sqrt()
}
