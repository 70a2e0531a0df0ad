use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms (1.98847 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

/// Mass of the Earth in kilograms (5.972 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mass of Jupiter in kilograms (1.898 × 10²⁷ kg)
const JUPITER_MASS_KG: f64 = 1.898e27;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct stores kilograms, the unit the gravity law works in.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// // One solar mass is roughly 333,000 Earth masses
/// assert!((sun / earth - 332_960.0).abs() < 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let massive_star = Mass::from_solar_masses(25.0);
    /// assert!(massive_star.to_kg() > 4.9e31);
    /// ```
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_KG)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_KG
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 / JUPITER_MASS_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
