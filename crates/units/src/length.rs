use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// IAU 2012 astronomical unit in meters
pub const AU_TO_M: f64 = 149_597_870_700.0;
pub const KM_TO_M: f64 = 1_000.0;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// Nominal solar radius in meters (IAU 2015 B3)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct stores meters, matching the SI positions the
/// physics core integrates.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let earth_radius = Length::from_earth_radii(1.0);
///
/// assert!(earth_orbit.to_m() > 1.49e11);
/// assert_eq!(earth_radius.to_km(), 6_371.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M)
    }

    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_M
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
