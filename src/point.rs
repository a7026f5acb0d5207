//! Point types and the conversion from cartesian samples to the angular
//! coordinates the [tour](crate::tour) builder works on.

use crate::error::TourError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::Display;

/// A raw 3D sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    #[allow(missing_docs)]
    pub x: f64,
    #[allow(missing_docs)]
    pub y: f64,
    #[allow(missing_docs)]
    pub z: f64,
}

/// A 3D sample in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPoint {
    /// Radial distance from the origin
    pub p: f64,
    /// Azimuth, in `(-PI, PI]`
    pub phi: f64,
    /// Polar angle, in `[0, PI]`
    pub theta: f64,
}

/// A direction as a pair of angles `(u, v)`. When derived from a
/// [SphericalPoint], `u` is the azimuth and `v` the polar angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularPoint {
    #[allow(missing_docs)]
    pub u: f64,
    #[allow(missing_docs)]
    pub v: f64,
}

impl CartesianPoint {
    #[allow(missing_docs)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl SphericalPoint {
    /// Drops the radius, keeping `(phi, theta)`.
    pub fn angular(&self) -> AngularPoint {
        AngularPoint {
            u: self.phi,
            v: self.theta,
        }
    }
}

impl AngularPoint {
    #[allow(missing_docs)]
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Squared euclidean distance in `(u, v)` space. Ordering by this is the
    /// same as ordering by the true distance, so we skip the square root.
    pub fn distance_sq(&self, other: &Self) -> f64 {
        (self.u - other.u).powi(2) + (self.v - other.v).powi(2)
    }

    /// Euclidean distance in `(u, v)` space.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

impl Display for AngularPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.u, self.v)
    }
}

impl Display for CartesianPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Converts a cartesian point to `(p, phi, theta)`.
///
/// Fails with [TourError::DegenerateInput] when the point is the origin,
/// since `theta` would divide by zero, and when any coordinate is not finite.
pub fn to_spherical(point: CartesianPoint) -> Result<SphericalPoint, TourError> {
    let CartesianPoint { x, y, z } = point;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(TourError::DegenerateInput);
    }

    let p = point.norm();
    if p == 0.0 {
        return Err(TourError::DegenerateInput);
    }

    // atan2 returns -PI for a negative zero y on the negative x axis
    let phi = match y.atan2(x) {
        phi if phi == -PI => PI,
        phi => phi,
    };
    // Rounding can push the ratio a hair past 1 for points on the z axis
    let theta = (z / p).clamp(-1.0, 1.0).acos();

    Ok(SphericalPoint { p, phi, theta })
}
