//! Generators for synthetic point sets on a sphere. Each one returns a
//! fresh `Vec`, nothing is accumulated between calls.

use crate::point::CartesianPoint;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// The golden angle, in radians.
const GOLDEN_ANGLE: f64 = PI * 0.763_932_022_500_210_3; // PI * (3 - sqrt(5))

/// Points spread evenly over a band of a sphere using the golden angle
/// (Fibonacci) spiral. Use [GoldenSphere::builder()] to configure one.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenSphere {
    num_points: usize,
    radius: f64,
    minimum: f64,
    maximum: f64,
    angle_start: f64,
    angle_range: f64,
}

/// Sets up a [GoldenSphere]. Defaults to 100 points covering the whole unit
/// sphere.
#[derive(Debug, Clone)]
pub struct GoldenSphereBuilder {
    sphere: GoldenSphere,
}

impl Default for GoldenSphereBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenSphereBuilder {
    fn new() -> Self {
        GoldenSphereBuilder {
            sphere: GoldenSphere {
                num_points: 100,
                radius: 1.0,
                minimum: 0.0,
                maximum: 1.0,
                angle_start: 0.0,
                angle_range: 360.0,
            },
        }
    }

    /// How many points to generate.
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.sphere.num_points = num_points;
        self
    }

    /// Radius of the sphere.
    pub fn radius(mut self, radius: f64) -> Self {
        self.sphere.radius = radius;
        self
    }

    /// Where the band starts, as a fraction of the sphere's height from the
    /// bottom pole.
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.sphere.minimum = minimum;
        self
    }

    /// Where the band ends, as a fraction of the sphere's height from the
    /// bottom pole.
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.sphere.maximum = maximum;
        self
    }

    /// Start of the horizontal window, in degrees.
    pub fn angle_start(mut self, degrees: f64) -> Self {
        self.sphere.angle_start = degrees;
        self
    }

    /// Width of the horizontal window, in degrees.
    pub fn angle_range(mut self, degrees: f64) -> Self {
        self.sphere.angle_range = degrees;
        self
    }

    #[allow(missing_docs)]
    pub fn build(self) -> GoldenSphere {
        self.sphere
    }
}

impl GoldenSphere {
    /// Make a [GoldenSphereBuilder].
    pub fn builder() -> GoldenSphereBuilder {
        GoldenSphereBuilder::new()
    }

    #[allow(missing_docs)]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    fn windowed(&self) -> bool {
        self.angle_start != 0.0 || self.angle_range != 360.0
    }

    /// Height of point `index`, in `[-1, 1]`.
    fn height(&self, index: usize) -> f64 {
        let fraction = if self.num_points > 1 {
            index as f64 / (self.num_points - 1) as f64
        } else {
            0.0
        };
        (fraction * (self.maximum - self.minimum) + self.minimum) * 2.0 - 1.0
    }

    /// Generates the points, from the bottom of the band to the top.
    pub fn generate(&self) -> Vec<CartesianPoint> {
        let range = self.angle_range.to_radians();
        let start = self.angle_start.to_radians();

        (0..self.num_points)
            .map(|index| {
                let y = self.height(index);
                let mut theta = GOLDEN_ANGLE * index as f64;
                if self.windowed() {
                    theta = theta.rem_euclid(TAU) * range / TAU + start;
                }

                let r_y = (1.0 - y * y).max(0.0).sqrt();
                CartesianPoint {
                    x: theta.cos() * r_y * self.radius,
                    y: y * self.radius,
                    z: theta.sin() * r_y * self.radius,
                }
            })
            .collect()
    }
}

/// Generates `n` points uniformly distributed over a sphere of the given
/// radius, using the provided RNG.
pub fn random_sphere_points<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Vec<CartesianPoint> {
    (0..n)
        .map(|_| {
            let z: f64 = rng.gen_range(-1.0..1.0);
            let azimuth: f64 = rng.gen_range(0.0..TAU);
            let r = (1.0 - z * z).sqrt();
            CartesianPoint {
                x: r * azimuth.cos() * radius,
                y: r * azimuth.sin() * radius,
                z: z * radius,
            }
        })
        .collect()
}
