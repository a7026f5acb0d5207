//! SphereTour plans the order in which a pan/tilt LIDAR visits a set of
//! directions. Points are spread over (part of) a sphere, converted to
//! angular coordinates, and then walked greedily from nearest neighbour to
//! nearest neighbour so the motors never have to swing far between two
//! measurements.
//!
//! The heart of it is [tour::build_tour]. Everything else gets points in
//! and tours out: [generator] makes synthetic point sets, [point_decoder]
//! reads the line based format the plotting scripts use, [point_file]
//! stores points and tours as RON, and [waypoint] turns a tour into motor
//! steps.

#![warn(missing_docs)]
pub mod args;
pub mod error;
pub mod generator;
pub mod point;
pub mod point_decoder;
pub mod point_file;
pub mod tour;
pub mod waypoint;

pub use error::TourError;
pub use point::{to_spherical, AngularPoint, CartesianPoint, SphericalPoint};
pub use tour::{build_tour, tour_from_cartesian, Tour};
