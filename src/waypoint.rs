//! Stepper motor positions for a pan/tilt head following a [Tour].

use crate::point::{AngularPoint, CartesianPoint};
use crate::tour::Tour;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Motor steps for half a revolution of either axis.
pub const STEPS_PER_HALF_TURN: f64 = 4000.0;

/// A target position for both motors, in steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    #[allow(missing_docs)]
    pub pitch: i32,
    #[allow(missing_docs)]
    pub yaw: i32,
}

impl Waypoint {
    /// Pitch comes from the polar angle `v`, yaw from the azimuth `u`.
    pub fn from_angular(point: AngularPoint) -> Self {
        Waypoint {
            pitch: (point.v / PI * STEPS_PER_HALF_TURN).round() as i32,
            yaw: (point.u / PI * STEPS_PER_HALF_TURN).round() as i32,
        }
    }

    /// Total steps both motors have to move to get from `self` to `other`.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        u64::from(self.pitch.abs_diff(other.pitch)) + u64::from(self.yaw.abs_diff(other.yaw))
    }

    /// The point `distance` away from the head in the direction the motors
    /// face at this waypoint, e.g. to place a range reading taken there.
    pub fn to_cartesian(&self, distance: f64) -> CartesianPoint {
        let phi = self.yaw as f64 / STEPS_PER_HALF_TURN * PI;
        let theta = self.pitch as f64 / STEPS_PER_HALF_TURN * PI;
        CartesianPoint {
            x: theta.sin() * phi.cos() * distance,
            y: theta.sin() * phi.sin() * distance,
            z: theta.cos() * distance,
        }
    }
}

/// Steps the motors make travelling the waypoints in order.
pub fn total_steps(waypoints: &[Waypoint]) -> u64 {
    waypoints
        .windows(2)
        .map(|w| w[0].manhattan_distance(&w[1]))
        .sum()
}

impl From<AngularPoint> for Waypoint {
    fn from(point: AngularPoint) -> Self {
        Waypoint::from_angular(point)
    }
}

impl Tour {
    /// The tour's points as [Waypoint]s, in visiting order.
    pub fn waypoints(&self, points: &[AngularPoint]) -> Vec<Waypoint> {
        self.ordered(points).into_iter().map(Waypoint::from).collect()
    }
}
