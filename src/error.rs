//! The errors that can come out of converting points and building tours.

use std::{error::Error, fmt};

/// Everything that can go wrong while validating input for a [Tour](crate::tour::Tour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourError {
    /// Returned when the point set has no points, so there is nothing to tour.
    EmptyInput,

    /// Returned when a cartesian point sits on the origin, so its polar angle
    /// is undefined, or when any point has a NaN or infinite coordinate.
    DegenerateInput,

    /// Returned when a stored list of indices is not a permutation of `0..n`.
    InvalidPermutation,
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TourError::EmptyInput => "point set is empty",
            TourError::DegenerateInput => "point has no defined direction",
            TourError::InvalidPermutation => "indices are not a permutation",
        };
        write!(f, "{}", msg)
    }
}

impl Error for TourError {}
