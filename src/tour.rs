//! Builds a visiting order over a set of [AngularPoint]s by greedily walking
//! to the closest point not yet visited. This is a cheap stand-in for a
//! shortest path through every point; there is no lookahead and no
//! backtracking.
//!
//! The walk starts at the point with the smallest `u`. Every tie, both for
//! the starting point and for each step, goes to the lowest index, so the
//! same input always gives the same tour.
//!
//! Each step scans every remaining point, so building a tour is O(n²). That
//! is fine for the few thousand points a scan uses; much larger inputs will
//! want a spatial index instead.

use crate::error::TourError;
use crate::point::{to_spherical, AngularPoint, CartesianPoint};
use log::{debug, warn};

/// Above this many points we warn that the quadratic walk will be slow.
pub const LARGE_TOUR_WARNING_THRESHOLD: usize = 10_000;

/// An ordering of the indices `0..n` of a point set. Every index appears
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

/// Builds a greedy nearest-neighbour [Tour] over `points`.
///
/// Fails with [TourError::EmptyInput] if there are no points, and with
/// [TourError::DegenerateInput] if any coordinate is NaN or infinite.
pub fn build_tour(points: &[AngularPoint]) -> Result<Tour, TourError> {
    let n = points.len();
    if n == 0 {
        return Err(TourError::EmptyInput);
    }
    if !points.iter().all(|p| p.u.is_finite() && p.v.is_finite()) {
        return Err(TourError::DegenerateInput);
    }
    if n > LARGE_TOUR_WARNING_THRESHOLD {
        warn!(
            "building a tour over {} points, this scales quadratically and may take a while",
            n
        );
    }

    let start = start_index(points);
    let mut visited = vec![false; n];
    let mut indices = Vec::with_capacity(n);
    visited[start] = true;
    indices.push(start);

    let mut last = start;
    while indices.len() < n {
        let from = &points[last];
        let mut best: Option<(usize, f64)> = None;

        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let dist = from.distance_sq(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        // There is always an unvisited point left while the path is short
        let Some((next, _)) = best else { break };
        visited[next] = true;
        indices.push(next);
        last = next;
    }

    debug!("built a tour over {} points starting at {}", n, start);
    Ok(Tour { indices })
}

/// Converts every point to angular coordinates, then builds a [Tour] over
/// them.
///
/// Fails with [TourError::DegenerateInput] if any point has no direction,
/// and with [TourError::EmptyInput] if there are no points.
pub fn tour_from_cartesian(points: &[CartesianPoint]) -> Result<Tour, TourError> {
    let angular = points
        .iter()
        .map(|&p| to_spherical(p).map(|s| s.angular()))
        .collect::<Result<Vec<_>, _>>()?;
    build_tour(&angular)
}

/// Index of the smallest `u`, the first one seen on ties.
fn start_index(points: &[AngularPoint]) -> usize {
    let mut min_ind = 0;
    for (i, point) in points.iter().enumerate().skip(1) {
        if point.u < points[min_ind].u {
            min_ind = i;
        }
    }
    min_ind
}

impl Tour {
    /// Rebuilds a [Tour] from a list of indices, for instance one read from
    /// disk. The list must be a non-empty permutation of `0..indices.len()`.
    pub fn from_indices(indices: Vec<usize>) -> Result<Self, TourError> {
        if indices.is_empty() {
            return Err(TourError::EmptyInput);
        }
        let mut seen = vec![false; indices.len()];
        for &i in &indices {
            match seen.get_mut(i) {
                Some(s) if !*s => *s = true,
                _ => return Err(TourError::InvalidPermutation),
            }
        }
        Ok(Self { indices })
    }

    /// The visiting order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The number of points in the tour.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`, a tour visits at least one point.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[allow(missing_docs)]
    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }

    /// Returns `items` rearranged into visiting order.
    ///
    /// Panics if `items` is not the same length as the tour.
    pub fn ordered<T: Clone>(&self, items: &[T]) -> Vec<T> {
        assert_eq!(
            items.len(),
            self.len(),
            "tour and items must be the same length"
        );
        self.indices.iter().map(|&i| items[i].clone()).collect()
    }

    /// Total length of the open path, summing the euclidean length of each
    /// hop in `(u, v)` space.
    ///
    /// Panics if `points` is not the same length as the tour.
    pub fn path_length(&self, points: &[AngularPoint]) -> f64 {
        assert_eq!(
            points.len(),
            self.len(),
            "tour and points must be the same length"
        );
        self.indices
            .windows(2)
            .map(|w| points[w[0]].distance(&points[w[1]]))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{random_sphere_points, GoldenSphere};
    use rand::{rngs::StdRng, SeedableRng};

    fn pts(coords: &[(f64, f64)]) -> Vec<AngularPoint> {
        coords.iter().map(|&(u, v)| AngularPoint::new(u, v)).collect()
    }

    fn assert_permutation(tour: &Tour, n: usize) {
        assert_eq!(tour.len(), n);
        let mut sorted = tour.indices().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input() {
        assert_eq!(build_tour(&[]), Err(TourError::EmptyInput));
        assert_eq!(tour_from_cartesian(&[]), Err(TourError::EmptyInput));
    }

    #[test]
    fn single_point() {
        let tour = build_tour(&pts(&[(3.0, -1.0)])).unwrap();
        assert_eq!(tour.indices(), &[0]);
    }

    #[test]
    fn starts_at_first_minimum_u() {
        let tour = build_tour(&pts(&[(5.0, 0.0), (1.0, 0.0), (1.0, 5.0)])).unwrap();
        assert_eq!(tour.indices()[0], 1);
        assert_eq!(tour.indices(), &[1, 0, 2]);
    }

    #[test]
    fn greedy_steps() {
        let tour = build_tour(&pts(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0), (2.0, 0.0)])).unwrap();
        assert_eq!(tour.indices(), &[0, 2, 3, 1]);
    }

    #[test]
    fn equal_distances_go_to_lowest_index() {
        // 1, 2 and 3 are all one unit from the start
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);
        let tour = build_tour(&points).unwrap();
        assert_eq!(tour.indices()[1], 1);
        assert_permutation(&tour, 4);
    }

    #[test]
    fn duplicate_points() {
        let points = pts(&[(1.0, 1.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
        let a = build_tour(&points).unwrap();
        let b = build_tour(&points).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.indices(), &[2, 0, 1, 3]);
    }

    #[test]
    fn random_sets_are_permutations() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for n in [1, 2, 3, 17, 250] {
            let points: Vec<_> = random_sphere_points(n, 1.0, &mut rng);
            let tour = tour_from_cartesian(&points).unwrap();
            assert_permutation(&tour, n);
            assert_eq!(tour, tour_from_cartesian(&points).unwrap());
        }
    }

    #[test]
    fn golden_sphere_tour() {
        let points = GoldenSphere::builder()
            .num_points(300)
            .maximum(0.75)
            .build()
            .generate();
        let tour = tour_from_cartesian(&points).unwrap();
        assert_permutation(&tour, 300);
    }

    #[test]
    fn degenerate_point_fails_whole_tour() {
        let points = [
            CartesianPoint::new(1.0, 0.0, 0.0),
            CartesianPoint::new(0.0, 0.0, 0.0),
        ];
        assert_eq!(tour_from_cartesian(&points), Err(TourError::DegenerateInput));
    }

    #[test]
    fn greedy_beats_input_order() {
        // Alternating far ends of a line, visiting in order zig-zags
        let points = pts(&[(0.0, 0.0), (9.0, 0.0), (1.0, 0.0), (8.0, 0.0), (2.0, 0.0)]);
        let tour = build_tour(&points).unwrap();
        let input_order = Tour::from_indices((0..5).collect()).unwrap();
        assert_eq!(tour.indices(), &[0, 2, 4, 3, 1]);
        assert_eq!(tour.path_length(&points), 9.0);
        assert!(tour.path_length(&points) < input_order.path_length(&points));
    }

    #[test]
    fn ordered_follows_tour() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
        let tour = build_tour(&points).unwrap();
        let names = ["a", "b", "c"];
        assert_eq!(tour.ordered(&names), vec!["a", "c", "b"]);

        let mut visited = Vec::new();
        for &i in &tour {
            visited.push(i);
        }
        assert_eq!(visited, vec![0, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn ordered_rejects_wrong_length() {
        let tour = build_tour(&pts(&[(0.0, 0.0), (1.0, 0.0)])).unwrap();
        let _ = tour.ordered(&[1]);
    }

    #[test]
    fn non_finite_points_rejected() {
        let points = pts(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 0.0), (5.0, 0.0)]);
        assert_eq!(build_tour(&points), Err(TourError::DegenerateInput));

        let points = pts(&[(0.0, f64::INFINITY), (1.0, 0.0)]);
        assert_eq!(build_tour(&points), Err(TourError::DegenerateInput));
    }

    #[test]
    fn nan_line_from_decoder_rejected() {
        let points: Vec<AngularPoint> =
            crate::point_decoder::parse_lines("0 0\nNaN 0\n1 0\n5 0\n").unwrap();
        assert_eq!(build_tour(&points), Err(TourError::DegenerateInput));
    }

    #[test]
    #[should_panic]
    fn path_length_rejects_short_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let tour = build_tour(&points).unwrap();
        tour.path_length(&points[..2]);
    }

    #[test]
    fn from_indices_validates() {
        assert_eq!(Tour::from_indices(vec![]), Err(TourError::EmptyInput));
        assert_eq!(
            Tour::from_indices(vec![0, 0, 1]),
            Err(TourError::InvalidPermutation)
        );
        assert_eq!(
            Tour::from_indices(vec![0, 3, 1]),
            Err(TourError::InvalidPermutation)
        );
        let tour = Tour::from_indices(vec![2, 0, 1]).unwrap();
        assert_eq!(tour.into_inner(), vec![2, 0, 1]);
    }
}
