//! Hot-zone prediction: k-means clustering of shot landing positions.
//!
//! The predictor is deliberately forgiving. Any internal failure degrades to
//! "no hot zones" so a delivery plan is always produced; the cause is logged
//! for later debugging instead of failing the request.

use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::warn;

use crate::state::field::Point;

/// Number of hot zones extracted from the shot history.
pub const NUM_CLUSTERS: usize = 2;

/// Fixed seed so centroid initialisation is reproducible for identical input.
const KMEANS_SEED: u64 = 42;
/// Upper bound on Lloyd iterations; a few dozen 2D points converge well before this.
const MAX_ITERATIONS: usize = 50;
/// Centroid movement (squared) below which the iteration stops.
const MOVE_EPSILON: f64 = 1e-6;

/// Failures internal to the clustering routine.
#[derive(Debug, Error)]
enum ClusterError {
    /// A shot position carried a NaN or infinite coordinate.
    #[error("non-finite shot coordinate at index {0}")]
    NonFinite(usize),
}

/// Cluster the shot history into up to [`NUM_CLUSTERS`] hot zones.
///
/// Returns an empty list when there are too few shots to partition
/// meaningfully (`len <= NUM_CLUSTERS`) or when clustering fails internally.
/// Centroid order is not guaranteed to be stable across differing inputs.
pub fn predict(shot_history: &[Point]) -> Vec<Point> {
    if shot_history.len() <= NUM_CLUSTERS {
        return Vec::new();
    }

    match cluster(shot_history) {
        Ok(centroids) => centroids,
        Err(err) => {
            warn!(
                shots = shot_history.len(),
                error = %err,
                "hot-zone clustering failed; returning no zones"
            );
            Vec::new()
        }
    }
}

/// Plain Lloyd k-means with seeded initialisation.
///
/// The first centroid is a seeded random pick, the second the point farthest
/// from it, which keeps the partition deterministic for a given history.
fn cluster(points: &[Point]) -> Result<Vec<Point>, ClusterError> {
    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(ClusterError::NonFinite(index));
    }

    let mut rng = StdRng::seed_from_u64(KMEANS_SEED);
    let first = points[rng.random_range(0..points.len())];
    let second = points
        .iter()
        .max_by(|a, b| {
            first
                .distance_squared(a)
                .total_cmp(&first.distance_squared(b))
        })
        .copied()
        .unwrap_or(first);
    let mut centroids = vec![first, second];

    let mut assignments = vec![0usize; points.len()];
    for _ in 0..MAX_ITERATIONS {
        for (point, slot) in points.iter().zip(assignments.iter_mut()) {
            *slot = nearest_centroid(point, &centroids);
        }

        let mut moved = 0.0f64;
        for (index, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Point> = points
                .iter()
                .zip(&assignments)
                .filter(|&(_, &slot)| slot == index)
                .map(|(point, _)| point)
                .collect();
            // An empty cluster keeps its previous centroid.
            if members.is_empty() {
                continue;
            }

            let count = members.len() as f64;
            let mean = Point::new(
                members.iter().map(|p| p.x).sum::<f64>() / count,
                members.iter().map(|p| p.y).sum::<f64>() / count,
            );
            moved = moved.max(centroid.distance_squared(&mean));
            *centroid = mean;
        }

        if moved < MOVE_EPSILON {
            break;
        }
    }

    Ok(centroids)
}

/// Index of the centroid closest to `point`; ties go to the lower index.
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = point.distance_squared(centroid);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shots(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn too_few_shots_yield_no_zones() {
        assert!(predict(&[]).is_empty());
        assert!(predict(&shots(&[(10.0, 10.0)])).is_empty());
        assert!(predict(&shots(&[(10.0, 10.0), (500.0, 300.0)])).is_empty());
    }

    #[test]
    fn three_shots_yield_two_finite_centroids() {
        let zones = predict(&shots(&[(10.0, 10.0), (12.0, 11.0), (500.0, 300.0)]));
        assert_eq!(zones.len(), NUM_CLUSTERS);
        for zone in &zones {
            assert!(zone.x.is_finite());
            assert!(zone.y.is_finite());
        }
    }

    #[test]
    fn two_tight_groups_produce_centroids_near_their_means() {
        let history = shots(&[
            (100.0, 100.0),
            (102.0, 98.0),
            (98.0, 101.0),
            (500.0, 300.0),
            (498.0, 302.0),
            (502.0, 299.0),
        ]);
        let mut zones = predict(&history);
        assert_eq!(zones.len(), NUM_CLUSTERS);
        zones.sort_by(|a, b| a.x.total_cmp(&b.x));

        assert!(zones[0].distance_squared(&Point::new(100.0, 99.666_666)) < 1.0);
        assert!(zones[1].distance_squared(&Point::new(500.0, 300.333_333)) < 1.0);
    }

    #[test]
    fn prediction_is_deterministic_for_identical_input() {
        let history = shots(&[(50.0, 60.0), (70.0, 80.0), (400.0, 350.0), (420.0, 340.0)]);
        assert_eq!(predict(&history), predict(&history));
    }

    #[test]
    fn identical_points_still_yield_two_centroids() {
        let history = shots(&[(200.0, 200.0), (200.0, 200.0), (200.0, 200.0)]);
        let zones = predict(&history);
        assert_eq!(zones.len(), NUM_CLUSTERS);
        for zone in &zones {
            assert_eq!(*zone, Point::new(200.0, 200.0));
        }
    }

    #[test]
    fn non_finite_input_degrades_to_empty() {
        let history = shots(&[(10.0, 10.0), (f64::NAN, 20.0), (30.0, 30.0)]);
        assert!(predict(&history).is_empty());

        let history = shots(&[(10.0, 10.0), (20.0, f64::INFINITY), (30.0, 30.0)]);
        assert!(predict(&history).is_empty());
    }
}
