//! Seeded k-means over signal embeddings.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::ClusterError;

/// Iteration cap; typical batches converge in well under this.
const MAX_ITERATIONS: usize = 100;

/// Partition `vectors` into `k` clusters, minimizing within-cluster squared
/// L2 distance to the centroid.
///
/// Centroids are initialized farthest-point style: the first is chosen by a
/// seeded draw, each subsequent one is the input point farthest from every
/// centroid picked so far (ties to the lowest index). Assignment and
/// mean-update then iterate to convergence or [`MAX_ITERATIONS`]. The
/// result is deterministic for a fixed (vectors, k, seed) triple. Cluster
/// ids are dense in `[0, k)` but carry no meaning across separate runs —
/// re-running over a grown store may assign the same signal a different id.
///
/// # Errors
///
/// - [`ClusterError::ZeroClusters`] when `k == 0`.
/// - [`ClusterError::TooFewSignals`] when `vectors.len() < k`; asking for
///   more clusters than points is a configuration error, not something to
///   silently clamp.
/// - [`ClusterError::DimensionMismatch`] when input vectors disagree on
///   dimensionality.
pub fn kmeans(vectors: &[Vec<f32>], k: usize, seed: u64) -> Result<Vec<usize>, ClusterError> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    let n = vectors.len();
    if n < k {
        return Err(ClusterError::TooFewSignals { have: n, want: k });
    }

    let dim = vectors[0].len();
    for v in vectors {
        if v.len() != dim {
            return Err(ClusterError::DimensionMismatch {
                first: dim,
                other: v.len(),
            });
        }
    }

    // Farthest-point init: seeded first pick, then greedily take the point
    // with the largest distance to its nearest chosen centroid.
    let mut rng = StdRng::seed_from_u64(seed);
    let first = rng.random_range(0..n);
    let mut centroids: Vec<Vec<f32>> = vec![vectors[first].clone()];
    let mut nearest: Vec<f32> = vectors.iter().map(|v| squared_l2(v, &vectors[first])).collect();

    while centroids.len() < k {
        let mut next = 0;
        let mut max_dist = f32::MIN;
        for (i, &dist) in nearest.iter().enumerate() {
            if dist > max_dist {
                max_dist = dist;
                next = i;
            }
        }
        centroids.push(vectors[next].clone());
        for (i, vector) in vectors.iter().enumerate() {
            let dist = squared_l2(vector, &vectors[next]);
            if dist < nearest[i] {
                nearest[i] = dist;
            }
        }
    }

    let mut assignments = vec![0_usize; n];

    for iteration in 0..MAX_ITERATIONS {
        let mut changed = false;

        for (i, vector) in vectors.iter().enumerate() {
            let mut best = 0;
            let mut best_dist = f32::MAX;
            for (c, centroid) in centroids.iter().enumerate() {
                let dist = squared_l2(vector, centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = c;
                }
            }
            if assignments[i] != best {
                assignments[i] = best;
                changed = true;
            }
        }

        if !changed && iteration > 0 {
            break;
        }

        let mut sums: Vec<Vec<f32>> = vec![vec![0.0; dim]; k];
        let mut counts = vec![0_usize; k];
        for (i, vector) in vectors.iter().enumerate() {
            let c = assignments[i];
            counts[c] += 1;
            for (j, &value) in vector.iter().enumerate() {
                sums[c][j] += value;
            }
        }

        for c in 0..k {
            if counts[c] > 0 {
                #[allow(clippy::cast_precision_loss)]
                let denom = counts[c] as f32;
                for j in 0..dim {
                    sums[c][j] /= denom;
                }
                centroids[c] = std::mem::take(&mut sums[c]);
            }
            // An empty cluster keeps its previous centroid.
        }
    }

    Ok(assignments)
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
