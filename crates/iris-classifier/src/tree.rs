//! CART decision trees with Gini impurity.

use std::cmp::Ordering;

use ndarray::ArrayView2;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Split-search parameters shared by every node of a tree.
pub(crate) struct SplitParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Number of features considered at each split (sqrt subsampling).
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Leaf {
        /// Class frequency distribution of the training samples that
        /// reached this leaf. Always sums to 1.
        probabilities: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A single trained decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    n_classes: usize,
}

impl DecisionTree {
    /// Fit a tree on the samples selected by `indices` (with repeats, as
    /// produced by bootstrap sampling).
    pub(crate) fn fit(
        x: ArrayView2<f64>,
        y: &[usize],
        indices: &[usize],
        n_classes: usize,
        params: &SplitParams,
        rng: &mut StdRng,
    ) -> Self {
        let root = build_node(x, y, indices, n_classes, params, 0, rng);
        Self { root, n_classes }
    }

    /// Class probability distribution for one sample: the frequency
    /// distribution of the leaf the sample routes to.
    pub fn predict_proba(&self, features: &[f64]) -> &[f64] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probabilities } => return probabilities,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}

fn class_counts(y: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in indices {
        counts[y[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: f64) -> f64 {
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

fn leaf(counts: &[usize]) -> Node {
    let total: usize = counts.iter().sum();
    let probabilities = counts.iter().map(|&c| c as f64 / total as f64).collect();
    Node::Leaf { probabilities }
}

fn build_node(
    x: ArrayView2<f64>,
    y: &[usize],
    indices: &[usize],
    n_classes: usize,
    params: &SplitParams,
    depth: usize,
    rng: &mut StdRng,
) -> Node {
    let counts = class_counts(y, indices, n_classes);
    let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;

    if is_pure || depth >= params.max_depth || indices.len() < params.min_samples_split {
        return leaf(&counts);
    }

    let Some((feature, threshold)) = best_split(x, y, indices, &counts, params, rng) else {
        // All candidate features were constant on this node
        return leaf(&counts);
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[[i, feature]] <= threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_node(
            x,
            y,
            &left_indices,
            n_classes,
            params,
            depth + 1,
            rng,
        )),
        right: Box::new(build_node(
            x,
            y,
            &right_indices,
            n_classes,
            params,
            depth + 1,
            rng,
        )),
    }
}

/// Find the (feature, midpoint threshold) pair minimizing weighted Gini
/// impurity over a random subset of features.
fn best_split(
    x: ArrayView2<f64>,
    y: &[usize],
    indices: &[usize],
    node_counts: &[usize],
    params: &SplitParams,
    rng: &mut StdRng,
) -> Option<(usize, f64)> {
    let n_features = x.ncols();
    let n_candidates = params.max_features.clamp(1, n_features);
    let feature_pool = rand::seq::index::sample(rng, n_features, n_candidates);

    let total = indices.len() as f64;
    let mut best: Option<(f64, usize, f64)> = None;

    for feature in feature_pool {
        let mut samples: Vec<(f64, usize)> = indices
            .iter()
            .map(|&i| (x[[i, feature]], y[i]))
            .collect();
        samples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let mut left_counts = vec![0usize; node_counts.len()];
        let mut right_counts = node_counts.to_vec();

        for k in 0..samples.len() - 1 {
            let (value, label) = samples[k];
            left_counts[label] += 1;
            right_counts[label] -= 1;

            // Only cut between distinct values
            if value == samples[k + 1].0 {
                continue;
            }

            let n_left = (k + 1) as f64;
            let n_right = total - n_left;
            let score = (n_left / total) * gini(&left_counts, n_left)
                + (n_right / total) * gini(&right_counts, n_right);

            let improves = match best {
                Some((best_score, _, _)) => score < best_score,
                None => true,
            };
            if improves {
                let threshold = (value + samples[k + 1].0) / 2.0;
                best = Some((score, feature, threshold));
            }
        }
    }

    best.map(|(_, feature, threshold)| (feature, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use rand::SeedableRng;

    fn params() -> SplitParams {
        SplitParams {
            max_depth: 5,
            min_samples_split: 2,
            max_features: 2,
        }
    }

    fn separable_data() -> (Array2<f64>, Vec<usize>) {
        // Class 0 clusters low on both features, class 1 high
        let x = Array2::from_shape_vec(
            (8, 2),
            vec![
                0.1, 0.2, //
                0.2, 0.1, //
                0.3, 0.3, //
                0.2, 0.2, //
                0.9, 0.8, //
                0.8, 0.9, //
                0.7, 0.8, //
                0.9, 0.9,
            ],
        )
        .unwrap();
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        (x, y)
    }

    #[test]
    fn test_separable_data_is_classified_perfectly() {
        let (x, y) = separable_data();
        let indices: Vec<usize> = (0..y.len()).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let tree = DecisionTree::fit(x.view(), &y, &indices, 2, &params(), &mut rng);

        let low = tree.predict_proba(&[0.15, 0.25]);
        let high = tree.predict_proba(&[0.85, 0.85]);
        assert_eq!(low, &[1.0, 0.0]);
        assert_eq!(high, &[0.0, 1.0]);
    }

    #[test]
    fn test_leaf_probabilities_sum_to_one() {
        let (x, y) = separable_data();
        let indices: Vec<usize> = (0..y.len()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let tree = DecisionTree::fit(x.view(), &y, &indices, 2, &params(), &mut rng);

        for sample in [[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]] {
            let probs = tree.predict_proba(&sample);
            let sum: f64 = probs.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_features_produce_a_leaf() {
        let x = Array2::from_shape_vec((4, 2), vec![1.0; 8]).unwrap();
        let y = vec![0, 0, 1, 1];
        let indices: Vec<usize> = (0..4).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let tree = DecisionTree::fit(x.view(), &y, &indices, 2, &params(), &mut rng);

        let probs = tree.predict_proba(&[1.0, 1.0]);
        assert_eq!(probs, &[0.5, 0.5]);
    }

    #[test]
    fn test_max_depth_zero_is_a_prior_leaf() {
        let (x, y) = separable_data();
        let indices: Vec<usize> = (0..y.len()).collect();
        let shallow = SplitParams {
            max_depth: 0,
            min_samples_split: 2,
            max_features: 2,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let tree = DecisionTree::fit(x.view(), &y, &indices, 2, &shallow, &mut rng);

        assert_eq!(tree.predict_proba(&[0.1, 0.1]), &[0.5, 0.5]);
    }
}
