//! Bootstrap random forest over CART trees.

use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::tree::{DecisionTree, SplitParams};

/// Training hyperparameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Maximum tree depth.
    pub max_depth: usize,
    /// Minimum samples required to attempt a split.
    pub min_samples_split: usize,
    /// RNG seed for bootstrap and feature sampling.
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 5,
            min_samples_split: 2,
            seed: 42,
        }
    }
}

/// A trained random forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
}

impl RandomForest {
    /// Train an ensemble: each tree fits a bootstrap resample of the
    /// rows and considers sqrt(n_features) random features per split.
    /// The same seed always produces the same forest.
    pub fn fit(x: ArrayView2<f64>, y: &[usize], n_classes: usize, config: &ForestConfig) -> Self {
        let n = x.nrows();
        let max_features = (x.ncols() as f64).sqrt().round().max(1.0) as usize;
        let params = SplitParams {
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            max_features,
        };

        let mut rng = StdRng::seed_from_u64(config.seed);
        let trees = (0..config.n_trees)
            .map(|_| {
                let indices: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                DecisionTree::fit(x, y, &indices, n_classes, &params, &mut rng)
            })
            .collect();

        Self { trees, n_classes }
    }

    /// Average the per-tree leaf distributions. Sums to 1.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let mut acc = vec![0.0_f64; self.n_classes];
        for tree in &self.trees {
            for (slot, p) in acc.iter_mut().zip(tree.predict_proba(features)) {
                *slot += p;
            }
        }
        let n = self.trees.len() as f64;
        for slot in &mut acc {
            *slot /= n;
        }
        acc
    }

    /// Predicted class index: argmax of the averaged distribution,
    /// lowest index on ties.
    pub fn predict(&self, features: &[f64]) -> usize {
        let probs = self.predict_proba(features);
        probs
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |(best_i, best_p), (i, &p)| {
                if p > best_p {
                    (i, p)
                } else {
                    (best_i, best_p)
                }
            })
            .0
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
