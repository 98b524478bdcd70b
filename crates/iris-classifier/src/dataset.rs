//! Iris CSV dataset loading and splitting.

use std::fs;
use std::path::Path;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{ModelError, ModelResult};

/// A labelled tabular dataset.
///
/// Rows of `features` align with `labels`; `labels` index into
/// `class_names`, which preserves first-appearance order from the CSV.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Vec<usize>,
    pub class_names: Vec<String>,
    pub feature_names: Vec<String>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row; the last
    /// column is the class name, every other column a numeric feature.
    pub fn load_csv(path: impl AsRef<Path>) -> ModelResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse CSV content. See [`Dataset::load_csv`] for the format.
    pub fn parse(content: &str) -> ModelResult<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| ModelError::invalid_dataset("empty file"))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        if columns.len() < 2 {
            return Err(ModelError::invalid_dataset(
                "header needs at least one feature column and a class column",
            ));
        }
        let n_features = columns.len() - 1;
        let feature_names: Vec<String> = columns[..n_features]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut values = Vec::new();
        let mut labels = Vec::new();
        let mut class_names: Vec<String> = Vec::new();

        for (row, line) in lines.enumerate() {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != columns.len() {
                return Err(ModelError::invalid_dataset(format!(
                    "row {}: expected {} columns, got {}",
                    row + 2,
                    columns.len(),
                    fields.len()
                )));
            }

            for field in &fields[..n_features] {
                let value: f64 = field.parse().map_err(|_| {
                    ModelError::invalid_dataset(format!(
                        "row {}: non-numeric feature value {:?}",
                        row + 2,
                        field
                    ))
                })?;
                values.push(value);
            }

            let class = fields[n_features];
            let label = match class_names.iter().position(|name| name == class) {
                Some(index) => index,
                None => {
                    class_names.push(class.to_string());
                    class_names.len() - 1
                }
            };
            labels.push(label);
        }

        if labels.is_empty() {
            return Err(ModelError::invalid_dataset("no data rows"));
        }

        let features = Array2::from_shape_vec((labels.len(), n_features), values)
            .map_err(|e| ModelError::invalid_dataset(e.to_string()))?;

        Ok(Self {
            features,
            labels,
            class_names,
            feature_names,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Split into train and test sets, sampling `test_ratio` of each
    /// class so both sides keep the class balance. Deterministic for a
    /// given seed.
    pub fn stratified_split(&self, test_ratio: f64, seed: u64) -> (Dataset, Dataset) {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut train_indices = Vec::new();
        let mut test_indices = Vec::new();

        for class in 0..self.class_names.len() {
            let mut members: Vec<usize> = (0..self.len())
                .filter(|&i| self.labels[i] == class)
                .collect();
            members.shuffle(&mut rng);

            let n_test = (members.len() as f64 * test_ratio).round() as usize;
            test_indices.extend_from_slice(&members[..n_test]);
            train_indices.extend_from_slice(&members[n_test..]);
        }

        train_indices.sort_unstable();
        test_indices.sort_unstable();

        (self.subset(&train_indices), self.subset(&test_indices))
    }

    fn subset(&self, indices: &[usize]) -> Dataset {
        let n_features = self.features.ncols();
        let mut values = Vec::with_capacity(indices.len() * n_features);
        let mut labels = Vec::with_capacity(indices.len());

        for &i in indices {
            values.extend(self.features.row(i).iter().copied());
            labels.push(self.labels[i]);
        }

        let features = Array2::from_shape_vec((indices.len(), n_features), values)
            .unwrap_or_else(|_| Array2::zeros((0, n_features)));

        Dataset {
            features,
            labels,
            class_names: self.class_names.clone(),
            feature_names: self.feature_names.clone(),
        }
    }
}
