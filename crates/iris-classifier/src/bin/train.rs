//! Model training binary.
//!
//! Trains the random forest on the iris CSV dataset and writes the
//! JSON artifact the API server loads at startup.

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use iris_classifier::{Dataset, ForestConfig, ModelArtifact, ModelError, RandomForest};

/// Fraction of each class held out for the accuracy estimate.
const TEST_RATIO: f64 = 0.2;
/// Seed shared by the split and the forest for reproducible artifacts.
const SEED: u64 = 42;

fn main() -> Result<(), ModelError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("iris=info".parse().expect("valid directive")),
        )
        .init();

    let data_path = std::env::var("IRIS_DATA").unwrap_or_else(|_| "data/iris.csv".to_string());
    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| "model/iris_model.json".to_string());

    info!(path = %data_path, "Loading iris dataset");
    let dataset = Dataset::load_csv(&data_path)?;
    info!(
        rows = dataset.len(),
        features = ?dataset.feature_names,
        classes = ?dataset.class_names,
        "Dataset loaded"
    );

    let (train, test) = dataset.stratified_split(TEST_RATIO, SEED);
    info!(train = train.len(), test = test.len(), "Split dataset");

    let config = ForestConfig {
        seed: SEED,
        ..ForestConfig::default()
    };
    info!(
        n_trees = config.n_trees,
        max_depth = config.max_depth,
        "Training random forest"
    );
    let forest = RandomForest::fit(
        train.features.view(),
        &train.labels,
        train.class_names.len(),
        &config,
    );

    let accuracy = evaluate(&forest, &test);
    info!(accuracy = %format!("{:.2}%", accuracy * 100.0), "Held-out accuracy");
    for (class, name) in test.class_names.iter().enumerate() {
        let (correct, total) = class_accuracy(&forest, &test, class);
        info!(class = %name, correct, total, "Per-class results");
    }

    let artifact = ModelArtifact {
        forest,
        feature_names: dataset.feature_names.clone(),
        class_names: dataset.class_names.clone(),
        accuracy,
        trained_at: Utc::now(),
    };
    artifact.save(&model_path)?;
    info!(path = %model_path, "Model saved");

    Ok(())
}

fn evaluate(forest: &RandomForest, test: &Dataset) -> f64 {
    if test.is_empty() {
        return 0.0;
    }
    let correct = (0..test.len())
        .filter(|&i| {
            let row: Vec<f64> = test.features.row(i).iter().copied().collect();
            forest.predict(&row) == test.labels[i]
        })
        .count();
    correct as f64 / test.len() as f64
}

fn class_accuracy(forest: &RandomForest, test: &Dataset, class: usize) -> (usize, usize) {
    let members: Vec<usize> = (0..test.len())
        .filter(|&i| test.labels[i] == class)
        .collect();
    let correct = members
        .iter()
        .filter(|&&i| {
            let row: Vec<f64> = test.features.row(i).iter().copied().collect();
            forest.predict(&row) == class
        })
        .count();
    (correct, members.len())
}
