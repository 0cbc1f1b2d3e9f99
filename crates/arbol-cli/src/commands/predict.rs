//! Predict command implementation
//!
//! Trains on a JSON array of data points and classifies feature vectors
//! given on the command line.

use crate::commands::{PredictionResult, TreeReport};
use crate::error::{CliError, Result};
use crate::output;
use arbol::{Classifier, DataPoint, DecisionTree, TreeConfig};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn run(
    data_path: &Path,
    config_path: Option<&Path>,
    max_depth: Option<usize>,
    features: &[String],
    json: bool,
    show_tree: bool,
) -> Result<()> {
    let data: Vec<DataPoint> = load_json(data_path)?;
    let mut config: TreeConfig = match config_path {
        Some(path) => load_json(path)?,
        None => TreeConfig::default(),
    };
    if let Some(depth) = max_depth {
        config.max_depth = depth;
    }
    tracing::debug!(
        n_samples = data.len(),
        max_depth = config.max_depth,
        "training from file"
    );

    let rows = features
        .iter()
        .map(|raw| parse_features(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut tree = DecisionTree::from_config(config)?;
    tree.fit(&data)?;
    let accuracy = tree.score(&data)?;
    let labels = tree.predict_batch(&rows)?;

    let predictions = rows
        .iter()
        .zip(&labels)
        .map(|(row, label)| PredictionResult::new(None, row, label))
        .collect();
    let report = TreeReport::new(&tree, accuracy, predictions, show_tree);

    if json {
        return report.print_json();
    }

    output::tree_summary(&tree);
    output::kv("Training samples", data.len());
    output::kv("Training accuracy", format!("{:.1}%", accuracy * 100.0));
    output::section("Predictions");
    for (row, label) in rows.iter().zip(&labels) {
        output::kv(&output::features(row), output::label(label));
    }
    if show_tree {
        output::tree_rules(&tree);
    }
    Ok(())
}

/// Read and deserialize a JSON file.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a comma-separated feature vector such as `"1.5, 0, 3"`.
pub(crate) fn parse_features(raw: &str) -> Result<Vec<f64>> {
    let invalid = |reason: String| CliError::InvalidFeatures {
        input: raw.to_string(),
        reason,
    };
    if raw.trim().is_empty() {
        return Err(invalid("empty feature vector".to_string()));
    }
    raw.split(',')
        .map(str::trim)
        .map(|part| {
            let value: f64 = part
                .parse()
                .map_err(|_| invalid(format!("'{part}' is not a number")))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(invalid(format!("'{part}' is not finite")))
            }
        })
        .collect()
}
