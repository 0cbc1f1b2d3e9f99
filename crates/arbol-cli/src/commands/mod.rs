//! Subcommand implementations

pub(crate) mod demo;
pub(crate) mod predict;

use crate::error::{CliError, Result};
use arbol::{DecisionTree, Label};
use serde::Serialize;

/// One prediction, for display/JSON
#[derive(Serialize)]
pub(crate) struct PredictionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) features: Vec<f64>,
    pub(crate) prediction: String,
}

impl PredictionResult {
    pub(crate) fn new(description: Option<&str>, features: &[f64], label: &Label) -> Self {
        Self {
            description: description.map(str::to_string),
            features: features.to_vec(),
            prediction: label.to_string(),
        }
    }
}

/// Trained model plus its predictions
#[derive(Serialize)]
pub(crate) struct TreeReport {
    pub(crate) max_depth: usize,
    pub(crate) depth: usize,
    pub(crate) n_nodes: usize,
    pub(crate) n_leaves: usize,
    pub(crate) training_accuracy: f64,
    pub(crate) feature_importances: Vec<f64>,
    pub(crate) predictions: Vec<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rules: Option<String>,
}

impl TreeReport {
    /// Collect shape statistics from a fitted tree.
    pub(crate) fn new(
        tree: &DecisionTree,
        training_accuracy: f64,
        predictions: Vec<PredictionResult>,
        show_tree: bool,
    ) -> Self {
        Self {
            max_depth: tree.max_depth(),
            depth: tree.depth().unwrap_or(0),
            n_nodes: tree.n_nodes().unwrap_or(0),
            n_leaves: tree.n_leaves().unwrap_or(0),
            training_accuracy,
            feature_importances: tree.feature_importances().unwrap_or_default(),
            predictions,
            rules: show_tree.then(|| tree.to_string()),
        }
    }

    /// Render as pretty JSON.
    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CliError::Serialize)
    }

    /// Print as pretty JSON on stdout.
    pub(crate) fn print_json(&self) -> Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbol::DataPoint;

    #[test]
    fn test_report_json_round_trips_predictions() {
        let data = vec![
            DataPoint::new(vec![1.0], "A"),
            DataPoint::new(vec![3.0], "B"),
        ];
        let mut tree = DecisionTree::new();
        tree.fit(&data).unwrap();
        let label = tree.predict(&[3.5]).unwrap();
        let report = TreeReport::new(
            &tree,
            1.0,
            vec![PredictionResult::new(None, &[3.5], &label)],
            false,
        );

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["predictions"][0]["prediction"], "B");
        assert_eq!(json["n_leaves"], 2);
        assert!(json["predictions"][0].get("description").is_none());
        assert!(json.get("rules").is_none());
    }
}
