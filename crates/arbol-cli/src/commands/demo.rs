//! Demo command implementation
//!
//! Trains a tree on the built-in bug-severity reports and triages three
//! sample bugs.

use crate::commands::{PredictionResult, TreeReport};
use crate::dataset::{self, FEATURE_NAMES};
use crate::error::Result;
use crate::output;
use arbol::{Classifier, DecisionTree, TreeConfig};
use colored::Colorize;

/// Default tree depth for the demo model
pub(crate) const DEMO_MAX_DEPTH: usize = 4;

pub(crate) fn run(max_depth: usize, json: bool, show_tree: bool) -> Result<()> {
    let data = dataset::bug_reports();
    let mut tree = DecisionTree::from_config(TreeConfig::new(max_depth))?;
    tree.fit(&data)?;
    let accuracy = tree.score(&data)?;
    tracing::debug!(accuracy, "trained demo model");

    let bugs = dataset::sample_bugs();
    let labels = bugs
        .iter()
        .map(|bug| tree.predict(&bug.features))
        .collect::<arbol::Result<Vec<_>>>()?;
    let predictions = bugs
        .iter()
        .zip(&labels)
        .map(|(bug, label)| PredictionResult::new(Some(bug.description), &bug.features, label))
        .collect();

    let report = TreeReport::new(&tree, accuracy, predictions, show_tree);
    if json {
        return report.print_json();
    }

    println!("{}", "Bug Severity Triage".bold());
    output::tree_summary(&tree);
    output::kv("Training accuracy", format!("{:.1}%", accuracy * 100.0));

    section_importances(&report.feature_importances);

    for (bug, label) in bugs.iter().zip(&labels) {
        output::section(bug.description);
        for (idx, (name, value)) in FEATURE_NAMES.iter().zip(bug.features).enumerate() {
            output::kv(name, dataset::describe_value(idx, value));
        }
        output::kv("Predicted severity", output::label(label));
    }

    if show_tree {
        output::tree_rules(&tree);
    }
    Ok(())
}

fn section_importances(importances: &[f64]) {
    if importances.iter().all(|&w| w == 0.0) {
        return;
    }
    output::section("Feature importances");
    for (name, weight) in FEATURE_NAMES.iter().zip(importances) {
        output::kv(name, format!("{weight:.3}"));
    }
}
