//! Output formatting utilities

use arbol::{DecisionTree, Label};
use colored::Colorize;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Render a predicted label, colouring known severities.
pub(crate) fn label(label: &Label) -> String {
    match label.as_str() {
        Some("Critical") => "Critical".red().bold().to_string(),
        Some("Major") => "Major".yellow().bold().to_string(),
        Some("Minor") => "Minor".green().bold().to_string(),
        Some(other) => other.bold().to_string(),
        None => label.to_string().dimmed().to_string(),
    }
}

/// Print shape statistics of a trained tree
pub(crate) fn tree_summary(tree: &DecisionTree) {
    section("Model");
    kv("Max depth", tree.max_depth());
    if let (Some(depth), Some(nodes), Some(leaves)) = (tree.depth(), tree.n_nodes(), tree.n_leaves())
    {
        kv("Depth", depth);
        kv("Nodes", nodes);
        kv("Leaves", leaves);
    }
}

/// Print the indented rule listing of a tree
pub(crate) fn tree_rules(tree: &DecisionTree) {
    section("Rules");
    for line in tree.to_string().lines() {
        println!("  {line}");
    }
}

/// Format a feature vector as `[a, b, c]`
pub(crate) fn features(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(f64::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_format() {
        assert_eq!(features(&[1.0, 2.5, -3.0]), "[1, 2.5, -3]");
        assert_eq!(features(&[]), "[]");
    }

    #[test]
    fn test_label_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(label(&Label::Class("Major".to_string())), "Major");
        assert_eq!(label(&Label::Unknown), "<unknown>");
    }
}
