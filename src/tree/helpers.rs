//! Helper functions for tree building.
//!
//! This module contains the split criterion (entropy and information gain),
//! the best-split search and the recursive builder used by
//! [`DecisionTree::fit`](super::DecisionTree::fit).

use super::{DataPoint, Label, Leaf, Node, TreeNode};

/// Calculate the Shannon entropy (base 2) of the labels in `data`.
///
/// Formula: H = -Σ p_i · log2(p_i), over the distinct labels present.
/// Returns 0.0 for a pure set and for the empty set; the maximum, log2(k),
/// is reached by a uniform distribution over k labels.
pub fn entropy(data: &[&DataPoint]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let n = data.len() as f64;
    let h: f64 = label_counts(data)
        .into_iter()
        .map(|(_, count)| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum();

    // A pure set sums to -0.0
    h.max(0.0)
}

/// Calculate information gain of splitting `data` on `feature_idx` at `threshold`.
///
/// Gain is exactly 0.0 when either side of the split would be empty, so a
/// one-sided split can never be chosen. Never negative.
pub fn information_gain(data: &[&DataPoint], feature_idx: usize, threshold: f64) -> f64 {
    let (left, right) = partition(data, feature_idx, threshold);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let n = data.len() as f64;
    let weighted =
        (left.len() as f64 * entropy(&left) + right.len() as f64 * entropy(&right)) / n;

    (entropy(data) - weighted).max(0.0)
}

/// Get the sorted distinct values of one feature across `data`.
pub(super) fn sorted_unique_values(data: &[&DataPoint], feature_idx: usize) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().map(|p| p.features[feature_idx]).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Midpoints between adjacent distinct values; every distinct partition of
/// the feature is produced by exactly one of them.
pub(super) fn candidate_thresholds(data: &[&DataPoint], feature_idx: usize) -> Vec<f64> {
    sorted_unique_values(data, feature_idx)
        .windows(2)
        .map(|pair| midpoint(pair[0], pair[1]))
        .collect()
}

/// Threshold `t` with `lo <= t < hi`, for `lo < hi`.
///
/// Halving before adding keeps huge values finite. When `lo` and `hi` are
/// adjacent floats the midpoint can round up onto `hi`, so `lo` is used.
pub(super) fn midpoint(lo: f64, hi: f64) -> f64 {
    let mid = lo / 2.0 + hi / 2.0;
    if mid >= lo && mid < hi {
        mid
    } else {
        lo
    }
}

/// Split `data` into `(feature <= threshold, feature > threshold)`.
pub(super) fn partition<'a>(
    data: &[&'a DataPoint],
    feature_idx: usize,
    threshold: f64,
) -> (Vec<&'a DataPoint>, Vec<&'a DataPoint>) {
    data.iter()
        .copied()
        .partition(|p| p.features[feature_idx] <= threshold)
}

/// Find the best split across all features.
///
/// Candidates are scanned in feature-index then threshold order and only a
/// strictly greater gain replaces the current best, so ties go to the first
/// candidate.
///
/// # Returns
///
/// `Some((feature_idx, threshold, gain))` if some split has positive gain,
/// `None` otherwise
pub fn find_best_split(data: &[&DataPoint]) -> Option<(usize, f64, f64)> {
    let n_features = data.first()?.features.len();

    let mut best: Option<(usize, f64, f64)> = None;
    let mut best_gain = 0.0;

    for feature_idx in 0..n_features {
        for threshold in candidate_thresholds(data, feature_idx) {
            let gain = information_gain(data, feature_idx, threshold);
            if gain > best_gain {
                best_gain = gain;
                best = Some((feature_idx, threshold, gain));
            }
        }
    }

    best
}

/// Find the majority label.
///
/// Ties go to the label that appears first in `data`. Returns
/// [`Label::Unknown`] for empty data.
pub fn majority_label(data: &[&DataPoint]) -> Label {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in label_counts(data) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }

    best.map_or(Label::Unknown, |(label, _)| Label::Class(label.to_string()))
}

/// Count labels, in order of first appearance.
fn label_counts<'a>(data: &[&'a DataPoint]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for &point in data {
        match counts.iter_mut().find(|(label, _)| *label == point.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((&point.label, 1)),
        }
    }
    counts
}

/// Build a leaf holding the majority label of `data`.
pub(super) fn make_leaf(data: &[&DataPoint]) -> TreeNode {
    TreeNode::Leaf(Leaf {
        label: majority_label(data),
        n_samples: data.len(),
    })
}

fn is_pure(data: &[&DataPoint]) -> bool {
    data.windows(2).all(|pair| pair[0].label == pair[1].label)
}

/// Build a decision tree recursively.
///
/// # Arguments
///
/// * `data` - Training samples reaching this node
/// * `depth` - Current depth in tree (root is 0)
/// * `max_depth` - Maximum allowed depth
///
/// # Returns
///
/// Root node of the built subtree
pub(super) fn build_tree(data: &[&DataPoint], depth: usize, max_depth: usize) -> TreeNode {
    if depth >= max_depth || data.is_empty() || is_pure(data) {
        return make_leaf(data);
    }

    let Some((feature_idx, threshold, gain)) = find_best_split(data) else {
        return make_leaf(data);
    };

    let (left, right) = partition(data, feature_idx, threshold);
    tracing::trace!(
        depth,
        feature_idx,
        threshold,
        gain,
        n_left = left.len(),
        n_right = right.len(),
        "split"
    );

    TreeNode::Node(Node {
        feature_idx,
        threshold,
        left: Box::new(build_tree(&left, depth + 1, max_depth)),
        right: Box::new(build_tree(&right, depth + 1, max_depth)),
    })
}

/// Add each split's sample count to its feature.
pub(super) fn accumulate_feature_importances(node: &TreeNode, importances: &mut [f64]) {
    if let TreeNode::Node(n) = node {
        importances[n.feature_idx] += node.n_samples() as f64;
        accumulate_feature_importances(&n.left, importances);
        accumulate_feature_importances(&n.right, importances);
    }
}
