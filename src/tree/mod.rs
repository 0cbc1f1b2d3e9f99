//! Decision tree classifier.
//!
//! This module implements a CART-style classification tree:
//! - recursive binary splits on numeric features (`feature <= threshold`)
//! - split selection by information gain over label entropy
//! - majority-vote leaves, with [`Label::Unknown`] for leaves no data reached
//!
//! # Example
//!
//! ```
//! use arbol::prelude::*;
//!
//! let data = vec![
//!     DataPoint::new(vec![0.0, 0.0], "A"),
//!     DataPoint::new(vec![0.0, 1.0], "A"),
//!     DataPoint::new(vec![10.0, 0.0], "B"),
//!     DataPoint::new(vec![10.0, 1.0], "B"),
//! ];
//!
//! let mut tree = DecisionTree::new().with_max_depth(2);
//! tree.fit(&data).expect("fit should succeed");
//!
//! assert_eq!(tree.predict(&[1.0, 0.0]).expect("fitted"), "A");
//! assert_eq!(tree.predict(&[9.0, 1.0]).expect("fitted"), "B");
//! ```

pub mod helpers;

use crate::config::TreeConfig;
use crate::error::{ArbolError, Result};
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use helpers::{entropy, find_best_split, information_gain, majority_label};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Feature values; every point in a training set has the same length
    pub features: Vec<f64>,
    /// Categorical label
    pub label: String,
}

impl DataPoint {
    /// Creates a data point from features and a label.
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}

/// Label held by a leaf and returned by prediction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// A label seen in the training data
    Class(String),
    /// Sentinel for leaves that no training sample reached
    Unknown,
}

impl Label {
    /// Returns the class name, or `None` for [`Label::Unknown`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Label::Class(name) => Some(name),
            Label::Unknown => None,
        }
    }

    /// Returns true for the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Label::Unknown)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Class(name) => f.write_str(name),
            Label::Unknown => f.write_str("<unknown>"),
        }
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Internal node in a decision tree.
///
/// Contains a split condition (feature and threshold) and the two owned
/// subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Index of the feature to split on
    pub feature_idx: usize,
    /// Threshold value for the split
    pub threshold: f64,
    /// Left subtree (samples where feature <= threshold)
    pub left: Box<TreeNode>,
    /// Right subtree (samples where feature > threshold)
    pub right: Box<TreeNode>,
}

/// Leaf node in a decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Predicted label for this leaf
    pub label: Label,
    /// Number of training samples in this leaf
    pub n_samples: usize,
}

/// A node in a decision tree (either internal node or leaf).
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Internal decision node with split condition
    Node(Node),
    /// Leaf node with label prediction
    Leaf(Leaf),
}

impl TreeNode {
    /// Returns the depth of the tree rooted at this node.
    ///
    /// Leaf nodes have depth 0, internal nodes have depth 1 + max(left, right).
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Node(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    /// Total number of nodes (internal and leaf) in this subtree.
    pub fn n_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node(node) => 1 + node.left.n_nodes() + node.right.n_nodes(),
        }
    }

    /// Number of leaves in this subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Node(node) => node.left.n_leaves() + node.right.n_leaves(),
        }
    }

    /// Number of training samples that reached this subtree.
    pub fn n_samples(&self) -> usize {
        match self {
            TreeNode::Leaf(leaf) => leaf.n_samples,
            TreeNode::Node(node) => node.left.n_samples() + node.right.n_samples(),
        }
    }

    /// Walks the subtree for one feature vector and returns the leaf reached.
    ///
    /// # Errors
    ///
    /// Returns [`ArbolError::OutOfRangeFeature`] if a visited split needs a
    /// feature index beyond `features`.
    pub fn leaf_for(&self, features: &[f64]) -> Result<&Leaf> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf(leaf) => return Ok(leaf),
                TreeNode::Node(internal) => {
                    let value = features.get(internal.feature_idx).ok_or_else(|| {
                        ArbolError::out_of_range(internal.feature_idx, features.len())
                    })?;
                    if *value <= internal.threshold {
                        node = &internal.left;
                    } else {
                        node = &internal.right;
                    }
                }
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            TreeNode::Leaf(leaf) => {
                writeln!(f, "{pad}-> {} ({} samples)", leaf.label, leaf.n_samples)
            }
            TreeNode::Node(node) => {
                writeln!(f, "{pad}feature[{}] <= {}", node.feature_idx, node.threshold)?;
                node.left.write_indented(f, indent + 1)?;
                writeln!(f, "{pad}feature[{}] > {}", node.feature_idx, node.threshold)?;
                node.right.write_indented(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Decision tree classifier using the CART algorithm.
///
/// Uses information gain over label entropy as the splitting criterion and
/// builds trees recursively. The root is replaced wholesale by every
/// successful [`fit`](DecisionTree::fit).
#[derive(Debug, Clone)]
pub struct DecisionTree {
    tree: Option<TreeNode>,
    max_depth: usize,
    /// Number of features the model was trained on
    n_features: Option<usize>,
}

impl DecisionTree {
    /// Creates a new, untrained decision tree with the default max depth.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Creates an untrained tree from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ArbolError::InvalidHyperparameter`] if the config is invalid.
    pub fn from_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: TreeConfig) -> Self {
        Self {
            tree: None,
            max_depth: config.max_depth,
            n_features: None,
        }
    }

    /// Sets the maximum depth of the tree.
    ///
    /// Values below 1 are clamped to 1. Use
    /// [`from_config`](DecisionTree::from_config) to reject them with
    /// [`ArbolError::InvalidHyperparameter`] instead.
    ///
    /// # Arguments
    ///
    /// * `depth` - Maximum depth (root has depth 0)
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Configured maximum depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of features seen during training.
    pub fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    /// Returns true once [`fit`](DecisionTree::fit) has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    /// Root node of the trained tree.
    pub fn root(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Fits the decision tree to training data.
    ///
    /// Empty data is valid and produces a single [`Label::Unknown`] leaf.
    ///
    /// # Errors
    ///
    /// Returns [`ArbolError::DimensionMismatch`] if the feature vectors do
    /// not all have the same length. The previous tree is kept in that case.
    pub fn fit(&mut self, data: &[DataPoint]) -> Result<()> {
        let n_features = data.first().map_or(0, |point| point.features.len());
        if let Some(point) = data.iter().find(|p| p.features.len() != n_features) {
            return Err(ArbolError::dimension_mismatch(
                "n_features",
                n_features,
                point.features.len(),
            ));
        }

        tracing::debug!(
            n_samples = data.len(),
            n_features,
            max_depth = self.max_depth,
            "fitting decision tree"
        );

        let rows: Vec<&DataPoint> = data.iter().collect();
        let root = helpers::build_tree(&rows, 0, self.max_depth);

        tracing::debug!(
            depth = root.depth(),
            n_nodes = root.n_nodes(),
            n_leaves = root.n_leaves(),
            "decision tree fitted"
        );

        self.n_features = Some(n_features);
        self.tree = Some(root);
        Ok(())
    }

    /// Predicts the label for a single sample.
    ///
    /// Vectors longer than the training feature count are accepted; only the
    /// indices visited by the traversal are read.
    ///
    /// # Errors
    ///
    /// - [`ArbolError::UntrainedModel`] if called before `fit`
    /// - [`ArbolError::OutOfRangeFeature`] if `features` is too short for a
    ///   split on the path
    pub fn predict(&self, features: &[f64]) -> Result<Label> {
        let tree = self.tree.as_ref().ok_or(ArbolError::UntrainedModel)?;
        tree.leaf_for(features).map(|leaf| leaf.label.clone())
    }

    /// Predicts labels for many samples, preserving input order.
    ///
    /// Rows are predicted concurrently when the `parallel` feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered (see [`predict`](DecisionTree::predict)).
    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<Label>> {
        if self.tree.is_none() {
            return Err(ArbolError::UntrainedModel);
        }

        #[cfg(feature = "parallel")]
        let predictions: Result<Vec<Label>> = rows.par_iter().map(|row| self.predict(row)).collect();

        #[cfg(not(feature = "parallel"))]
        let predictions: Result<Vec<Label>> = rows.iter().map(|row| self.predict(row)).collect();

        predictions
    }

    /// Longest root-to-leaf path, counted in internal nodes.
    pub fn depth(&self) -> Option<usize> {
        self.tree.as_ref().map(TreeNode::depth)
    }

    /// Total number of nodes in the trained tree.
    pub fn n_nodes(&self) -> Option<usize> {
        self.tree.as_ref().map(TreeNode::n_nodes)
    }

    /// Number of leaves in the trained tree.
    pub fn n_leaves(&self) -> Option<usize> {
        self.tree.as_ref().map(TreeNode::n_leaves)
    }

    /// Returns normalized feature importances.
    ///
    /// Each split adds the number of training samples passing through it to
    /// its feature. The result sums to 1 unless the tree has no split, in
    /// which case every importance is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbol::prelude::*;
    ///
    /// let data = vec![
    ///     DataPoint::new(vec![1.0, 0.0], "a"),
    ///     DataPoint::new(vec![1.0, 9.0], "b"),
    /// ];
    /// let mut tree = DecisionTree::new();
    /// tree.fit(&data).unwrap();
    ///
    /// let importances = tree.feature_importances().unwrap();
    /// assert_eq!(importances, vec![0.0, 1.0]);
    /// ```
    pub fn feature_importances(&self) -> Option<Vec<f64>> {
        let tree = self.tree.as_ref()?;
        let n_features = self.n_features?;

        let mut importances = vec![0.0; n_features];
        helpers::accumulate_feature_importances(tree, &mut importances);

        let total: f64 = importances.iter().sum();
        if total > 0.0 {
            for importance in &mut importances {
                *importance /= total;
            }
        }
        Some(importances)
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for DecisionTree {
    fn fit(&mut self, data: &[DataPoint]) -> Result<()> {
        DecisionTree::fit(self, data)
    }

    fn predict(&self, features: &[f64]) -> Result<Label> {
        DecisionTree::predict(self, features)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tree {
            Some(root) => write!(f, "{root}"),
            None => f.write_str("<untrained>"),
        }
    }
}


#[cfg(test)]
mod tests_dt_contract;
