//! Core traits for classifiers.
//!
//! These traits define the API contract shared by arbol models.

use crate::error::Result;
use crate::tree::{DataPoint, Label};

/// Supervised classifier over labeled numeric feature vectors.
///
/// # Examples
///
/// ```
/// use arbol::prelude::*;
///
/// let data = vec![
///     DataPoint::new(vec![0.0], "low"),
///     DataPoint::new(vec![10.0], "high"),
/// ];
///
/// let mut tree = DecisionTree::new();
/// tree.fit(&data).unwrap();
/// assert_eq!(tree.predict(&[1.0]).unwrap(), "low");
/// assert!((tree.score(&data).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub trait Classifier {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if the training data is malformed.
    fn fit(&mut self, data: &[DataPoint]) -> Result<()>;

    /// Predicts the label for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the vector is too short.
    fn predict(&self, features: &[f64]) -> Result<Label>;

    /// Computes accuracy (fraction of correct predictions) on labeled data.
    ///
    /// Empty data scores `0.0`.
    ///
    /// # Errors
    ///
    /// Propagates the first prediction error.
    fn score(&self, data: &[DataPoint]) -> Result<f64> {
        if data.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0usize;
        for point in data {
            if self.predict(&point.features)? == point.label.as_str() {
                correct += 1;
            }
        }
        Ok(correct as f64 / data.len() as f64)
    }
}
