//! Error types for arbol operations.
//!
//! Training never fails on degenerate data (empty sets, single labels,
//! indistinguishable rows all become leaves). Errors are reserved for
//! contract violations: predicting before training, feature vectors that
//! are too short, ragged training sets and invalid configuration.

use thiserror::Error;

/// Main error type for arbol operations.
///
/// # Examples
///
/// ```
/// use arbol::error::ArbolError;
///
/// let err = ArbolError::OutOfRangeFeature {
///     feature_idx: 3,
///     n_features: 2,
/// };
/// assert!(err.to_string().contains("feature index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbolError {
    /// Prediction attempted before the tree was trained.
    #[error("Model not fitted: call fit() before predict()")]
    UntrainedModel,

    /// A split references a feature the query vector does not have.
    #[error("Out of range feature: tree needs feature index {feature_idx}, input has {n_features} features")]
    OutOfRangeFeature {
        /// Feature index required by the visited node
        feature_idx: usize,
        /// Length of the supplied feature vector
        n_features: usize,
    },

    /// Training points disagree on the feature vector length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl ArbolError {
    /// Create an out-of-range feature error for a traversal step.
    #[must_use]
    pub fn out_of_range(feature_idx: usize, n_features: usize) -> Self {
        Self::OutOfRangeFeature {
            feature_idx,
            n_features,
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ArbolError>;
