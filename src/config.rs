//! Tree hyperparameters.

use crate::error::{ArbolError, Result};
use serde::{Deserialize, Serialize};

/// Default maximum tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Hyperparameters for [`DecisionTree`](crate::tree::DecisionTree).
///
/// Deserializes with defaults for missing fields, so `{}` is a valid config.
///
/// # Examples
///
/// ```
/// use arbol::config::TreeConfig;
///
/// let config: TreeConfig = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
/// assert_eq!(config.max_depth, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum number of splits on any root-to-leaf path (root has depth 0).
    ///
    /// Smaller values trade variance for bias.
    pub max_depth: usize,
}

impl TreeConfig {
    /// Creates a config with the given maximum depth.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Checks that every hyperparameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ArbolError::InvalidHyperparameter`] if `max_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ArbolError::InvalidHyperparameter {
                param: "max_depth".to_string(),
                value: self.max_depth.to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
