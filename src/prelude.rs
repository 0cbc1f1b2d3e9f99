//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use arbol::prelude::*;
//! ```

pub use crate::config::TreeConfig;
pub use crate::error::ArbolError;
pub use crate::traits::Classifier;
pub use crate::tree::{DataPoint, DecisionTree, Label, TreeNode};
