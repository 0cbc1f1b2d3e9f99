//! Arbol: entropy-driven CART decision trees in pure Rust.
//!
//! Arbol learns a binary classification tree from labeled numeric feature
//! vectors and predicts a categorical label for new inputs. Splits are
//! chosen by information gain; leaves vote by majority.
//!
//! # Quick Start
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
//! tree.fit(&data).unwrap();
//!
//! assert_eq!(tree.predict(&[1.0, 0.0]).unwrap(), "A");
//! assert_eq!(tree.predict(&[9.0, 1.0]).unwrap(), "B");
//! ```
//!
//! # Modules
//!
//! - [`tree`]: Decision tree classifier, nodes and the split criterion
//! - [`config`]: Hyperparameters
//! - [`traits`]: The `Classifier` contract
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod prelude;
pub mod traits;
pub mod tree;

pub use config::TreeConfig;
pub use error::{ArbolError, Result};
pub use traits::Classifier;
pub use tree::{DataPoint, DecisionTree, Label};
