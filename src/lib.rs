//! Feed-forward neural networks for binary and multi-class classification.
//!
//! This crate implements the dense-layer training core from first
//! principles on top of [`ndarray`]: He-initialized parameters, forward
//! propagation with sigmoid hidden layers and a sigmoid or column-wise
//! softmax output, cross-entropy costs, backpropagation with in-place
//! gradient-descent updates, a fixed-iteration training loop with cost
//! reporting, and a versioned JSON persistence format.
//!
//! Data is column-oriented: an input batch is `(features, examples)` and
//! labels are `(1, examples)` for binary targets or a one-hot
//! `(classes, examples)` matrix for multi-class targets.
//!
//! # Example
//!
//! ```rust
//! use deepnet::prelude::*;
//! use ndarray::array;
//!
//! // The AND truth table: four 2-feature examples as columns
//! let x: Matrix = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
//! let y: Matrix = array![[0.0, 0.0, 0.0, 1.0]];
//!
//! let mut net = Network::new(2, &[3, 1], Objective::Binary)?;
//! let config = TrainingConfig {
//!     iterations: 200,
//!     alpha: 0.05,
//!     verbose: false,
//!     step: 50,
//! };
//! let report = net.train(&x, &y, &config)?;
//!
//! assert_eq!(report.predictions.dim(), (1, 4));
//! assert_eq!(report.history.len(), 5); // iterations 0, 50, 100, 150, 200
//! # Ok::<(), deepnet::ModelError>(())
//! ```

/// Module that contains the error types used across the crate
pub mod error;
/// Module that contains the network, its training loop, and model persistence
pub mod network;
/// A convenience module that re-exports the most commonly used items
pub mod prelude;
/// Module that contains data preparation helpers
pub mod utility;

pub use error::{IoError, ModelError};
