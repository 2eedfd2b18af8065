/// Module that contains the activation function implementations
pub mod activation;
/// Module that contains the backward pass and its gradient-descent update
pub mod backward;
/// Module that contains the cost functions and the objective pairing
pub mod cost;
/// Module that contains forward propagation and the activation cache
pub mod forward;
/// Module that contains network construction and parameter storage
pub mod params;
/// Module that contains model persistence in a versioned JSON format
pub mod serialize;
/// Module that contains the training loop and evaluation
pub mod train;

pub use activation::*;
pub use cost::*;
pub use forward::*;
pub use params::*;
pub use serialize::MODEL_FILE_EXTENSION;
pub use train::*;

use ndarray::Array2;

/// Type alias for the 2D matrices used throughout the network.
///
/// Data is column-oriented: rows are features (or nodes), columns are
/// examples in the batch.
pub type Matrix = Array2<f32>;
