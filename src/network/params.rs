use super::{Matrix, Objective};
use crate::error::ModelError;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;

/// Weight matrix and bias vector for one fully connected layer.
///
/// `weights` has shape (nodes, fan_in) and `bias` has shape (nodes, 1),
/// where fan_in is the previous layer's node count, or the input feature
/// count for the first layer.
#[derive(Debug, Clone)]
pub struct LayerParams {
    pub(crate) weights: Matrix,
    pub(crate) bias: Matrix,
}

impl LayerParams {
    /// He initialization: standard-normal weights scaled by
    /// `sqrt(2 / fan_in)`, zero biases.
    fn init(nodes: usize, fan_in: usize) -> Self {
        let scale = (2.0 / fan_in as f32).sqrt();
        let weights = Matrix::random((nodes, fan_in), StandardNormal) * scale;
        let bias = Matrix::zeros((nodes, 1));
        Self { weights, bias }
    }

    /// Number of nodes in the layer.
    pub fn nodes(&self) -> usize {
        self.weights.nrows()
    }

    /// The (nodes, fan_in) weight matrix.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// The (nodes, 1) bias vector.
    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// In-place gradient-descent update: `W -= alpha * dW`, `b -= alpha * db`.
    ///
    /// Gradient shapes must match the layer's own; the propagation
    /// contract guarantees this.
    pub(crate) fn apply_gradients(&mut self, grad_weights: &Matrix, grad_bias: &Matrix, alpha: f32) {
        let (weights, bias) = (&mut self.weights, &mut self.bias);
        rayon::join(
            || weights.zip_mut_with(grad_weights, |w, g| *w -= alpha * g),
            || bias.zip_mut_with(grad_bias, |b, g| *b -= alpha * g),
        );
    }
}

/// A feed-forward network of fully connected layers trained by batch
/// gradient descent.
///
/// Hidden layers apply sigmoid; the output layer applies the activation
/// selected by the [`Objective`], which also fixes the matched
/// cross-entropy cost. Parameters live for the life of the network and
/// are mutated in place by every training step.
///
/// # Example
///
/// ```rust
/// use deepnet::prelude::*;
/// use ndarray::array;
///
/// let x: Matrix = array![[0.0, 1.0], [1.0, 0.0]];
/// let y: Matrix = array![[0.0, 1.0]];
///
/// let mut net = Network::new(2, &[3, 1], Objective::Binary)?;
/// let config = TrainingConfig {
///     iterations: 50,
///     alpha: 0.1,
///     verbose: false,
///     step: 10,
/// };
/// let report = net.train(&x, &y, &config)?;
/// assert_eq!(report.predictions.dim(), (1, 2));
/// # Ok::<(), deepnet::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) input_dim: usize,
    pub(crate) layers: Vec<LayerParams>,
    pub(crate) objective: Objective,
}

impl Network {
    /// Builds a network with He-initialized weights and zero biases.
    ///
    /// # Parameters
    ///
    /// - `input_dim` - Number of input features the first layer expects
    /// - `layer_sizes` - Node count of every layer in order, ending with
    ///   the output layer; a single entry gives the one-layer degenerate
    ///   case
    /// - `objective` - The activation/cost pairing to train for
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - A freshly initialized network
    /// - `Err(ModelError::InvalidArgument)` - `input_dim` is zero,
    ///   `layer_sizes` is empty, or a layer size is zero; nothing is
    ///   allocated on failure
    pub fn new(
        input_dim: usize,
        layer_sizes: &[usize],
        objective: Objective,
    ) -> Result<Self, ModelError> {
        if input_dim < 1 {
            return Err(ModelError::InvalidArgument(
                "input feature count must be a positive integer".to_string(),
            ));
        }
        if layer_sizes.is_empty() || layer_sizes.iter().any(|&nodes| nodes < 1) {
            return Err(ModelError::InvalidArgument(
                "layer sizes must be a non-empty list of positive integers".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = input_dim;
        for &nodes in layer_sizes {
            layers.push(LayerParams::init(nodes, fan_in));
            fan_in = nodes;
        }

        Ok(Self {
            input_dim,
            layers,
            objective,
        })
    }

    pub(crate) fn from_parts(
        input_dim: usize,
        layers: Vec<LayerParams>,
        objective: Objective,
    ) -> Self {
        Self {
            input_dim,
            layers,
            objective,
        }
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Input feature count the first layer expects.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Node count of the output layer, i.e. the label row count the
    /// network expects.
    pub fn output_dim(&self) -> usize {
        self.layers.last().map_or(0, LayerParams::nodes)
    }

    /// The activation/cost pairing the network was built for.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Per-layer parameters, ordered from the first layer to the output layer.
    pub fn layers(&self) -> &[LayerParams] {
        &self.layers
    }
}
