use super::{Activation, Matrix, Network};
use crate::error::ModelError;

/// Per-layer activations from one forward pass.
///
/// Index 0 holds the raw input batch; index `i` holds layer i's activated
/// output, up to the network output at index L. The cache belongs to a
/// single training step: the backward pass reads it, then it is dropped.
#[derive(Debug, Clone)]
pub struct ActivationCache {
    activations: Vec<Matrix>,
}

impl ActivationCache {
    fn with_input(input: Matrix, depth: usize) -> Self {
        let mut activations = Vec::with_capacity(depth + 1);
        activations.push(input);
        Self { activations }
    }

    fn push(&mut self, activation: Matrix) {
        self.activations.push(activation);
    }

    /// Activation matrix at layer index `i`; index 0 is the input batch.
    pub fn activation(&self, i: usize) -> &Matrix {
        &self.activations[i]
    }

    /// The output layer's activation.
    pub fn output(&self) -> &Matrix {
        &self.activations[self.activations.len() - 1]
    }

    /// Number of stored activations, i.e. layer count + 1.
    pub fn len(&self) -> usize {
        self.activations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }
}

impl Network {
    /// Propagates an (input_dim, m) batch through every layer.
    ///
    /// Each layer computes `Z = W·A_prev + b` with the bias broadcast
    /// across columns, then applies its activation: sigmoid on hidden
    /// layers, the objective's output activation on the final layer.
    ///
    /// # Parameters
    ///
    /// * `x` - Input batch of shape (input_dim, m), one example per column
    ///
    /// # Returns
    ///
    /// - `Ok(ActivationCache)` - The full activation cache, with the
    ///   network output at [`ActivationCache::output`]
    /// - `Err(ModelError::ShapeMismatch)` - The batch's row count is not
    ///   `input_dim`
    pub fn forward_prop(&self, x: &Matrix) -> Result<ActivationCache, ModelError> {
        if x.nrows() != self.input_dim {
            return Err(ModelError::ShapeMismatch(format!(
                "input has {} features, network expects {}",
                x.nrows(),
                self.input_dim
            )));
        }

        let depth = self.depth();
        let mut cache = ActivationCache::with_input(x.clone(), depth);
        for (i, layer) in self.layers.iter().enumerate() {
            let activation = if i + 1 == depth {
                self.objective.output_activation()
            } else {
                Activation::Sigmoid
            };
            let z = layer.weights.dot(cache.output()) + &layer.bias;
            cache.push(activation.apply(z));
        }
        Ok(cache)
    }
}
