use super::{ActivationCache, Matrix, Network};
use ndarray::Axis;

impl Network {
    /// One gradient-descent pass over every layer, from the output layer
    /// back to the first, updating weights and biases in place.
    ///
    /// `cache` must come from a forward pass of the batch that `y`
    /// labels, with `y` in the output layer's shape; the training loop
    /// guarantees both.
    ///
    /// The output-layer delta is `A_L - Y`, the cross-entropy gradient
    /// through the matched output activation. Each upstream delta is
    /// computed from the downstream layer's weights before that layer is
    /// updated, so every step of the chain rule sees pre-update
    /// parameters.
    pub fn gradient_descent(&mut self, y: &Matrix, cache: &ActivationCache, alpha: f32) {
        let m = y.ncols() as f32;
        let mut dz = cache.output() - y;

        for i in (0..self.layers.len()).rev() {
            let a_prev = cache.activation(i);
            let grad_weights = dz.dot(&a_prev.t()) / m;
            let grad_bias = dz.sum_axis(Axis(1)).insert_axis(Axis(1)) / m;

            // Hidden activations are sigmoid, so the derivative through
            // layer i-1's output is A * (1 - A).
            let upstream = if i > 0 {
                let da = self.layers[i].weights.t().dot(&dz);
                Some(da * a_prev * (1.0 - a_prev))
            } else {
                None
            };

            self.layers[i].apply_gradients(&grad_weights, &grad_bias, alpha);

            if let Some(next_dz) = upstream {
                dz = next_dz;
            }
        }
    }
}
