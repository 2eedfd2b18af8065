use super::Matrix;
use ndarray::Axis;

/// Activation functions applied during forward propagation.
///
/// Hidden layers always use `Sigmoid`; the output layer uses the
/// activation selected by the network's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `1 / (1 + e^(-z))`, applied elementwise
    Sigmoid,
    /// `e^(z_k) / Σ_j e^(z_j)`, applied per column
    Softmax,
}

impl Activation {
    /// Applies the activation to a pre-activation matrix.
    ///
    /// # Parameters
    ///
    /// * `z` - Pre-activation matrix of shape (nodes, m)
    ///
    /// # Returns
    ///
    /// * `Matrix` - The activated matrix, same shape as `z`
    pub fn apply(&self, z: Matrix) -> Matrix {
        use rayon::prelude::*;

        match self {
            Activation::Sigmoid => {
                let mut result = z;
                result.par_mapv_inplace(|v| 1.0 / (1.0 + (-v).exp()));
                result
            }
            Activation::Softmax => {
                let mut out = z;

                // The column max is subtracted before exponentiating so
                // large pre-activations cannot overflow the exponentials.
                if out.ncols() > 8 {
                    out.axis_iter_mut(Axis(1))
                        .into_par_iter()
                        .for_each(|mut col| {
                            let max_val = col.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                            col.mapv_inplace(|v| (v - max_val).exp());
                            let sum = col.sum();
                            col.mapv_inplace(|v| v / sum);
                        });
                } else {
                    for mut col in out.axis_iter_mut(Axis(1)) {
                        let max_val = col.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
                        col.map_inplace(|v| *v = (*v - max_val).exp());
                        let sum = col.sum();
                        col.map_inplace(|v| *v /= sum);
                    }
                }
                out
            }
        }
    }
}
