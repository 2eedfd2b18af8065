use super::{Activation, Matrix};
use serde::{Deserialize, Serialize};

/// Epsilon used inside the guarded logarithms so a saturated activation
/// on the guarded branch yields a large finite cost instead of infinity.
pub(crate) const LOG_EPSILON: f32 = 1e-7;

/// The classification objective a network is trained for.
///
/// Each variant fixes a matched output-activation / cost pair. The
/// pairing is what reduces the output-layer delta to `A - Y` in the
/// backward pass, so the two halves are not independently configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Sigmoid output with binary cross-entropy; labels are a (1, m)
    /// matrix of 0/1 values.
    Binary,
    /// Column-wise softmax output with categorical cross-entropy; labels
    /// are a (classes, m) one-hot matrix.
    Multiclass,
}

impl Objective {
    /// Activation applied by the output layer.
    pub fn output_activation(&self) -> Activation {
        match self {
            Objective::Binary => Activation::Sigmoid,
            Objective::Multiclass => Activation::Softmax,
        }
    }

    /// Cost of the output activations `a` against labels `y`, averaged
    /// over the batch.
    pub fn cost(&self, y: &Matrix, a: &Matrix) -> f32 {
        match self {
            Objective::Binary => binary_cross_entropy(y, a),
            Objective::Multiclass => categorical_cross_entropy(y, a),
        }
    }
}

/// Binary cross-entropy: `-(1/m) * Σ [Y·ln(A) + (1-Y)·ln(1-A+ε)]`.
///
/// The epsilon sits inside `ln(1-A+ε)` only: a prediction saturating at
/// exactly 1 under a 0 label stays finite, while a prediction of exactly
/// 0 under a 1 label is outside the domain and still costs infinity.
pub fn binary_cross_entropy(y: &Matrix, a: &Matrix) -> f32 {
    let m = a.ncols() as f32;
    let losses =
        y * &a.mapv(f32::ln) + (1.0 - y) * &(1.0 - a).mapv(|p| (p + LOG_EPSILON).ln());
    -losses.sum() / m
}

/// Categorical cross-entropy over one-hot labels:
/// `-(1/m) * Σ Y·ln(A+ε)`.
///
/// The epsilon keeps an exactly-zero predicted probability on the
/// labeled class finite; softmax outputs with bounded pre-activations
/// never need it, but saturated ones can.
pub fn categorical_cross_entropy(y: &Matrix, a: &Matrix) -> f32 {
    let m = a.ncols() as f32;
    let losses = y * &a.mapv(|p| (p + LOG_EPSILON).ln());
    -losses.sum() / m
}
