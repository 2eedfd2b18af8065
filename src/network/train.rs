use super::{Matrix, Network, Objective};
use crate::error::ModelError;
use crate::utility::one_hot_decode;

/// Settings for one call to [`Network::train`].
///
/// The defaults are 5000 iterations at a learning rate of 0.05, with
/// verbose reporting every 100 iterations.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of gradient-descent iterations to run; must be at least 1.
    pub iterations: usize,
    /// Learning rate; must be positive and finite.
    pub alpha: f32,
    /// When set, prints a cost line at every reporting boundary.
    pub verbose: bool,
    /// Reporting cadence in iterations; must be at least 1, and no
    /// larger than `iterations` when `verbose` is set.
    pub step: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: 5000,
            alpha: 0.05,
            verbose: true,
            step: 100,
        }
    }
}

impl TrainingConfig {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.iterations < 1 {
            return Err(ModelError::InvalidArgument(
                "iterations must be a positive integer".to_string(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ModelError::InvalidArgument(
                "alpha must be positive".to_string(),
            ));
        }
        if self.step < 1 {
            return Err(ModelError::InvalidArgument(
                "step must be a positive integer".to_string(),
            ));
        }
        if self.verbose && self.step > self.iterations {
            return Err(ModelError::InvalidArgument(
                "step must be positive and <= iterations".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Decoded predictions for the training batch: 0/1 values for binary
    /// networks, one-hot columns for multiclass networks.
    pub predictions: Matrix,
    /// Cost after the final iteration.
    pub cost: f32,
    /// `(iteration, cost)` observations taken at every reporting
    /// boundary, ending with the final iteration count. A finite,
    /// one-pass series, ready for a line chart.
    pub history: Vec<(usize, f32)>,
}

impl Objective {
    /// Decodes raw output activations into hard predictions.
    fn predictions(&self, output: &Matrix) -> Matrix {
        match self {
            Objective::Binary => output.mapv(|a| if a >= 0.5 { 1.0 } else { 0.0 }),
            Objective::Multiclass => {
                let labels = one_hot_decode(output);
                let mut decoded = Matrix::zeros(output.raw_dim());
                for (j, &class) in labels.iter().enumerate() {
                    decoded[[class, j]] = 1.0;
                }
                decoded
            }
        }
    }
}

impl Network {
    pub(crate) fn check_batch(&self, x: &Matrix, y: &Matrix) -> Result<(), ModelError> {
        if x.nrows() != self.input_dim {
            return Err(ModelError::ShapeMismatch(format!(
                "input has {} features, network expects {}",
                x.nrows(),
                self.input_dim
            )));
        }
        if y.nrows() != self.output_dim() {
            return Err(ModelError::ShapeMismatch(format!(
                "labels have {} rows, output layer has {} nodes",
                y.nrows(),
                self.output_dim()
            )));
        }
        if x.ncols() != y.ncols() {
            return Err(ModelError::ShapeMismatch(format!(
                "input has {} examples, labels have {}",
                x.ncols(),
                y.ncols()
            )));
        }
        Ok(())
    }

    /// Runs a forward pass and decodes hard predictions against `y`.
    ///
    /// Binary outputs threshold at 0.5; multiclass outputs take the
    /// column argmax re-encoded one-hot.
    ///
    /// # Parameters
    ///
    /// - `x` - Input batch of shape (input_dim, m)
    /// - `y` - Labels of shape (output_dim, m)
    ///
    /// # Returns
    ///
    /// - `Ok((Matrix, f32))` - The decoded predictions and the cost
    /// - `Err(ModelError::ShapeMismatch)` - The batch disagrees with the
    ///   network's shape
    /// - `Err(ModelError::NumericDegenerate)` - The cost came out NaN or
    ///   infinite
    pub fn evaluate(&self, x: &Matrix, y: &Matrix) -> Result<(Matrix, f32), ModelError> {
        self.check_batch(x, y)?;
        let cache = self.forward_prop(x)?;
        let cost = self.objective.cost(y, cache.output());
        if !cost.is_finite() {
            return Err(ModelError::NumericDegenerate(format!(
                "evaluation cost is not finite: {}",
                cost
            )));
        }
        Ok((self.objective.predictions(cache.output()), cost))
    }

    /// Trains the network with full-batch gradient descent.
    ///
    /// Runs `config.iterations` forward/backward steps over the whole
    /// batch. At every multiple of `config.step`, and once more after the
    /// final iteration, the current cost is recorded into the report
    /// history; with `config.verbose` each observation is also printed as
    /// `Cost after {iteration} iterations: {cost}`. A recorded cost that
    /// is not finite is logged as a warning and training continues.
    ///
    /// After the loop the batch is evaluated once more to produce the
    /// report's predictions and final cost.
    ///
    /// # Parameters
    ///
    /// - `x` - Input batch of shape (input_dim, m)
    /// - `y` - Labels of shape (output_dim, m)
    /// - `config` - Iteration count, learning rate, and reporting settings
    ///
    /// # Returns
    ///
    /// - `Ok(TrainingReport)` - Predictions, final cost, and the cost history
    /// - `Err(ModelError::InvalidArgument)` - The configuration failed
    ///   validation; no parameter was touched
    /// - `Err(ModelError::ShapeMismatch)` - The batch disagrees with the
    ///   network's shape; no parameter was touched
    /// - `Err(ModelError::NumericDegenerate)` - The final cost came out
    ///   NaN or infinite
    pub fn train(
        &mut self,
        x: &Matrix,
        y: &Matrix,
        config: &TrainingConfig,
    ) -> Result<TrainingReport, ModelError> {
        config.validate()?;
        self.check_batch(x, y)?;

        let mut history = Vec::with_capacity(config.iterations / config.step + 2);
        for iteration in 0..config.iterations {
            let cache = self.forward_prop(x)?;
            if iteration % config.step == 0 {
                let cost = self.objective.cost(y, cache.output());
                if !cost.is_finite() {
                    log::warn!("cost is not finite at iteration {}: {}", iteration, cost);
                }
                if config.verbose {
                    println!("Cost after {} iterations: {}", iteration, cost);
                }
                history.push((iteration, cost));
            }
            self.gradient_descent(y, &cache, config.alpha);
        }

        let (predictions, cost) = self.evaluate(x, y)?;
        if config.verbose {
            println!("Cost after {} iterations: {}", config.iterations, cost);
        }
        history.push((config.iterations, cost));

        Ok(TrainingReport {
            predictions,
            cost,
            history,
        })
    }
}
