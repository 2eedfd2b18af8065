use crate::error::ModelError;
use crate::network::Matrix;
use ndarray::Axis;

/// Converts numeric class labels into a one-hot matrix of shape
/// (classes, m), one column per label.
///
/// # Parameters
///
/// - `labels` - Class index of every example (e.g. `[0, 2, 1]`)
/// - `classes` - Total number of classes; must exceed every label
///
/// # Returns
///
/// - `Ok(Matrix)` - The (classes, m) one-hot matrix
/// - `Err(ModelError::InvalidArgument)` - `labels` is empty, `classes`
///   is less than 2, or a label falls outside `0..classes`
///
/// # Example
///
/// ```rust
/// use deepnet::utility::one_hot_encode;
///
/// let encoded = one_hot_encode(&[0, 2, 1], 3).unwrap();
/// assert_eq!(encoded.dim(), (3, 3));
/// assert_eq!(encoded[[2, 1]], 1.0);
/// ```
pub fn one_hot_encode(labels: &[usize], classes: usize) -> Result<Matrix, ModelError> {
    if labels.is_empty() {
        return Err(ModelError::InvalidArgument(
            "labels must not be empty".to_string(),
        ));
    }
    if classes < 2 {
        return Err(ModelError::InvalidArgument(
            "classes must be at least 2".to_string(),
        ));
    }
    if let Some(&label) = labels.iter().find(|&&label| label >= classes) {
        return Err(ModelError::InvalidArgument(format!(
            "label {} is out of range for {} classes",
            label, classes
        )));
    }

    let mut encoded = Matrix::zeros((classes, labels.len()));
    for (j, &label) in labels.iter().enumerate() {
        encoded[[label, j]] = 1.0;
    }
    Ok(encoded)
}

/// Decodes a (classes, m) one-hot or probability matrix into class
/// labels by taking the argmax of each column.
pub fn one_hot_decode(one_hot: &Matrix) -> Vec<usize> {
    one_hot
        .axis_iter(Axis(1))
        .map(|col| {
            let mut best = 0;
            for (i, &v) in col.iter().enumerate() {
                if v > col[best] {
                    best = i;
                }
            }
            best
        })
        .collect()
}
