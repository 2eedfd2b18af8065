use std::fs::File;
use std::io::BufReader;

/// Error types that can occur while building, training, or evaluating a network
///
/// # Variants
///
/// - `InvalidArgument` - a constructor or training-configuration input failed validation
/// - `ShapeMismatch` - matrix dimensions disagree with the network's contract
/// - `NumericDegenerate` - a computed cost came out NaN or infinite
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidArgument(String),
    ShapeMismatch(String),
    NumericDegenerate(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ModelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            ModelError::NumericDegenerate(msg) => write!(f, "Numeric degeneracy: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// Input/Output error types that can occur during model persistence
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations
/// - `JsonError` - Wraps JSON serialization/deserialization errors
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IoError {}
