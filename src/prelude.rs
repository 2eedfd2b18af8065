pub use crate::error::{IoError, ModelError};
pub use crate::network::{
    Activation, ActivationCache, Matrix, MODEL_FILE_EXTENSION, Network, Objective,
    TrainingConfig, TrainingReport, binary_cross_entropy, categorical_cross_entropy,
};
pub use crate::utility::{one_hot_decode, one_hot_encode};
