/// Module that contains one-hot label encoding and decoding helpers
pub mod one_hot;

pub use one_hot::*;
