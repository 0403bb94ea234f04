//! Error types in textfeat
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
