//! `textfeat` provides the building blocks for turning a corpus of text documents into numeric
//! feature matrices for downstream statistical models.
//!
//! The crate itself only defines the shared vocabulary of the framework:
//!
//! * [`Documents`](corpus::Documents), an ordered collection of documents whose positions define
//!   the rows of every produced matrix,
//! * the [`Fit`](traits::Fit) and [`Transformer`](traits::Transformer) traits, separating the
//!   learning of a vocabulary and its statistics from their application to new data,
//! * [`ParamGuard`], which validates hyperparameters before any fitting takes place.
//!
//! The algorithms live in sub-crates, like `textfeat-vectorize` which implements count and TF-IDF
//! vectorization.

pub mod corpus;
pub mod error;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use corpus::Documents;
pub use error::Error;
pub use param_guard::ParamGuard;
