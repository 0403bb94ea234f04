//! Provide traits for different classes of vectorizers
//!

use crate::corpus::Documents;

/// Transformation algorithms
///
/// A transformer takes a corpus or a matrix and transforms it into another representation. It
/// carries no hyperparameters of its own which would need a training phase: everything it needs
/// was learned before it was constructed.
pub trait Transformer<X, Y> {
    fn transform(&self, x: X) -> Y;
}

/// Fittable algorithms
///
/// A fittable algorithm takes a corpus and creates a concept of some kind about it, for example
/// a vocabulary together with document frequency statistics. The object returned by `fit` can
/// then be applied to new corpora.
pub trait Fit<C: Documents + ?Sized, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, corpus: &C) -> Result<Self::Object, E>;
}
