//! Term frequency - inverse document frequency vectorization methods

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use textfeat::traits::{Fit, Transformer};
use textfeat::{Documents, ParamGuard};

use crate::analyzer::{Preprocessor, Tokenizer};
use crate::count_encoder::document_frequencies;
use crate::countgrams::{CountVectorizer, CountVectorizerParams, CountVectorizerValidParams};
use crate::error::{Result, VectorizeError};
use crate::feature_selection::DocumentFrequency;
use crate::norm_scaling::{Norm, NormScaler};
use crate::vocabulary::Vocabulary;

/// Similar to [`CountVectorizer`] but instead of just counting the term frequency of each vocabulary entry
/// in each given document, it weights each count by the inverse of the number of documents of the
/// fitting corpus containing that entry, then scales every document to unit norm.
///
/// ### Attributes
///
/// All the attributes of [`CountVectorizerParams`], plus:
/// * `use_idf`: weight counts by the inverse document frequency. Defaults to `true`.
/// * `smooth_idf`: computes the idf as `ln((1 + n) / (1 + df)) + 1` instead of `ln(n / df) + 1`, as if
///    an extra document containing every vocabulary entry had been seen. Defaults to `true`.
/// * `sublinear_tf`: replaces every positive count `t` with `ln(t) + 1`. Defaults to `false`.
/// * `norm`: norm used to scale every document. Defaults to `Some(Norm::L2)`.
#[derive(Clone, Debug)]
pub struct TfIdfVectorizerValidParams {
    count: CountVectorizerValidParams,
    use_idf: bool,
    smooth_idf: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfIdfVectorizerValidParams {
    pub fn count_params(&self) -> &CountVectorizerValidParams {
        &self.count
    }

    pub fn use_idf(&self) -> bool {
        self.use_idf
    }

    pub fn smooth_idf(&self) -> bool {
        self.smooth_idf
    }

    pub fn sublinear_tf(&self) -> bool {
        self.sublinear_tf
    }

    pub fn norm(&self) -> Option<Norm> {
        self.norm
    }

    /// Learns a vocabulary and its inverse document frequencies from `corpus`, then weights the counts
    /// of `corpus` itself. The count matrix computed while fitting is reused for the weighting.
    ///
    /// Without `smooth_idf`, returns [`VectorizeError::UndefinedIdf`] if a vocabulary entry never
    /// occurs in `corpus`, which can only happen with a fixed vocabulary.
    pub fn fit_transform<C: Documents + ?Sized>(
        &self,
        corpus: &C,
    ) -> Result<(TfIdfVectorizer, Array2<f64>)> {
        let (count_vectorizer, counts) = self.count.fit_transform(corpus)?;
        let idf = if self.use_idf {
            let doc_freqs = document_frequencies(&counts);
            if !self.smooth_idf {
                if let Some(idx) = doc_freqs.iter().position(|&doc_freq| doc_freq == 0) {
                    let term = count_vectorizer.vocabulary().terms()[idx].clone();
                    return Err(VectorizeError::UndefinedIdf(term));
                }
            }
            Some(inverse_document_frequencies(
                &doc_freqs,
                counts.nrows(),
                self.smooth_idf,
            ))
        } else {
            None
        };
        tracing::debug!(
            nentries = count_vectorizer.nentries(),
            use_idf = self.use_idf,
            "fitted tf-idf weights"
        );

        let vectorizer = TfIdfVectorizer {
            count_vectorizer,
            idf,
            properties: self.clone(),
        };
        let weighted = vectorizer.weight(counts)?;
        Ok((vectorizer, weighted))
    }

    /// Produces a [`TfIdfVectorizer`] with the input vocabulary and no inverse document frequencies.
    /// Transforming with it fails with [`VectorizeError::NotFitted`] unless `use_idf` is off.
    pub fn fit_vocabulary<T: ToString>(&self, words: &[T]) -> Result<TfIdfVectorizer> {
        let count_vectorizer = self.count.fit_vocabulary(words)?;
        Ok(TfIdfVectorizer {
            count_vectorizer,
            idf: None,
            properties: self.clone(),
        })
    }
}

impl<C: Documents + ?Sized> Fit<C, VectorizeError> for TfIdfVectorizerValidParams {
    type Object = TfIdfVectorizer;

    fn fit(&self, corpus: &C) -> Result<Self::Object> {
        self.fit_transform(corpus).map(|(vectorizer, _)| vectorizer)
    }
}

#[derive(Clone, Debug)]
pub struct TfIdfVectorizerParams(TfIdfVectorizerValidParams);

impl TfIdfVectorizerParams {
    fn with_count<F>(mut self, update: F) -> Self
    where
        F: FnOnce(CountVectorizerParams) -> CountVectorizerParams,
    {
        self.0.count = update(CountVectorizerParams(self.0.count)).0;
        self
    }

    /// See [`CountVectorizerParams::n_gram_range`]
    pub fn n_gram_range(self, min_n: usize, max_n: usize) -> Self {
        self.with_count(|count| count.n_gram_range(min_n, max_n))
    }

    pub fn min_df<D: Into<DocumentFrequency>>(self, min_df: D) -> Self {
        self.with_count(|count| count.min_df(min_df))
    }

    pub fn max_df<D: Into<DocumentFrequency>>(self, max_df: D) -> Self {
        self.with_count(|count| count.max_df(max_df))
    }

    pub fn max_features(self, max_features: usize) -> Self {
        self.with_count(|count| count.max_features(max_features))
    }

    pub fn binary(self, binary: bool) -> Self {
        self.with_count(|count| count.binary(binary))
    }

    pub fn stopwords<T: ToString>(self, stopwords: &[T]) -> Self {
        self.with_count(|count| count.stopwords(stopwords))
    }

    pub fn vocabulary(self, vocabulary: Vocabulary) -> Self {
        self.with_count(|count| count.vocabulary(vocabulary))
    }

    pub fn prune_fixed_vocabulary(self, prune_fixed_vocabulary: bool) -> Self {
        self.with_count(|count| count.prune_fixed_vocabulary(prune_fixed_vocabulary))
    }

    pub fn chunk_size(self, chunk_size: usize) -> Self {
        self.with_count(|count| count.chunk_size(chunk_size))
    }

    /// If false, counts are not weighted by the inverse document frequency
    pub fn use_idf(mut self, use_idf: bool) -> Self {
        self.0.use_idf = use_idf;
        self
    }

    /// Adds one to every document frequency and to the number of documents
    pub fn smooth_idf(mut self, smooth_idf: bool) -> Self {
        self.0.smooth_idf = smooth_idf;
        self
    }

    /// Replaces every positive count `t` with `ln(t) + 1`
    pub fn sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.0.sublinear_tf = sublinear_tf;
        self
    }

    /// Norm used to scale every document, `None` leaves the weights as they are
    pub fn norm(mut self, norm: Option<Norm>) -> Self {
        self.0.norm = norm;
        self
    }

    /// Checks the parameters, then fits and weights `corpus`.
    /// See [`TfIdfVectorizerValidParams::fit_transform`].
    pub fn fit_transform<C: Documents + ?Sized>(
        &self,
        corpus: &C,
    ) -> Result<(TfIdfVectorizer, Array2<f64>)> {
        self.check_ref()
            .and_then(|params| params.fit_transform(corpus))
    }

    pub fn fit_vocabulary<T: ToString>(&self, words: &[T]) -> Result<TfIdfVectorizer> {
        self.check_ref()
            .and_then(|params| params.fit_vocabulary(words))
    }
}

impl ParamGuard for TfIdfVectorizerParams {
    type Checked = TfIdfVectorizerValidParams;
    type Error = VectorizeError;

    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error> {
        self.0.count.validate()?;
        Ok(&self.0)
    }

    fn check(self) -> std::result::Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Computes `ln((n + s) / (df + s)) + 1` for every entry, with `s = 1` when smoothing and `s = 0`
/// otherwise. Without smoothing every document frequency must be positive, a zero one gives an
/// infinite weight.
pub fn inverse_document_frequencies(
    doc_freqs: &Array1<usize>,
    ndocuments: usize,
    smooth_idf: bool,
) -> Array1<f64> {
    let smoothing = if smooth_idf { 1. } else { 0. };
    let ndocuments = ndocuments as f64 + smoothing;
    doc_freqs.mapv(|doc_freq| (ndocuments / (doc_freq as f64 + smoothing)).ln() + 1.)
}

/// Weights the counts of a [`CountVectorizer`] with the inverse document frequencies learned during fitting.
#[derive(Clone, Debug)]
pub struct TfIdfVectorizer {
    count_vectorizer: CountVectorizer,
    idf: Option<Array1<f64>>,
    properties: TfIdfVectorizerValidParams,
}

impl TfIdfVectorizer {
    /// Construct a new set of parameters. Documents are normalized with `preprocessor`, then split
    /// into tokens with `tokenizer`.
    pub fn params<P, T>(preprocessor: P, tokenizer: T) -> TfIdfVectorizerParams
    where
        P: Preprocessor + 'static,
        T: Tokenizer + 'static,
    {
        TfIdfVectorizerParams(TfIdfVectorizerValidParams {
            count: CountVectorizerParams::new(preprocessor, tokenizer).0,
            use_idf: true,
            smooth_idf: true,
            sublinear_tf: false,
            norm: Some(Norm::L2),
        })
    }

    pub fn nentries(&self) -> usize {
        self.count_vectorizer.nentries()
    }

    /// Contains all vocabulary entries, in the same order used by the `transform` method.
    pub fn vocabulary(&self) -> &Vocabulary {
        self.count_vectorizer.vocabulary()
    }

    pub fn pruned_terms(&self) -> &BTreeSet<String> {
        self.count_vectorizer.pruned_terms()
    }

    /// Inverse document frequency of every vocabulary entry, `None` if not learned from a corpus
    pub fn idf(&self) -> Option<&Array1<f64>> {
        self.idf.as_ref()
    }

    pub fn count_vectorizer(&self) -> &CountVectorizer {
        &self.count_vectorizer
    }

    pub fn params_used(&self) -> &TfIdfVectorizerValidParams {
        &self.properties
    }

    /// Given a sequence of `n` documents, produces an array of size `(n, vocabulary_entries)` where column `j` of row `i`
    /// is the weighted count of vocabulary entry `j` in the document of index `i`.
    ///
    /// Returns [`VectorizeError::NotFitted`] if `use_idf` is set but no inverse document frequencies were learned.
    pub fn transform<C: Documents + ?Sized>(&self, corpus: &C) -> Result<Array2<f64>> {
        let counts = self.count_vectorizer.transform(corpus)?;
        self.weight(counts)
    }

    fn weight(&self, counts: Array2<usize>) -> Result<Array2<f64>> {
        let mut weighted = counts.mapv(|count| count as f64);
        if self.properties.sublinear_tf {
            weighted.mapv_inplace(|tf| if tf > 0. { tf.ln() + 1. } else { tf });
        }
        if self.properties.use_idf {
            let idf = self.idf.as_ref().ok_or(VectorizeError::NotFitted)?;
            weighted *= idf;
        }
        if let Some(norm) = self.properties.norm {
            weighted = NormScaler::new(norm).transform(weighted);
        }
        Ok(weighted)
    }
}
