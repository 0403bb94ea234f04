//! Error definitions for vectorization
use crate::feature_selection::DocumentFrequency;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, VectorizeError>;

#[derive(Error, Debug, Clone)]
pub enum VectorizeError {
    #[error("n_gram boundaries cannot be zero (min = {0}, max = {1})")]
    InvalidNGramBoundaries(usize, usize),
    #[error("n_gram min boundary cannot be greater than max boundary (min = {0}, max = {1})")]
    FlippedNGramBoundaries(usize, usize),
    #[error("relative document frequencies have to be finite and between 0 and 1, got {0}")]
    InvalidDocumentFrequency(f64),
    #[error("min document frequency cannot be greater than max document frequency (min = {0}, max = {1})")]
    FlippedDocumentFrequencies(DocumentFrequency, DocumentFrequency),
    #[error("max_features must be strictly positive")]
    InvalidMaxFeatures,
    #[error("chunk size must be strictly positive")]
    InvalidChunkSize,
    #[error("a fixed vocabulary must contain at least one entry")]
    EmptyFixedVocabulary,
    #[error("vocabulary entry {0:?} appears more than once")]
    DuplicateVocabularyEntry(String),
    #[error("vocabulary index {0} is assigned to more than one entry")]
    DuplicateVocabularyIndex(usize),
    #[error("vocabulary index {index} is out of range for a vocabulary of {len} entries, indices must be 0..{len}")]
    NonContiguousVocabulary { index: usize, len: usize },
    #[error(transparent)]
    RegexError(#[from] regex::Error),
    #[error("after pruning no vocabulary entries remain, min_df/max_df are too restrictive (or max_features too small)")]
    EmptyVocabulary,
    #[error("vocabulary entry {0:?} never occurs in the fitting corpus, its idf is undefined unless smooth_idf is set")]
    UndefinedIdf(String),
    #[error("inverse document frequencies are not available, the vectorizer was never fitted on a corpus")]
    NotFitted,
    #[error(transparent)]
    BaseCrate(#[from] textfeat::Error),
}

impl VectorizeError {
    /// True for errors caused by an invalid option value or combination of options
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            VectorizeError::EmptyVocabulary
                | VectorizeError::NotFitted
                | VectorizeError::BaseCrate(_)
        )
    }
}
