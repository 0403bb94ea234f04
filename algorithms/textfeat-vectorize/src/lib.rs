//! # Text vectorization
//! `textfeat-vectorize` turns a corpus of documents into numeric feature matrices.
//!
//! ## Current state
//!
//! Right now `textfeat-vectorize` provides:
//! * Count vectorization, with learned or fixed vocabularies, n-grams, stop words and vocabulary
//!   pruning by document frequency and by overall count
//! * Term frequency - inverse document frequency vectorization, with optional sublinear scaling
//!   and L1/L2 normalization of every document
//!
//! Documents are counted in parallel. The vocabulary and the matrices produced are the same for
//! any chunk size and any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use textfeat::traits::Fit;
//! use textfeat_vectorize::{CountVectorizer, TextNormalizer, WhitespaceTokenizer};
//!
//! let corpus = ["The cat sat", "the dog sat down"];
//! let vectorizer = CountVectorizer::params(TextNormalizer::default(), WhitespaceTokenizer)
//!     .fit(&corpus)
//!     .unwrap();
//! assert_eq!(vectorizer.vocabulary().terms(), &["cat", "dog", "down", "sat", "the"]);
//! let counts = vectorizer.transform(&["the cat and the dog"]).unwrap();
//! assert_eq!(counts.row(0).to_vec(), vec![1, 1, 0, 0, 2]);
//! ```

pub mod analyzer;
pub mod count_encoder;
pub mod countgrams;
pub mod error;
pub mod feature_selection;
mod helpers;
pub mod norm_scaling;
pub mod tf_idf_vectorization;
pub mod vocabulary;

pub use analyzer::{
    Analyzer, Preprocessor, RegexTokenizer, TextNormalizer, Tokenizer, WhitespaceTokenizer,
};
pub use count_encoder::CountEncoder;
pub use countgrams::{CountVectorizer, CountVectorizerParams, CountVectorizerValidParams};
pub use error::VectorizeError;
pub use feature_selection::{DocumentFrequency, FeatureSelector, Selection};
pub use helpers::{expand_ngrams, NGramList};
pub use norm_scaling::{Norm, NormScaler};
pub use tf_idf_vectorization::{TfIdfVectorizer, TfIdfVectorizerParams, TfIdfVectorizerValidParams};
pub use vocabulary::{Vocabulary, VocabularyBuilder, VocabularySource};
