use crate::analyzer::{Analyzer, Preprocessor, Tokenizer};
use crate::error::VectorizeError;
use crate::feature_selection::{DocumentFrequency, FeatureSelector};
use crate::vocabulary::{Vocabulary, VocabularySource};
use textfeat::ParamGuard;

/// Count vectorizer: learns a vocabulary from a sequence of documents and maps each
/// vocabulary entry to an integer value, producing a [CountVectorizer](crate::CountVectorizer) that can
/// be used to count the occurrences of each vocabulary entry in any sequence of documents. Alternatively a user-specified vocabulary can
/// be used for fitting.
///
/// ### Attributes
///
/// * `preprocessor` and `tokenizer`: supplied by the caller, they turn each document into its sequence of tokens.
/// * `n_gram_range`: if set to `(1,1)` single tokens will be candidate vocabulary entries, if `(2,2)` then adjacent token pairs will be considered,
///    if `(1,2)` then both single tokens and adjacent token pairs will be considered, and so on. The default value is `(1,1)`.
/// * `stopwords`: entries to be excluded from the generated n-grams. Defaults to none.
/// * `min_df` / `max_df`: the minimum and maximum document frequency, absolute or relative to the corpus size, that each
///    vocabulary entry must satisfy. Both unset by default.
/// * `max_features`: if set, only the `max_features` entries with the highest total count are kept. Unset by default.
/// * `binary`: if true, counts are clamped to one. Defaults to `false`.
/// * `vocabulary`: a fixed vocabulary replacing the one learned from the corpus. Unset by default.
/// * `prune_fixed_vocabulary`: if true, a fixed vocabulary is pruned according to `min_df`, `max_df` and `max_features`
///    like a learned one. Defaults to `false`.
/// * `chunk_size`: number of documents per parallel work unit. Defaults to `256`. It never affects the result.
#[derive(Clone, Debug)]
pub struct CountVectorizerValidParams {
    analyzer: Analyzer,
    min_df: Option<DocumentFrequency>,
    max_df: Option<DocumentFrequency>,
    max_features: Option<usize>,
    binary: bool,
    vocabulary: VocabularySource,
    prune_fixed_vocabulary: bool,
    chunk_size: usize,
}

impl CountVectorizerValidParams {
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn n_gram_range(&self) -> (usize, usize) {
        self.analyzer.n_gram_range()
    }

    pub fn min_df(&self) -> Option<DocumentFrequency> {
        self.min_df
    }

    pub fn max_df(&self) -> Option<DocumentFrequency> {
        self.max_df
    }

    pub fn max_features(&self) -> Option<usize> {
        self.max_features
    }

    pub fn binary(&self) -> bool {
        self.binary
    }

    pub fn vocabulary(&self) -> &VocabularySource {
        &self.vocabulary
    }

    pub fn prune_fixed_vocabulary(&self) -> bool {
        self.prune_fixed_vocabulary
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub(crate) fn feature_selector(&self) -> FeatureSelector {
        FeatureSelector::new(self.min_df, self.max_df, self.max_features)
    }

    /// Pruning applies to learned vocabularies, and to fixed ones only on request
    pub(crate) fn prunes_vocabulary(&self) -> bool {
        match self.vocabulary {
            VocabularySource::Learned => true,
            VocabularySource::Fixed(_) => self.prune_fixed_vocabulary,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), VectorizeError> {
        let (n_gram_min, n_gram_max) = self.analyzer.n_gram_range();
        if n_gram_min == 0 || n_gram_max == 0 {
            return Err(VectorizeError::InvalidNGramBoundaries(
                n_gram_min, n_gram_max,
            ));
        }
        if n_gram_min > n_gram_max {
            return Err(VectorizeError::FlippedNGramBoundaries(
                n_gram_min, n_gram_max,
            ));
        }
        for df in self.min_df.iter().chain(self.max_df.iter()) {
            df.validate()?;
        }
        match (self.min_df, self.max_df) {
            (Some(DocumentFrequency::Absolute(min)), Some(DocumentFrequency::Absolute(max)))
                if min > max =>
            {
                return Err(VectorizeError::FlippedDocumentFrequencies(
                    DocumentFrequency::Absolute(min),
                    DocumentFrequency::Absolute(max),
                ))
            }
            (Some(DocumentFrequency::Relative(min)), Some(DocumentFrequency::Relative(max)))
                if min > max =>
            {
                return Err(VectorizeError::FlippedDocumentFrequencies(
                    DocumentFrequency::Relative(min),
                    DocumentFrequency::Relative(max),
                ))
            }
            _ => {}
        }
        if self.max_features == Some(0) {
            return Err(VectorizeError::InvalidMaxFeatures);
        }
        if self.chunk_size == 0 {
            return Err(VectorizeError::InvalidChunkSize);
        }
        if let VocabularySource::Fixed(vocabulary) = &self.vocabulary {
            if vocabulary.is_empty() {
                return Err(VectorizeError::EmptyFixedVocabulary);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CountVectorizerParams(pub(crate) CountVectorizerValidParams);

impl CountVectorizerParams {
    pub(crate) fn new<P, T>(preprocessor: P, tokenizer: T) -> Self
    where
        P: Preprocessor + 'static,
        T: Tokenizer + 'static,
    {
        Self(CountVectorizerValidParams {
            analyzer: Analyzer::new(preprocessor, tokenizer),
            min_df: None,
            max_df: None,
            max_features: None,
            binary: false,
            vocabulary: VocabularySource::Learned,
            prune_fixed_vocabulary: false,
            chunk_size: 256,
        })
    }

    /// If set to `(1,1)` single tokens will be candidate vocabulary entries, if `(2,2)` then adjacent token pairs will be considered,
    /// if `(1,2)` then both single tokens and adjacent token pairs will be considered, and so on. The definition of token depends on the
    /// tokenizer.
    ///
    /// `min_n` should not be greater than `max_n`
    pub fn n_gram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.0.analyzer.set_n_gram_range(min_n, max_n);
        self
    }

    /// Vocabulary entries with a document frequency lower than `min_df` are discarded.
    /// Either a number of documents (`usize`) or a fraction of the corpus in `0..=1` (`f64`).
    pub fn min_df<D: Into<DocumentFrequency>>(mut self, min_df: D) -> Self {
        self.0.min_df = Some(min_df.into());
        self
    }

    /// Vocabulary entries with a document frequency higher than `max_df` are discarded.
    /// Either a number of documents (`usize`) or a fraction of the corpus in `0..=1` (`f64`).
    pub fn max_df<D: Into<DocumentFrequency>>(mut self, max_df: D) -> Self {
        self.0.max_df = Some(max_df.into());
        self
    }

    /// Keeps at most `max_features` entries, the ones with the highest count over the whole corpus.
    pub fn max_features(mut self, max_features: usize) -> Self {
        self.0.max_features = Some(max_features);
        self
    }

    /// If true, counts only record the presence of an entry in a document.
    pub fn binary(mut self, binary: bool) -> Self {
        self.0.binary = binary;
        self
    }

    /// List of n-grams to be excluded from the generated vocabulary.
    pub fn stopwords<T: ToString>(mut self, stopwords: &[T]) -> Self {
        self.0
            .analyzer
            .set_stopwords(stopwords.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Uses `vocabulary` instead of learning one from the fitting corpus.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.0.vocabulary = VocabularySource::Fixed(vocabulary);
        self
    }

    /// If true, a fixed vocabulary is subject to `min_df`, `max_df` and `max_features` during fitting.
    pub fn prune_fixed_vocabulary(mut self, prune_fixed_vocabulary: bool) -> Self {
        self.0.prune_fixed_vocabulary = prune_fixed_vocabulary;
        self
    }

    /// Number of documents processed by a single parallel work unit.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.0.chunk_size = chunk_size;
        self
    }
}

impl ParamGuard for CountVectorizerParams {
    type Checked = CountVectorizerValidParams;
    type Error = VectorizeError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        self.0.validate()?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
