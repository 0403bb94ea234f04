//! Count vectorization methods

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};
use sprs::CsMat;
use textfeat::traits::Fit;
use textfeat::{Documents, ParamGuard};

use crate::analyzer::{Preprocessor, Tokenizer};
use crate::count_encoder::CountEncoder;
use crate::error::{Result, VectorizeError};
use crate::feature_selection::Selection;
use crate::vocabulary::{Vocabulary, VocabularyBuilder};
pub use hyperparams::{CountVectorizerParams, CountVectorizerValidParams};

mod hyperparams;

impl CountVectorizerValidParams {
    /// Learns a vocabulary from the documents in `corpus`, according to the specified attributes, and maps each
    /// vocabulary entry to an integer value, producing a [CountVectorizer](CountVectorizer). Also returns the
    /// counts of the fitting corpus, with one row per document and one column per vocabulary entry.
    ///
    /// Returns an error if:
    /// * the document frequency bounds, once resolved for the size of `corpus`, cross each other
    /// * pruning removes every vocabulary entry
    pub fn fit_transform<C: Documents + ?Sized>(
        &self,
        corpus: &C,
    ) -> Result<(CountVectorizer, Array2<usize>)> {
        let span = tracing::debug_span!("fit_count_vectorizer", ndocuments = corpus.ndocuments());
        let _enter = span.enter();

        let vocabulary =
            VocabularyBuilder::new(self.analyzer(), self.chunk_size()).build(corpus, self.vocabulary());
        tracing::debug!(nentries = vocabulary.len(), "built vocabulary");

        let (counts, doc_freqs) = CountEncoder::new(self.analyzer(), &vocabulary)
            .chunk_size(self.chunk_size())
            .binary(self.binary())
            .encode(corpus)?;

        let selector = self.feature_selector();
        let (vocabulary, pruned_terms, counts) = if self.prunes_vocabulary() && !selector.is_noop() {
            let Selection {
                counts,
                vocabulary: kept,
                pruned_terms,
            } = selector.select(&vocabulary, &counts, &doc_freqs)?;
            (kept, pruned_terms, counts)
        } else {
            (vocabulary, BTreeSet::new(), counts)
        };

        Ok((
            CountVectorizer {
                vocabulary,
                pruned_terms,
                properties: self.clone(),
            },
            counts,
        ))
    }

    /// Produces a [CountVectorizer](CountVectorizer) with the input vocabulary, without reading any corpus.
    /// Entries are indexed in the given order.
    ///
    /// Returns an error if the list is empty or contains an entry twice.
    pub fn fit_vocabulary<T: ToString>(&self, words: &[T]) -> Result<CountVectorizer> {
        let vocabulary = Vocabulary::from_terms(words.iter().map(|word| word.to_string()))?;
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyFixedVocabulary);
        }
        Ok(CountVectorizer {
            vocabulary,
            pruned_terms: BTreeSet::new(),
            properties: self.clone(),
        })
    }
}

impl<C: Documents + ?Sized> Fit<C, VectorizeError> for CountVectorizerValidParams {
    type Object = CountVectorizer;

    /// Learns a vocabulary from the documents in `corpus`, according to the specified attributes, and maps each
    /// vocabulary entry to an integer value, producing a [CountVectorizer](CountVectorizer).
    fn fit(&self, corpus: &C) -> Result<Self::Object> {
        self.fit_transform(corpus).map(|(vectorizer, _)| vectorizer)
    }
}

impl CountVectorizerParams {
    /// Checks the parameters, then learns a vocabulary from `corpus` and counts its entries in every document
    /// of `corpus`. See [`CountVectorizerValidParams::fit_transform`].
    pub fn fit_transform<C: Documents + ?Sized>(
        &self,
        corpus: &C,
    ) -> Result<(CountVectorizer, Array2<usize>)> {
        self.check_ref()
            .and_then(|params| params.fit_transform(corpus))
    }

    /// Produces a [CountVectorizer](CountVectorizer) with the input vocabulary.
    /// See [`CountVectorizerValidParams::fit_vocabulary`].
    pub fn fit_vocabulary<T: ToString>(&self, words: &[T]) -> Result<CountVectorizer> {
        self.check_ref()
            .and_then(|params| params.fit_vocabulary(words))
    }
}

/// Counts the occurrences of each vocabulary entry, learned during fitting, in a sequence of documents. Each vocabulary entry is mapped
/// to an integer value that is used to index the count in the result.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) pruned_terms: BTreeSet<String>,
    pub(crate) properties: CountVectorizerValidParams,
}

impl CountVectorizer {
    /// Construct a new set of parameters. Documents are normalized with `preprocessor`, then split
    /// into tokens with `tokenizer`.
    pub fn params<P, T>(preprocessor: P, tokenizer: T) -> CountVectorizerParams
    where
        P: Preprocessor + 'static,
        T: Tokenizer + 'static,
    {
        CountVectorizerParams::new(preprocessor, tokenizer)
    }

    /// Number of vocabulary entries learned during fitting
    pub fn nentries(&self) -> usize {
        self.vocabulary.len()
    }

    /// Contains all vocabulary entries, in the same order used by the `transform` methods.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Entries found during fitting and removed by the document frequency bounds or by `max_features`
    pub fn pruned_terms(&self) -> &BTreeSet<String> {
        &self.pruned_terms
    }

    pub fn params_used(&self) -> &CountVectorizerValidParams {
        &self.properties
    }

    /// Given a sequence of `n` documents, produces an array of size `(n, vocabulary_entries)` where column `j` of row `i`
    /// is the number of occurrences of vocabulary entry `j` in the document of index `i`. Vocabulary entry `j` is the string
    /// at the `j`-th position in the vocabulary. N-grams that are not part of the vocabulary are ignored.
    pub fn transform<C: Documents + ?Sized>(&self, corpus: &C) -> Result<Array2<usize>> {
        let (vectorized, _) = self.get_term_and_document_frequencies(corpus)?;
        Ok(vectorized)
    }

    /// Same as [`transform`](CountVectorizer::transform), producing a sparse matrix where entries that
    /// were not encountered in a document are not stored.
    pub fn transform_sparse<C: Documents + ?Sized>(&self, corpus: &C) -> CsMat<usize> {
        self.encoder().encode_sparse(corpus)
    }

    /// Number of documents of `corpus` containing each vocabulary entry
    pub fn document_frequencies<C: Documents + ?Sized>(&self, corpus: &C) -> Result<Array1<usize>> {
        let (_, doc_freqs) = self.get_term_and_document_frequencies(corpus)?;
        Ok(doc_freqs)
    }

    /// Counts the occurrence of each vocabulary entry in each document and keeps track of the overall
    /// document frequency of each entry.
    pub(crate) fn get_term_and_document_frequencies<C: Documents + ?Sized>(
        &self,
        corpus: &C,
    ) -> Result<(Array2<usize>, Array1<usize>)> {
        self.encoder().encode(corpus)
    }

    fn encoder(&self) -> CountEncoder<'_> {
        CountEncoder::new(self.properties.analyzer(), &self.vocabulary)
            .chunk_size(self.properties.chunk_size())
            .binary(self.properties.binary())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::analyzer::{RegexTokenizer, TextNormalizer, WhitespaceTokenizer};
    use crate::column_for_word;
    use crate::feature_selection::DocumentFrequency;
    use ndarray::array;

    macro_rules! assert_counts_for_word {

        ($voc:expr, $transf:expr, $(($word:expr, $counts:expr)),*) => {
            $ (
                assert_eq!(column_for_word!($voc, $transf, $word), $counts);
            )*
        }
    }

    /// Lowercase and NFKD normalized words of at least two characters
    fn word_params() -> CountVectorizerParams {
        CountVectorizer::params(TextNormalizer::default(), RegexTokenizer::default())
    }

    /// Lowercase, whitespace separated tokens
    fn whitespace_params() -> CountVectorizerParams {
        CountVectorizer::params(TextNormalizer::default(), WhitespaceTokenizer)
    }

    fn sample_corpus() -> [&'static str; 4] {
        [
            "This is the first document",
            "This document is the second document",
            "And this is the third one",
            "Is this the first document",
        ]
    }

    #[test]
    fn simple_count_test() {
        let texts = array!["oNe two three four", "TWO three four", "three;four", "four"];
        let vectorizer = word_params().fit(&texts).unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let counts = vectorizer.transform(&texts).unwrap();
        let true_vocabulary = vec!["four", "one", "three", "two"];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        assert_counts_for_word!(
            vocabulary,
            counts,
            ("one", array![1, 0, 0, 0]),
            ("two", array![1, 1, 0, 0]),
            ("three", array![1, 1, 1, 0]),
            ("four", array![1, 1, 1, 1])
        );

        let vectorizer = word_params().n_gram_range(2, 2).fit(&texts).unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let counts = vectorizer.transform(&texts).unwrap();
        let true_vocabulary = vec!["one two", "three four", "two three"];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        assert_counts_for_word!(
            vocabulary,
            counts,
            ("one two", array![1, 0, 0, 0]),
            ("two three", array![1, 1, 0, 0]),
            ("three four", array![1, 1, 1, 0])
        );

        let vectorizer = word_params().n_gram_range(1, 2).fit(&texts).unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let counts = vectorizer.transform(&texts).unwrap();
        let true_vocabulary = vec![
            "four",
            "one",
            "one two",
            "three",
            "three four",
            "two",
            "two three",
        ];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        assert_counts_for_word!(
            vocabulary,
            counts,
            ("one", array![1, 0, 0, 0]),
            ("one two", array![1, 0, 0, 0]),
            ("two", array![1, 1, 0, 0]),
            ("two three", array![1, 1, 0, 0]),
            ("three", array![1, 1, 1, 0]),
            ("three four", array![1, 1, 1, 0]),
            ("four", array![1, 1, 1, 1])
        );
    }

    #[test]
    fn simple_count_test_vocabulary() {
        let texts = array![
            "apples.and.trees fi",
            "flowers,and,bees",
            "trees!here;and trees:there",
            "four bees and apples and apples again \u{FB01}"
        ];
        let vocabulary = ["apples", "bees", "flowers", "trees", "fi"];
        let from_list = word_params().fit_vocabulary(&vocabulary).unwrap();
        let fixed = word_params()
            .vocabulary(Vocabulary::from_terms(&vocabulary).unwrap())
            .fit(&texts)
            .unwrap();
        for vectorizer in [from_list, fixed].iter() {
            let vect_vocabulary = vectorizer.vocabulary().terms();
            assert_eq!(vect_vocabulary, &vocabulary[..]);
            let transformed = vectorizer.transform(&texts).unwrap();
            assert_counts_for_word!(
                vect_vocabulary,
                transformed,
                ("apples", array![1, 0, 0, 2]),
                ("bees", array![0, 1, 0, 1]),
                ("flowers", array![0, 1, 0, 0]),
                ("trees", array![1, 0, 2, 0]),
                ("fi", array![1, 0, 0, 1])
            );
        }
    }

    #[test]
    fn simple_count_no_punctuation_test() {
        let texts = array!["oNe two three four", "TWO three four", "three;four", "four"];
        let vectorizer = CountVectorizer::params(
            TextNormalizer::default(),
            RegexTokenizer::new(r"\b[^ ][^ ]+\b").unwrap(),
        )
        .fit(&texts)
        .unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let counts = vectorizer.transform(&texts).unwrap();
        let true_vocabulary = vec!["four", "one", "three", "three;four", "two"];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        assert_counts_for_word!(
            vocabulary,
            counts,
            ("one", array![1, 0, 0, 0]),
            ("two", array![1, 1, 0, 0]),
            ("three", array![1, 1, 0, 0]),
            ("four", array![1, 1, 0, 1]),
            ("three;four", array![0, 0, 1, 0])
        );
    }

    #[test]
    fn simple_count_no_lowercase_test() {
        let texts = array!["oNe two three four", "TWO three four", "three;four", "four"];
        let vectorizer = CountVectorizer::params(
            TextNormalizer::default().convert_to_lowercase(false),
            RegexTokenizer::default(),
        )
        .fit(&texts)
        .unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let counts = vectorizer.transform(&texts).unwrap();
        let true_vocabulary = vec!["TWO", "four", "oNe", "three", "two"];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        assert_counts_for_word!(
            vocabulary,
            counts,
            ("oNe", array![1, 0, 0, 0]),
            ("two", array![1, 0, 0, 0]),
            ("three", array![1, 1, 1, 0]),
            ("four", array![1, 1, 1, 1]),
            ("TWO", array![0, 1, 0, 0])
        );
    }

    #[test]
    fn simple_count_no_both_test() {
        let texts = array![
            "oNe oNe two three four",
            "TWO three four",
            "three;four",
            "four"
        ];
        for vectorizer in [
            CountVectorizer::params(
                TextNormalizer::identity(),
                RegexTokenizer::new(r"\b[^ ][^ ]+\b").unwrap(),
            )
            .fit(&texts)
            .unwrap(),
            CountVectorizer::params(TextNormalizer::identity(), |x: &str| {
                x.split(' ').map(String::from).collect::<Vec<_>>()
            })
            .fit(&texts)
            .unwrap(),
        ]
        .iter()
        {
            let vocabulary = vectorizer.vocabulary().terms();
            let counts = vectorizer.transform(&texts).unwrap();
            let true_vocabulary = vec!["TWO", "four", "oNe", "three", "three;four", "two"];
            assert_eq!(vocabulary, &true_vocabulary[..]);
            assert_counts_for_word!(
                vocabulary,
                counts,
                ("oNe", array![2, 0, 0, 0]),
                ("two", array![1, 0, 0, 0]),
                ("three", array![1, 1, 0, 0]),
                ("four", array![1, 1, 0, 1]),
                ("TWO", array![0, 1, 0, 0]),
                ("three;four", array![0, 0, 1, 0])
            );
        }
    }

    #[test]
    fn test_min_max_df() {
        let texts = array![
            "one and two and three",
            "three and four and five",
            "seven and eight",
            "maybe ten and eleven",
            "avoid singletons: one two four five seven eight ten eleven and an and"
        ];
        let vectorizer = word_params()
            .min_df(2. / 5f64)
            .max_df(3. / 5f64)
            .fit(&texts)
            .unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let true_vocabulary = vec![
            "eight", "eleven", "five", "four", "one", "seven", "ten", "three", "two",
        ];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        let pruned: Vec<_> = vectorizer.pruned_terms().iter().cloned().collect();
        assert_eq!(pruned, vec!["an", "and", "avoid", "maybe", "singletons"]);

        // same bounds as document counts
        let absolute = word_params()
            .min_df(DocumentFrequency::Absolute(2))
            .max_df(DocumentFrequency::Absolute(3))
            .fit(&texts)
            .unwrap();
        assert_eq!(absolute.vocabulary(), vectorizer.vocabulary());
    }

    #[test]
    fn test_stopwords() {
        let texts = array![
            "one and two and three",
            "three and four and five",
            "seven and eight",
            "maybe ten and eleven",
            "avoid singletons: one two four five seven eight ten eleven and an and"
        ];
        let stopwords = ["and", "maybe", "an"];
        let vectorizer = word_params().stopwords(&stopwords).fit(&texts).unwrap();
        let vocabulary = vectorizer.vocabulary().terms();
        let true_vocabulary = vec![
            "avoid",
            "eight",
            "eleven",
            "five",
            "four",
            "one",
            "seven",
            "singletons",
            "ten",
            "three",
            "two",
        ];
        assert_eq!(vocabulary, &true_vocabulary[..]);
        // stop words are removed from the counted n-grams as well
        let counts = vectorizer.transform(&["and and an maybe one"]).unwrap();
        assert_eq!(counts.sum(), 1);
    }

    #[test]
    fn test_invalid_params() {
        let texts = array!["oNe two three four", "TWO three four", "three;four", "four"];
        let vectorizer = word_params().n_gram_range(0, 1).fit(&texts);
        assert!(matches!(
            vectorizer,
            Err(VectorizeError::InvalidNGramBoundaries(0, 1))
        ));
        let vectorizer = word_params().n_gram_range(1, 0).fit(&texts);
        assert!(vectorizer.is_err());
        let vectorizer = word_params().n_gram_range(2, 1).fit(&texts);
        assert!(matches!(
            vectorizer,
            Err(VectorizeError::FlippedNGramBoundaries(2, 1))
        ));
        let vectorizer = word_params().min_df(1.1f64).fit(&texts);
        assert!(vectorizer.is_err());
        let vectorizer = word_params().max_df(-0.1f64).fit(&texts);
        assert!(vectorizer.is_err());
        let vectorizer = word_params().min_df(0.5f64).max_df(0.2f64).fit(&texts);
        assert!(vectorizer.is_err());
        let vectorizer = word_params()
            .min_df(DocumentFrequency::Absolute(3))
            .max_df(DocumentFrequency::Absolute(2))
            .fit(&texts);
        assert!(vectorizer.is_err());
        let vectorizer = word_params().max_features(0).fit(&texts);
        assert!(matches!(vectorizer, Err(VectorizeError::InvalidMaxFeatures)));
        let vectorizer = word_params().chunk_size(0).fit(&texts);
        assert!(matches!(vectorizer, Err(VectorizeError::InvalidChunkSize)));
        let vectorizer = word_params()
            .vocabulary(Vocabulary::default())
            .fit(&texts);
        assert!(matches!(
            vectorizer,
            Err(VectorizeError::EmptyFixedVocabulary)
        ));
        let empty: [&str; 0] = [];
        assert!(word_params().fit_vocabulary(&empty).is_err());
        assert!(word_params().fit_vocabulary(&["a", "a"]).is_err());

        let err = word_params().n_gram_range(2, 1).check().unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_sample_corpus_unigrams() {
        let corpus = sample_corpus();
        let (vectorizer, counts) = whitespace_params().fit_transform(&corpus).unwrap();
        assert_eq!(
            vectorizer.vocabulary().terms(),
            &["and", "document", "first", "is", "one", "second", "the", "third", "this"]
        );
        assert_eq!(vectorizer.vocabulary().get("this"), Some(8));
        assert_eq!(
            counts,
            array![
                [0, 1, 1, 1, 0, 0, 1, 0, 1],
                [0, 2, 0, 1, 0, 1, 1, 0, 1],
                [1, 0, 0, 1, 1, 0, 1, 1, 1],
                [0, 1, 1, 1, 0, 0, 1, 0, 1]
            ]
        );
        assert!(vectorizer.pruned_terms().is_empty());
        assert_eq!(vectorizer.transform(&corpus).unwrap(), counts);
    }

    #[test]
    fn test_sample_corpus_bigrams() {
        let corpus = sample_corpus();
        let (vectorizer, counts) = whitespace_params()
            .n_gram_range(2, 2)
            .fit_transform(&corpus)
            .unwrap();
        let vocabulary = vectorizer.vocabulary();
        assert_eq!(vocabulary.len(), 13);
        assert_eq!(vocabulary.get("this is"), Some(11));
        assert_eq!(vocabulary.get("is the"), Some(3));
        assert_eq!(counts.row(0), array![0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_sample_corpus_max_features() {
        let corpus = sample_corpus();
        let vectorizer = whitespace_params()
            .n_gram_range(1, 2)
            .min_df(DocumentFrequency::Absolute(2))
            .max_df(0.8f64)
            .max_features(5)
            .fit(&corpus)
            .unwrap();
        let vocabulary = vectorizer.vocabulary();
        assert_eq!(vocabulary.len(), 5);
        assert_eq!(
            vocabulary.terms(),
            &["document", "first", "first document", "is the", "the first"]
        );
        let pruned = vectorizer.pruned_terms();
        assert!(pruned.contains("this is"));
        assert!(pruned.contains("and"));
        assert!(vocabulary.terms().iter().all(|t| !pruned.contains(t)));
        // every n-gram of the corpus is either kept or pruned
        let unpruned = whitespace_params().n_gram_range(1, 2).fit(&corpus).unwrap();
        assert_eq!(pruned.len() + vocabulary.len(), unpruned.nentries());
    }

    #[test]
    fn test_binary_counts() {
        let corpus = sample_corpus();
        let (vectorizer, counts) = whitespace_params()
            .binary(true)
            .fit_transform(&corpus)
            .unwrap();
        let document = vectorizer.vocabulary().get("document").unwrap();
        assert_eq!(counts[[1, document]], 1);
        assert!(counts.iter().all(|&c| c <= 1));
        let sparse = vectorizer.transform_sparse(&corpus);
        assert_eq!(sparse.to_dense(), counts);
    }

    #[test]
    fn test_fixed_vocabulary_pruning() {
        let corpus = sample_corpus();
        let fixed = Vocabulary::from_mapping(vec![("this", 0), ("second", 1), ("missing", 2)]).unwrap();

        let untouched = whitespace_params()
            .vocabulary(fixed.clone())
            .min_df(DocumentFrequency::Absolute(2))
            .fit(&corpus)
            .unwrap();
        assert_eq!(untouched.vocabulary(), &fixed);
        assert!(untouched.pruned_terms().is_empty());

        let pruned = whitespace_params()
            .vocabulary(fixed)
            .min_df(DocumentFrequency::Absolute(2))
            .prune_fixed_vocabulary(true)
            .fit(&corpus)
            .unwrap();
        assert_eq!(pruned.vocabulary().terms(), &["this"]);
        let removed: Vec<_> = pruned.pruned_terms().iter().cloned().collect();
        assert_eq!(removed, vec!["missing", "second"]);
    }

    #[test]
    fn test_everything_pruned() {
        let corpus = sample_corpus();
        let result = whitespace_params()
            .min_df(DocumentFrequency::Absolute(5))
            .fit(&corpus);
        assert!(matches!(result, Err(VectorizeError::EmptyVocabulary)));

        let result = whitespace_params()
            .min_df(DocumentFrequency::Absolute(3))
            .max_df(0.25f64)
            .fit(&corpus);
        assert!(matches!(
            result,
            Err(VectorizeError::FlippedDocumentFrequencies(_, _))
        ));
    }

    #[test]
    fn test_pruning_without_any_entry() {
        let blank = ["", "   "];
        let result = whitespace_params()
            .min_df(DocumentFrequency::Absolute(1))
            .fit(&blank);
        assert!(matches!(result, Err(VectorizeError::EmptyVocabulary)));

        let only_stopwords = ["the a", "a"];
        let result = whitespace_params()
            .stopwords(&["the", "a"])
            .max_features(3)
            .fit(&only_stopwords);
        assert!(matches!(result, Err(VectorizeError::EmptyVocabulary)));

        // without bounds nothing is pruned, an empty vocabulary is fine
        let vectorizer = whitespace_params().fit(&blank).unwrap();
        assert_eq!(vectorizer.nentries(), 0);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Vec<String> = Vec::new();
        let (vectorizer, counts) = whitespace_params().fit_transform(&corpus).unwrap();
        assert_eq!(vectorizer.nentries(), 0);
        assert_eq!(counts.dim(), (0, 0));
        let counts = vectorizer.transform(&["anything at all"]).unwrap();
        assert_eq!(counts.dim(), (1, 0));
    }

    #[test]
    fn test_out_of_vocabulary_is_ignored() {
        let corpus = sample_corpus();
        let vectorizer = whitespace_params().fit(&corpus).unwrap();
        let counts = vectorizer
            .transform(&vec!["unseen words only".to_string(), "the THE unseen".to_string()])
            .unwrap();
        let the = vectorizer.vocabulary().get("the").unwrap();
        assert_eq!(counts.row(0).sum(), 0);
        assert_eq!(counts.row(1).sum(), 2);
        assert_eq!(counts[[1, the]], 2);
        assert_eq!(
            vectorizer.document_frequencies(&corpus).unwrap()[the],
            4
        );
    }
}
