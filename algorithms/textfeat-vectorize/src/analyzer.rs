//! Document analysis: from a raw document to the sequence of vocabulary candidates it contains
//!
//! Preprocessing and tokenization are capabilities supplied by the caller, either as one of the
//! implementations provided here or as plain closures:
//!
//! ```rust
//! use textfeat_vectorize::{Preprocessor, Tokenizer};
//!
//! let lowercase = |doc: &str| doc.to_lowercase();
//! let split = |doc: &str| doc.split_whitespace().map(String::from).collect::<Vec<_>>();
//! assert_eq!(lowercase.normalize("To Be"), "to be");
//! assert_eq!(split.tokenize("to be"), vec!["to", "be"]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::helpers::NGramList;

/// Turns a raw document into a normalized one
pub trait Preprocessor: Send + Sync {
    fn normalize(&self, document: &str) -> String;
}

/// Splits a normalized document into its ordered sequence of tokens
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, document: &str) -> Vec<String>;
}

impl<F: Fn(&str) -> String + Send + Sync> Preprocessor for F {
    fn normalize(&self, document: &str) -> String {
        self(document)
    }
}

impl<F: Fn(&str) -> Vec<String> + Send + Sync> Tokenizer for F {
    fn tokenize(&self, document: &str) -> Vec<String> {
        self(document)
    }
}

/// Unicode NFKD normalization followed by lowercasing, each step can be switched off
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    convert_to_lowercase: bool,
    normalize: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            convert_to_lowercase: true,
            normalize: true,
        }
    }
}

impl TextNormalizer {
    /// A normalizer which leaves documents untouched
    pub fn identity() -> Self {
        Self {
            convert_to_lowercase: false,
            normalize: false,
        }
    }

    /// If true, all documents will be converted to lowercase.
    pub fn convert_to_lowercase(mut self, convert_to_lowercase: bool) -> Self {
        self.convert_to_lowercase = convert_to_lowercase;
        self
    }

    /// If true, all characters will be normalized according to unicode's NFKD normalization.
    pub fn nfkd(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl Preprocessor for TextNormalizer {
    fn normalize(&self, document: &str) -> String {
        let mut string = if self.normalize {
            document.nfkd().collect()
        } else {
            document.to_string()
        };
        if self.convert_to_lowercase {
            string = string.to_lowercase();
        }
        string
    }
}

/// Tokens are the non-overlapping matches of a regular expression
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Selects "words" of at least two characters, using whitespaces and punctuation symbols as
    /// separators
    pub const DEFAULT_PATTERN: &'static str = r"\b\w\w+\b";

    /// Fails if `pattern` is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self {
            regex: Regex::new(Self::DEFAULT_PATTERN).expect("default token pattern is valid"),
        }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, document: &str) -> Vec<String> {
        self.regex
            .find_iter(document)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

/// Tokens are separated by unicode whitespace
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, document: &str) -> Vec<String> {
        document.split_whitespace().map(String::from).collect()
    }
}

/// The per-document pipeline shared by vocabulary building and count encoding:
/// preprocessing, tokenization, n-gram expansion and stop word removal.
#[derive(Clone)]
pub struct Analyzer {
    preprocessor: Arc<dyn Preprocessor>,
    tokenizer: Arc<dyn Tokenizer>,
    n_gram_range: (usize, usize),
    stopwords: HashSet<String>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("n_gram_range", &self.n_gram_range)
            .field("stopwords", &self.stopwords)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn new<P, T>(preprocessor: P, tokenizer: T) -> Self
    where
        P: Preprocessor + 'static,
        T: Tokenizer + 'static,
    {
        Self {
            preprocessor: Arc::new(preprocessor),
            tokenizer: Arc::new(tokenizer),
            n_gram_range: (1, 1),
            stopwords: HashSet::new(),
        }
    }

    pub fn n_gram_range(&self) -> (usize, usize) {
        self.n_gram_range
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub(crate) fn set_n_gram_range(&mut self, min_n: usize, max_n: usize) {
        self.n_gram_range = (min_n, max_n);
    }

    pub(crate) fn set_stopwords(&mut self, stopwords: HashSet<String>) {
        self.stopwords = stopwords;
    }

    /// Ordered sequence of n-grams found in `document`, stop words excluded
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let normalized = self.preprocessor.normalize(document);
        let tokens = self.tokenizer.tokenize(&normalized);
        NGramList::new(tokens, self.n_gram_range)
            .into_iter()
            .filter(|item| !self.stopwords.contains(item))
            .collect()
    }
}
