//! Vocabularies: the mapping from vocabulary entries to matrix columns

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use textfeat::Documents;

use crate::analyzer::Analyzer;
use crate::error::{Result, VectorizeError};

/// Maps each vocabulary entry (a token or a space-joined n-gram) to a column index.
///
/// Indices are always exactly `0..len()`: entry `i` of [`terms`](Vocabulary::terms) has index `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Enumerates `terms` in the given order, the first entry gets index zero.
    ///
    /// Returns an error if an entry appears more than once.
    pub fn from_terms<T: ToString, I: IntoIterator<Item = T>>(terms: I) -> Result<Self> {
        let mut vocabulary = Vocabulary::default();
        for term in terms.into_iter().map(|t| t.to_string()) {
            if vocabulary.index.contains_key(&term) {
                return Err(VectorizeError::DuplicateVocabularyEntry(term));
            }
            vocabulary.push(term);
        }
        Ok(vocabulary)
    }

    /// Builds a vocabulary from explicit `(entry, index)` pairs.
    ///
    /// The indices must be a permutation of `0..n`, where `n` is the number of pairs.
    pub fn from_mapping<T: ToString, I: IntoIterator<Item = (T, usize)>>(mapping: I) -> Result<Self> {
        let pairs: Vec<(String, usize)> = mapping
            .into_iter()
            .map(|(term, idx)| (term.to_string(), idx))
            .collect();
        let len = pairs.len();
        let mut slots: Vec<Option<String>> = vec![None; len];
        let mut index = HashMap::with_capacity(len);
        for (term, idx) in pairs {
            if idx >= len {
                return Err(VectorizeError::NonContiguousVocabulary { index: idx, len });
            }
            if slots[idx].is_some() {
                return Err(VectorizeError::DuplicateVocabularyIndex(idx));
            }
            if index.insert(term.clone(), idx).is_some() {
                return Err(VectorizeError::DuplicateVocabularyEntry(term));
            }
            slots[idx] = Some(term);
        }
        // every slot is filled: `len` distinct indices below `len`
        let terms = slots.into_iter().flatten().collect();
        Ok(Self { terms, index })
    }

    /// Entries are already sorted lexicographically, indices follow that order
    pub(crate) fn from_sorted(terms: BTreeSet<String>) -> Self {
        let mut vocabulary = Vocabulary::default();
        for term in terms {
            vocabulary.push(term);
        }
        vocabulary
    }

    fn push(&mut self, term: String) {
        self.index.insert(term.clone(), self.terms.len());
        self.terms.push(term);
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of `term`, if present
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Entry mapped to column `idx`, if any
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(|t| t.as_str())
    }

    /// All entries, ordered by index
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterates over `(entry, index)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.terms.iter().enumerate().map(|(i, t)| (t.as_str(), i))
    }

    /// Keeps the entries whose `mask` value is true and recompacts their indices, preserving
    /// relative order. Returns the new vocabulary and the removed entries.
    pub(crate) fn retain_mask(&self, mask: &[bool]) -> (Vocabulary, BTreeSet<String>) {
        let mut kept = Vocabulary::default();
        let mut pruned = BTreeSet::new();
        for (term, &keep) in self.terms.iter().zip(mask.iter()) {
            if keep {
                kept.push(term.clone());
            } else {
                pruned.insert(term.clone());
            }
        }
        (kept, pruned)
    }
}

/// Where the vocabulary of a vectorizer comes from
#[derive(Clone, Debug, PartialEq)]
pub enum VocabularySource {
    /// Discovered from the fitting corpus and sorted lexicographically
    Learned,
    /// Supplied by the caller, used as-is
    Fixed(Vocabulary),
}

impl Default for VocabularySource {
    fn default() -> Self {
        VocabularySource::Learned
    }
}

/// Produces the vocabulary used for fitting
pub struct VocabularyBuilder<'a> {
    analyzer: &'a Analyzer,
    chunk_size: usize,
}

impl<'a> VocabularyBuilder<'a> {
    pub fn new(analyzer: &'a Analyzer, chunk_size: usize) -> Self {
        Self {
            analyzer,
            chunk_size,
        }
    }

    /// With a fixed source the given vocabulary is returned unchanged and the corpus is not
    /// read. Otherwise every distinct n-gram of the corpus becomes an entry, indexed in
    /// lexicographic order.
    pub fn build<C: Documents + ?Sized>(&self, corpus: &C, source: &VocabularySource) -> Vocabulary {
        match source {
            VocabularySource::Fixed(vocabulary) => vocabulary.clone(),
            VocabularySource::Learned => {
                let terms = (0..corpus.ndocuments())
                    .into_par_iter()
                    .with_min_len(self.chunk_size)
                    .map(|idx| {
                        self.analyzer
                            .analyze(corpus.document(idx))
                            .into_iter()
                            .collect::<BTreeSet<String>>()
                    })
                    .reduce(BTreeSet::new, |mut acc, mut terms| {
                        acc.append(&mut terms);
                        acc
                    });
                Vocabulary::from_sorted(terms)
            }
        }
    }
}
