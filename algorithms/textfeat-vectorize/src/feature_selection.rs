//! Vocabulary pruning by document frequency and overall term frequency

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use ndarray::{Array1, Array2, Axis};

use crate::error::{Result, VectorizeError};
use crate::vocabulary::Vocabulary;

/// Absorbs floating point noise when converting relative frequencies to document counts
const TOLERANCE: f64 = 1e-9;

/// A document frequency bound, either as a number of documents or as a fraction of the corpus
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DocumentFrequency {
    Absolute(usize),
    Relative(f64),
}

impl From<usize> for DocumentFrequency {
    fn from(count: usize) -> Self {
        DocumentFrequency::Absolute(count)
    }
}

impl From<f64> for DocumentFrequency {
    fn from(fraction: f64) -> Self {
        DocumentFrequency::Relative(fraction)
    }
}

impl fmt::Display for DocumentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFrequency::Absolute(count) => write!(f, "{} documents", count),
            DocumentFrequency::Relative(fraction) => write!(f, "{} of the documents", fraction),
        }
    }
}

impl DocumentFrequency {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            DocumentFrequency::Relative(fraction)
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) =>
            {
                Err(VectorizeError::InvalidDocumentFrequency(fraction))
            }
            _ => Ok(()),
        }
    }

    /// Smallest document count satisfying `df >= self` in a corpus of `n_documents`
    pub fn lower_bound(&self, n_documents: usize) -> usize {
        match *self {
            DocumentFrequency::Absolute(count) => count,
            DocumentFrequency::Relative(fraction) => {
                (fraction * n_documents as f64 - TOLERANCE).ceil().max(0.) as usize
            }
        }
    }

    /// Largest document count satisfying `df <= self` in a corpus of `n_documents`
    pub fn upper_bound(&self, n_documents: usize) -> usize {
        match *self {
            DocumentFrequency::Absolute(count) => count,
            DocumentFrequency::Relative(fraction) => {
                (fraction * n_documents as f64 + TOLERANCE).floor() as usize
            }
        }
    }
}

/// Outcome of a pruning pass
#[derive(Debug, Clone)]
pub struct Selection {
    /// Columns of the surviving entries, in their original relative order
    pub counts: Array2<usize>,
    /// Surviving entries, indices recompacted
    pub vocabulary: Vocabulary,
    /// Entries removed by this pass
    pub pruned_terms: BTreeSet<String>,
}

/// Prunes a vocabulary, and the matching count matrix, keeping the entries whose document
/// frequency lies within `[min_df, max_df]`. If more than `max_features` entries survive only
/// the ones with the highest total count are kept, ties broken by vocabulary index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureSelector {
    min_df: Option<DocumentFrequency>,
    max_df: Option<DocumentFrequency>,
    max_features: Option<usize>,
}

impl FeatureSelector {
    pub fn new(
        min_df: Option<DocumentFrequency>,
        max_df: Option<DocumentFrequency>,
        max_features: Option<usize>,
    ) -> Self {
        Self {
            min_df,
            max_df,
            max_features,
        }
    }

    /// True if no bound is set, selection would keep every entry
    pub fn is_noop(&self) -> bool {
        self.min_df.is_none() && self.max_df.is_none() && self.max_features.is_none()
    }

    /// Resolves both bounds to document counts
    ///
    /// Returns an error if the lower bound exceeds the upper one
    pub fn resolve_bounds(&self, n_documents: usize) -> Result<(Option<usize>, Option<usize>)> {
        let min = self.min_df.map(|df| df.lower_bound(n_documents));
        let max = self.max_df.map(|df| df.upper_bound(n_documents));
        if let (Some(min_count), Some(max_count), Some(min_df), Some(max_df)) =
            (min, max, self.min_df, self.max_df)
        {
            if min_count > max_count {
                return Err(VectorizeError::FlippedDocumentFrequencies(min_df, max_df));
            }
        }
        Ok((min, max))
    }

    /// Applies the selection to the `(ndocuments, nentries)` matrix `counts`, whose columns
    /// follow `vocabulary` and have document frequencies `doc_freqs`.
    ///
    /// Returns `EmptyVocabulary` if no entry survives, including when `vocabulary` is already empty.
    pub fn select(
        &self,
        vocabulary: &Vocabulary,
        counts: &Array2<usize>,
        doc_freqs: &Array1<usize>,
    ) -> Result<Selection> {
        let (min_count, max_count) = self.resolve_bounds(counts.nrows())?;
        let mut mask: Vec<bool> = doc_freqs
            .iter()
            .map(|&df| {
                max_count.map_or(true, |max| df <= max) && min_count.map_or(true, |min| df >= min)
            })
            .collect();

        if let Some(max_features) = self.max_features {
            let nkept = mask.iter().filter(|&&keep| keep).count();
            if nkept > max_features {
                let totals = counts.sum_axis(Axis(0));
                let limited: Vec<usize> = mask
                    .iter()
                    .enumerate()
                    .filter(|(_, &keep)| keep)
                    .map(|(idx, _)| idx)
                    .sorted_by_key(|&idx| (Reverse(totals[idx]), idx))
                    .take(max_features)
                    .collect();
                mask.iter_mut().for_each(|keep| *keep = false);
                for idx in limited {
                    mask[idx] = true;
                }
            }
        }

        let (new_vocabulary, pruned_terms) = vocabulary.retain_mask(&mask);
        if new_vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        tracing::debug!(
            kept = new_vocabulary.len(),
            pruned = pruned_terms.len(),
            "pruned vocabulary"
        );
        tracing::trace!(?pruned_terms, "pruned entries");

        let kept_columns: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, &keep)| keep)
            .map(|(idx, _)| idx)
            .collect();
        let counts = if kept_columns.len() == counts.ncols() {
            counts.clone()
        } else {
            counts.select(Axis(1), &kept_columns)
        };
        Ok(Selection {
            counts,
            vocabulary: new_vocabulary,
            pruned_terms,
        })
    }
}
