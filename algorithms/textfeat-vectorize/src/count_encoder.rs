//! Term frequency counting
//!
//! Every document is analyzed on its own against a read-only vocabulary, so documents are
//! processed in parallel, `chunk_size` documents per work unit. Each document produces the list
//! of `(vocabulary index, count)` pairs it contains; the lists are collected in document order and
//! only then scattered into the output matrix at row `document index`. The result is the same for
//! any chunk size and any scheduling of the work units, and nothing is returned unless every
//! document has been processed.

use std::collections::HashMap;

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use rayon::prelude::*;
use sprs::{CsMat, TriMat};
use textfeat::Documents;

use crate::analyzer::Analyzer;
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// Non-zero counts of a single document, sorted by vocabulary index
type DocumentCounts = Vec<(usize, usize)>;

pub struct CountEncoder<'a> {
    analyzer: &'a Analyzer,
    vocabulary: &'a Vocabulary,
    chunk_size: usize,
    binary: bool,
}

impl<'a> CountEncoder<'a> {
    pub fn new(analyzer: &'a Analyzer, vocabulary: &'a Vocabulary) -> Self {
        Self {
            analyzer,
            vocabulary,
            chunk_size: 1,
            binary: false,
        }
    }

    /// Number of documents handled by a single parallel work unit
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// If true, every positive count is clamped to one
    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Produces the `(ndocuments, nentries)` term frequency matrix of `corpus` together with the
    /// document frequency of every vocabulary entry. N-grams missing from the vocabulary are
    /// ignored.
    pub fn encode<C: Documents + ?Sized>(&self, corpus: &C) -> Result<(Array2<usize>, Array1<usize>)> {
        let rows = self.count_documents(corpus);
        let (ndocuments, nentries) = (rows.len(), self.vocabulary.len());

        let mut flat = vec![0usize; ndocuments * nentries];
        for (doc_idx, row) in rows.into_iter().enumerate() {
            for (entry_idx, count) in row {
                flat[doc_idx * nentries + entry_idx] = count;
            }
        }
        let mut counts = Array2::from_shape_vec((ndocuments, nentries), flat)
            .map_err(textfeat::Error::from)?;

        if self.binary {
            counts.mapv_inplace(|count| count.min(1));
        }
        let doc_freqs = document_frequencies(&counts);
        Ok((counts, doc_freqs))
    }

    /// Same counts as [`encode`](CountEncoder::encode), in a compressed sparse row matrix
    pub fn encode_sparse<C: Documents + ?Sized>(&self, corpus: &C) -> CsMat<usize> {
        let rows = self.count_documents(corpus);
        let nnz = rows.iter().map(|row| row.len()).sum();
        let mut triplets = TriMat::with_capacity((rows.len(), self.vocabulary.len()), nnz);
        for (doc_idx, row) in rows.into_iter().enumerate() {
            for (entry_idx, count) in row {
                let count = if self.binary { count.min(1) } else { count };
                triplets.add_triplet(doc_idx, entry_idx, count);
            }
        }
        triplets.to_csr()
    }

    fn count_documents<C: Documents + ?Sized>(&self, corpus: &C) -> Vec<DocumentCounts> {
        tracing::debug!(
            ndocuments = corpus.ndocuments(),
            nentries = self.vocabulary.len(),
            chunk_size = self.chunk_size,
            "counting vocabulary entries"
        );
        (0..corpus.ndocuments())
            .into_par_iter()
            .with_min_len(self.chunk_size)
            .map(|doc_idx| self.count_document(corpus.document(doc_idx)))
            .collect()
    }

    fn count_document(&self, document: &str) -> DocumentCounts {
        let mut term_frequencies: HashMap<usize, usize> = HashMap::new();
        for item in self.analyzer.analyze(document) {
            if let Some(entry_idx) = self.vocabulary.get(&item) {
                *term_frequencies.entry(entry_idx).or_insert(0) += 1;
            }
        }
        let mut counts: DocumentCounts = term_frequencies.into_iter().collect();
        counts.sort_unstable();
        counts
    }
}

/// Number of rows with a positive count, for every column of `counts`
pub fn document_frequencies<D: Data<Elem = usize>>(counts: &ArrayBase<D, Ix2>) -> Array1<usize> {
    counts.map_axis(Axis(0), |column| {
        column.iter().filter(|&&count| count > 0).count()
    })
}
