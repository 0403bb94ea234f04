//! Corpus abstraction
//!
//! A corpus is an ordered collection of documents. The position of a document in the corpus is
//! its document index, which determines the row it occupies in every matrix produced from the
//! corpus. Corpora are shared read-only between worker threads, hence the `Sync` bound.

use ndarray::{ArrayBase, Axis, Data, Ix1};

/// Ordered, indexable collection of documents
pub trait Documents: Sync {
    /// Number of documents in the corpus
    fn ndocuments(&self) -> usize;

    /// Text of the document at position `idx`
    ///
    /// Panics if `idx` is not smaller than `ndocuments()`
    fn document(&self, idx: usize) -> &str;

    fn is_empty(&self) -> bool {
        self.ndocuments() == 0
    }
}

impl<S: AsRef<str> + Sync> Documents for [S] {
    fn ndocuments(&self) -> usize {
        self.len()
    }

    fn document(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl<S: AsRef<str> + Sync, const N: usize> Documents for [S; N] {
    fn ndocuments(&self) -> usize {
        N
    }

    fn document(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl<S: AsRef<str> + Sync> Documents for Vec<S> {
    fn ndocuments(&self) -> usize {
        self.len()
    }

    fn document(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

impl<D> Documents for ArrayBase<D, Ix1>
where
    D: Data + Sync,
    D::Elem: AsRef<str> + Sync,
{
    fn ndocuments(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn document(&self, idx: usize) -> &str {
        self[idx].as_ref()
    }
}

/// Implement documents for references
impl<C: Documents + ?Sized> Documents for &C {
    fn ndocuments(&self) -> usize {
        (**self).ndocuments()
    }

    fn document(&self, idx: usize) -> &str {
        (**self).document(idx)
    }
}
