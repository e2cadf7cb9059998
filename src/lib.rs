//! # search-index
//!
//! An in-memory boolean full-text search engine: an inverted index, a
//! scanner/evaluator for a small boolean query language (`AND` / `OR` /
//! `ANDNOT` / parentheses), and a TF-IDF scorer.
//!
//! The library is split into the two tightly-coupled subsystems where the
//! engineering lives — [`index`] (the inverted index and its ordered-set
//! primitive) and [`query`] (the scanner, evaluator and preprocessor) —
//! plus a [`scorer`] that ranks a query's matches. Directory walking,
//! configuration and the CLI are thin collaborators layered on top, kept
//! out of the core's tested invariants.
//!
//! ## Example
//!
//! ```
//! use search_index::Index;
//!
//! let mut index = Index::new();
//! index.add_document("/a.txt".to_string(), vec!["cat".to_string(), "dog".to_string()]);
//! index.add_document("/b.txt".to_string(), vec!["cat".to_string(), "fish".to_string()]);
//!
//! let results = index.query(&["cat".to_string(), "AND".to_string(), "dog".to_string()]).unwrap();
//! assert_eq!(results[0].path, "/a.txt");
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod scorer;
pub mod walk;

pub use error::SearchError;
pub use index::{DocId, Index as IndexStore, OrderedSet, WordId};
pub use scorer::QueryResult;

use std::path::Path;

/// A boolean full-text index over a static set of documents.
///
/// Wraps [`index::Index`] with a [`query`] entry point, so callers build
/// with [`Index::add_document`] and search with [`Index::query`] without
/// reaching into the submodules directly.
#[derive(Debug, Default)]
pub struct Index {
    store: index::Index,
}

impl Index {
    pub fn new() -> Self {
        Index { store: index::Index::new() }
    }

    /// Indexes every regular file under `root`, tokenizing it with the
    /// bundled [`walk`] collaborator. Convenience wrapper for the CLI and
    /// for quick experimentation; the core [`Index::add_document`] API
    /// works without touching the filesystem.
    pub fn from_directory(root: &Path) -> Self {
        let mut index = Self::new();
        for (path, tokens) in walk::collect_documents(root) {
            index.add_document(path, tokens);
        }
        index
    }

    pub fn add_document(&mut self, path: String, tokens: Vec<String>) -> DocId {
        self.store.add_document(path, tokens)
    }

    pub fn postings_for(&self, term: &str) -> Option<&[DocId]> {
        self.store.postings_for(term)
    }

    pub fn term_frequency(&self, term: &str, doc: DocId) -> u32 {
        self.store.term_frequency(term, doc)
    }

    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    /// Runs a boolean query over already-tokenized `tokens` (see
    /// [`query::preprocess::preprocess`] to build these from a raw query
    /// string) and returns matches ranked by descending TF-IDF score.
    pub fn query(&self, tokens: &[String]) -> Result<Vec<QueryResult>, SearchError> {
        query::run(&self.store, tokens)
    }
}
