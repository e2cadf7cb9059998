//! The inverted index and its supporting ordered-set primitive.

pub mod ordered_set;
pub mod store;

pub use ordered_set::OrderedSet;
pub use store::{DocId, Index, IndexedDocument, IndexedWord, WordId};
