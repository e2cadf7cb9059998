//! The inverted index: interned words and documents, postings, term
//! frequencies.

use ahash::AHashMap;

use super::ordered_set::{OrderedSet, Slot};

/// Identifies a document by the order it was added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub u32);

/// Identifies an interned term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub u32);

/// A single interned term: its postings list and per-document counts.
#[derive(Debug)]
pub struct IndexedWord {
    term: String,
    postings: OrderedSet<DocId>,
    term_frequency: AHashMap<DocId, u32>,
}

impl IndexedWord {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn postings(&self) -> &OrderedSet<DocId> {
        &self.postings
    }

    pub fn term_frequency(&self, doc: DocId) -> u32 {
        self.term_frequency.get(&doc).copied().unwrap_or(0)
    }
}

/// A single indexed document: its path and the set of words it contains.
#[derive(Debug)]
pub struct IndexedDocument {
    path: String,
}

impl IndexedDocument {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The full inverted index. Builds with `&mut self`; queries take `&self`
/// and can run concurrently once a document load finishes.
#[derive(Debug, Default)]
pub struct Index {
    words: Vec<IndexedWord>,
    word_ids: AHashMap<String, WordId>,
    docs: Vec<IndexedDocument>,
    document_count: usize,
}

impl Index {
    pub fn new() -> Self {
        Index {
            words: Vec::new(),
            word_ids: AHashMap::new(),
            docs: Vec::new(),
            document_count: 0,
        }
    }

    /// Adds a document under `path` with the given token stream, updating
    /// postings and per-document term frequencies for each token.
    ///
    /// `document_count` is incremented on every call, including documents
    /// that contribute zero tokens.
    pub fn add_document(&mut self, path: String, tokens: Vec<String>) -> DocId {
        let doc_id = DocId(self.docs.len() as u32);
        self.docs.push(IndexedDocument { path });

        for token in tokens {
            let word_id = self.intern(token);
            let word = &mut self.words[word_id.0 as usize];
            match word.postings.try_add(doc_id) {
                Slot::New(_) => {
                    word.term_frequency.insert(doc_id, 1);
                }
                Slot::Existing(_) => {
                    let count = word.term_frequency.entry(doc_id).or_insert(0);
                    *count = count.saturating_add(1);
                }
            }
        }

        self.document_count += 1;
        doc_id
    }

    fn intern(&mut self, term: String) -> WordId {
        if let Some(&id) = self.word_ids.get(&term) {
            return id;
        }
        let id = WordId(self.words.len() as u32);
        self.words.push(IndexedWord {
            term: term.clone(),
            postings: OrderedSet::new(),
            term_frequency: AHashMap::new(),
        });
        self.word_ids.insert(term, id);
        id
    }

    pub fn word_id(&self, term: &str) -> Option<WordId> {
        self.word_ids.get(term).copied()
    }

    pub fn word(&self, id: WordId) -> &IndexedWord {
        &self.words[id.0 as usize]
    }

    pub fn postings_for(&self, term: &str) -> Option<&[DocId]> {
        self.word_id(term).map(|id| self.word(id).postings.as_slice())
    }

    pub fn term_frequency(&self, term: &str, doc: DocId) -> u32 {
        self.word_id(term)
            .and_then(|id| self.word(id).term_frequency.get(&doc).copied())
            .unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn path_of(&self, doc: DocId) -> &str {
        self.docs[doc.0 as usize].path()
    }
}
