//! TF-IDF scoring of a query's matching document set.

use std::cmp::Ordering;

use crate::index::{DocId, Index, OrderedSet, WordId};

/// A single scored match: the document's path and its TF-IDF score.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub path: String,
    pub score: f64,
}

/// Scores every document in `matches` against `query_words` using
/// `score(d) = sum_q tf(q, d) * ln(N / |postings(q)|)`, where a term
/// present in every document contributes zero (its IDF is zero). Results
/// are sorted by descending score, ties broken by path ascending.
pub(crate) fn score(index: &Index, matches: &OrderedSet<DocId>, query_words: &[WordId]) -> Vec<QueryResult> {
    let total_docs = index.document_count() as f64;

    let mut results: Vec<QueryResult> = matches
        .iter()
        .map(|&doc| {
            let score = query_words
                .iter()
                .map(|&word_id| {
                    let word = index.word(word_id);
                    let tf = word.term_frequency(doc);
                    if tf == 0 {
                        return 0.0;
                    }
                    let idf = (total_docs / word.postings().len() as f64).ln();
                    tf as f64 * idf
                })
                .sum();
            QueryResult {
                path: index.path_of(doc).to_string(),
                score,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.path.cmp(&b.path))
    });
    results
}
