//! Property-based tests for the inverted index and its ordered-set
//! primitive.
//!
//! These generate random corpora, queries and integer sets with proptest
//! and check that the invariants spec.md promises — postings/TF agreement,
//! document-count accounting, query purity, and the set-algebra identities
//! — hold across a wide range of inputs, not just the handful of fixed
//! scenarios in the unit tests.

use proptest::prelude::*;
use proptest::test_runner::Config;

use search_index::{Index, OrderedSet};

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..8)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(document_strategy(), 0..12)
}

fn int_set_strategy() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(any::<i32>(), 0..30)
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    /// Property: `document_count` always equals the number of
    /// `add_document` calls, regardless of how many tokens each call
    /// carries (including zero).
    #[test]
    fn document_count_equals_documents_added(docs in corpus_strategy()) {
        let mut index = Index::new();
        for (i, tokens) in docs.iter().enumerate() {
            index.add_document(format!("/doc{i}.txt"), tokens.clone());
        }
        prop_assert_eq!(index.document_count(), docs.len());
    }

    /// Property: every token passed to `add_document` is findable
    /// afterward — the document appears in the word's postings, and its
    /// term frequency there is at least one.
    #[test]
    fn every_token_is_findable_in_its_own_document(docs in corpus_strategy()) {
        let mut index = Index::new();
        let mut doc_ids = Vec::new();
        for (i, tokens) in docs.iter().enumerate() {
            doc_ids.push(index.add_document(format!("/doc{i}.txt"), tokens.clone()));
        }
        for (tokens, doc_id) in docs.iter().zip(doc_ids) {
            for word in tokens {
                let postings = index.postings_for(word).expect("word was just added to the index");
                prop_assert!(postings.contains(&doc_id));
                prop_assert!(index.term_frequency(word, doc_id) >= 1);
            }
        }
    }

    /// Property: running the same query twice against the same index
    /// returns identical results and never mutates the index.
    #[test]
    fn query_is_pure_and_repeatable(docs in corpus_strategy(), words in proptest::collection::vec(word_strategy(), 1..4)) {
        let mut index = Index::new();
        for (i, tokens) in docs.iter().enumerate() {
            index.add_document(format!("/doc{i}.txt"), tokens.clone());
        }
        let before = index.document_count();

        // Join the arbitrary words with OR so any word count is a
        // syntactically valid query, regardless of whether the words
        // happen to be in the index.
        let mut query_tokens = Vec::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                query_tokens.push("OR".to_string());
            }
            query_tokens.push(word.clone());
        }

        let first = index.query(&query_tokens);
        let second = index.query(&query_tokens);
        prop_assert_eq!(index.document_count(), before);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
    }

    /// Property: `union` is commutative.
    #[test]
    fn ordered_set_union_is_commutative(a in int_set_strategy(), b in int_set_strategy()) {
        let set_a: OrderedSet<i32> = a.into_iter().collect();
        let set_b: OrderedSet<i32> = b.into_iter().collect();
        prop_assert_eq!(OrderedSet::union(&set_a, &set_b), OrderedSet::union(&set_b, &set_a));
    }

    /// Property: `intersection` is commutative.
    #[test]
    fn ordered_set_intersection_is_commutative(a in int_set_strategy(), b in int_set_strategy()) {
        let set_a: OrderedSet<i32> = a.into_iter().collect();
        let set_b: OrderedSet<i32> = b.into_iter().collect();
        prop_assert_eq!(OrderedSet::intersection(&set_a, &set_b), OrderedSet::intersection(&set_b, &set_a));
    }

    /// Property: `difference(a, a)` is always empty.
    #[test]
    fn ordered_set_difference_with_self_is_empty(a in int_set_strategy()) {
        let set_a: OrderedSet<i32> = a.into_iter().collect();
        prop_assert!(OrderedSet::difference(&set_a, &set_a).is_empty());
    }

    /// Property: `union`/`intersection` with the empty set behave as
    /// identity/annihilator respectively.
    #[test]
    fn ordered_set_empty_set_identities(a in int_set_strategy()) {
        let set_a: OrderedSet<i32> = a.into_iter().collect();
        let empty: OrderedSet<i32> = OrderedSet::new();
        prop_assert_eq!(OrderedSet::union(&set_a, &empty), set_a.clone());
        prop_assert!(OrderedSet::intersection(&set_a, &empty).is_empty());
        prop_assert_eq!(OrderedSet::difference(&set_a, &empty), set_a);
    }
}
