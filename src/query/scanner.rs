//! One-pass scan from a flat token stream into a [`Chain`] arena.
//!
//! Validates parenthesis matching and operator/word adjacency as it goes,
//! flattens redundant `(word)` groups, and memoizes postings lookups so a
//! repeated word in one query shares a single `Postings::Borrowed` value
//! (this is what lets the evaluator detect `x AND x` by `WordId` equality).

use ahash::AHashMap;

use crate::error::SearchError;
use crate::index::{DocId, Index, OrderedSet, WordId};

use super::{Chain, NodeId, NodeKind, Postings, ScanStatus};

enum Tok<'a> {
    LParen,
    RParen,
    Op(NodeKind),
    Word(&'a str),
}

fn classify(token: &str) -> Tok<'_> {
    match token {
        "(" => Tok::LParen,
        ")" => Tok::RParen,
        "OR" => Tok::Op(NodeKind::Or),
        "AND" => Tok::Op(NodeKind::And),
        "ANDNOT" => Tok::Op(NodeKind::AndNot),
        word => Tok::Word(word),
    }
}

pub(crate) fn scan<'idx>(
    index: &'idx Index,
    tokens: &[String],
) -> Result<(Chain<'idx>, ScanStatus, Vec<WordId>), SearchError> {
    let mut chain = Chain {
        nodes: Vec::with_capacity(tokens.len()),
        leftmost: None,
    };
    let mut cache: AHashMap<&str, Option<(&'idx OrderedSet<DocId>, WordId)>> = AHashMap::new();
    let mut query_words = Vec::new();

    let mut prev: Option<NodeId> = None;
    let mut prev_nonparen: Option<NodeId> = None;
    let mut paren_stack: Vec<NodeId> = Vec::new();
    let mut status = ScanStatus::Skip;

    for (i, token) in tokens.iter().enumerate() {
        match classify(token) {
            Tok::LParen => {
                let id = chain.push(NodeKind::LParen, prev);
                paren_stack.push(id);
                prev = Some(id);
            }
            Tok::RParen => {
                let Some(matching) = paren_stack.pop() else {
                    return Err(err(i, token, "unmatched closing parenthesis"));
                };
                let empty = prev == Some(matching);
                let trailing_operator = prev_nonparen
                    .map(|n| chain.nodes[n].kind.is_operator())
                    .unwrap_or(false);
                if empty || trailing_operator {
                    return Err(err(i, token, "empty parenthesized group"));
                }

                let id = chain.push(NodeKind::RParen, prev);
                chain.nodes[matching].sibling = Some(id);
                chain.nodes[id].sibling = Some(matching);
                prev = Some(id);

                // Flatten `(word)` to just the word: if exactly one node sits
                // between the matching parens, splice both parens out.
                let content = chain.nodes[matching].right.expect("nonempty group");
                if chain.nodes[content].right == Some(id) && chain.nodes[content].kind == NodeKind::Term {
                    let before = chain.nodes[matching].left;
                    let after = chain.nodes[id].right;
                    chain.nodes[content].left = before;
                    chain.nodes[content].right = after;
                    match before {
                        Some(b) => chain.nodes[b].right = Some(content),
                        None => chain.leftmost = Some(content),
                    }
                    if let Some(a) = after {
                        chain.nodes[a].left = Some(content);
                    }
                    prev = Some(content);
                    prev_nonparen = Some(content);
                }
            }
            Tok::Op(kind) => {
                let adjacent_to_open_paren = matches!(prev.map(|p| chain.nodes[p].kind), Some(NodeKind::LParen));
                let needs_left_term = prev_nonparen
                    .map(|n| chain.nodes[n].kind.is_operator())
                    .unwrap_or(true);
                if adjacent_to_open_paren || needs_left_term {
                    return Err(err(i, token, "operator must sit between two terms"));
                }
                let id = chain.push(kind, prev);
                prev = Some(id);
                prev_nonparen = Some(id);
            }
            Tok::Word(word) => {
                if let Some(pn) = prev_nonparen {
                    if chain.nodes[pn].kind == NodeKind::Term {
                        return Err(err(i, token, "two words in a row (expected an operator)"));
                    }
                }
                let resolved = *cache.entry(word).or_insert_with(|| {
                    index.word_id(word).map(|id| (index.word(id).postings(), id))
                });
                if let Some((_, word_id)) = resolved {
                    status = ScanStatus::Ready;
                    if !query_words.contains(&word_id) {
                        query_words.push(word_id);
                    }
                }

                let id = chain.push(NodeKind::Term, prev);
                chain.nodes[id].postings = resolved.map(|(set, word_id)| Postings::Borrowed(set, word_id));
                prev = Some(id);
                prev_nonparen = Some(id);
            }
        }
    }

    if !paren_stack.is_empty() {
        return Err(err(tokens.len(), "", "unmatched opening parenthesis"));
    }
    if let Some(pn) = prev_nonparen {
        if chain.nodes[pn].kind.is_operator() {
            return Err(err(tokens.len(), "", "query ends with a dangling operator"));
        }
    } else {
        return Err(err(tokens.len(), "", "query contains no terms"));
    }

    Ok((chain, status, query_words))
}

fn err(token_index: usize, token: &str, message: &str) -> SearchError {
    SearchError::syntax(message, token_index, token)
}
