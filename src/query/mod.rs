//! Boolean query scanning and evaluation.
//!
//! A query is scanned once into a chain of nodes held in a flat arena
//! (`Chain`), then reduced in place by the evaluator until a single node
//! remains holding the matching postings.

pub mod evaluator;
pub mod preprocess;
pub mod scanner;

use crate::error::SearchError;
use crate::index::{DocId, Index, OrderedSet, WordId};
use crate::scorer::{self, QueryResult};

/// Index of a node inside a [`Chain`]'s arena.
pub(crate) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Term,
    Or,
    And,
    AndNot,
    LParen,
    RParen,
}

impl NodeKind {
    pub(crate) fn is_operator(self) -> bool {
        matches!(self, NodeKind::Or | NodeKind::And | NodeKind::AndNot)
    }
}

/// A set of matching documents attached to a `Term` node, either borrowed
/// straight from the index's postings (for a word that appears verbatim in
/// the query) or owned (the result of a set operation).
///
/// Borrowed postings carry the `WordId` they came from so the evaluator can
/// detect "same underlying set" (e.g. `cat AND cat`) by id equality instead
/// of needing raw pointer identity.
#[derive(Debug, Clone)]
pub(crate) enum Postings<'idx> {
    Borrowed(&'idx OrderedSet<DocId>, WordId),
    Owned(OrderedSet<DocId>),
}

impl<'idx> Postings<'idx> {
    pub(crate) fn as_set(&self) -> &OrderedSet<DocId> {
        match self {
            Postings::Borrowed(set, _) => set,
            Postings::Owned(set) => set,
        }
    }

    fn identity(&self) -> Option<WordId> {
        match self {
            Postings::Borrowed(_, word_id) => Some(*word_id),
            Postings::Owned(_) => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<'idx> {
    pub kind: NodeKind,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// For LPAREN/RPAREN, the index of the matching paren.
    pub sibling: Option<NodeId>,
    pub postings: Option<Postings<'idx>>,
}

impl<'idx> Node<'idx> {
    fn new(kind: NodeKind, left: Option<NodeId>) -> Self {
        Node {
            kind,
            left,
            right: None,
            sibling: None,
            postings: None,
        }
    }
}

/// The flat arena a query is scanned into. `leftmost` is the entry point
/// for evaluation.
#[derive(Debug)]
pub(crate) struct Chain<'idx> {
    pub nodes: Vec<Node<'idx>>,
    pub leftmost: Option<NodeId>,
}

impl<'idx> Chain<'idx> {
    fn push(&mut self, kind: NodeKind, left: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(kind, left));
        if let Some(l) = left {
            self.nodes[l].right = Some(id);
        } else {
            self.leftmost = Some(id);
        }
        id
    }
}

/// Whether a scanned query contains at least one word known to the index.
/// A query made up entirely of unknown words can be reduced to an empty
/// result without ever running the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanStatus {
    Ready,
    Skip,
}

/// Lexes, validates, evaluates and scores a boolean query against `index`.
pub fn run(index: &Index, tokens: &[String]) -> Result<Vec<QueryResult>, SearchError> {
    if tokens.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let (mut chain, status, query_words) = scanner::scan(index, tokens)?;

    if status == ScanStatus::Skip {
        return Ok(Vec::new());
    }

    let Some(leftmost) = chain.leftmost else {
        return Ok(Vec::new());
    };

    let final_node = evaluator::evaluate(&mut chain, leftmost)?;
    match chain.nodes[final_node].postings.take() {
        None => Ok(Vec::new()),
        Some(postings) => Ok(scorer::score(index, postings.as_set(), &query_words)),
    }
}
