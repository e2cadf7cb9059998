//! Reduces a scanned [`Chain`] down to a single node holding the matching
//! postings, without recursing through long flat operator chains or deep
//! pure-parenthesis nesting.
//!
//! The walk repeatedly: skips forward through `LPAREN`/`TERM` nodes that
//! still have a right neighbor, then dispatches on whatever it lands on
//! (an operator or a closing paren), mutating the node in place so the
//! chain shrinks as it evaluates. Recursion is only needed when an
//! operator's right-hand side is itself an unresolved parenthesized
//! subquery.

use crate::error::SearchError;
use crate::index::OrderedSet;

use super::{Chain, Node, NodeId, NodeKind, Postings};

/// Advances `n` forward while it is a `TERM` or `LPAREN` with a right
/// neighbor; stops at the first operator, `RPAREN`, or dead end.
fn skip_forward(nodes: &[Node<'_>], mut n: NodeId) -> NodeId {
    loop {
        match nodes[n].kind {
            NodeKind::Term | NodeKind::LParen => match nodes[n].right {
                Some(r) => n = r,
                None => break,
            },
            _ => break,
        }
    }
    n
}

pub(crate) fn evaluate<'idx>(chain: &mut Chain<'idx>, start: NodeId) -> Result<NodeId, SearchError> {
    let mut n = start;
    loop {
        n = skip_forward(&chain.nodes, n);
        match chain.nodes[n].kind {
            NodeKind::Term => match chain.nodes[n].left {
                Some(l) => n = l,
                None => return Ok(n),
            },
            NodeKind::RParen => {
                n = splice_parens(chain, n);
            }
            NodeKind::Or | NodeKind::And | NodeKind::AndNot => {
                let right = chain.nodes[n].right.expect("scanner guarantees an operand to the right");
                n = if chain.nodes[right].kind != NodeKind::Term {
                    evaluate(chain, right)?
                } else {
                    reduce_operator(chain, n, right)
                };
            }
            NodeKind::LParen => unreachable!("skip_forward never stops on an LPAREN with content"),
        }
    }
}

/// Splices the matching `LPAREN`/`RPAREN` pair around `rparen` out of the
/// chain, leaving their single reduced content node in their place.
fn splice_parens(chain: &mut Chain<'_>, rparen: NodeId) -> NodeId {
    let lparen = chain.nodes[rparen].sibling.expect("rparen always has a matching lparen");
    let content = chain.nodes[lparen].right.expect("group reduced to one node before its rparen is reached");
    let before = chain.nodes[lparen].left;
    let after = chain.nodes[rparen].right;

    chain.nodes[content].left = before;
    chain.nodes[content].right = after;
    match before {
        Some(b) => chain.nodes[b].right = Some(content),
        None => chain.leftmost = Some(content),
    }
    if let Some(a) = after {
        chain.nodes[a].left = Some(content);
    }
    content
}

/// Applies the set operation at `op_node` to its (already-`TERM`) left and
/// right operands, retypes `op_node` in place as the `TERM` owning the
/// result, and splices the two operand nodes out of the chain.
fn reduce_operator(chain: &mut Chain<'_>, op_node: NodeId, right: NodeId) -> NodeId {
    let left = chain.nodes[op_node].left.expect("scanner guarantees an operand to the left");
    let op = chain.nodes[op_node].kind;

    let left_postings = chain.nodes[left].postings.take();
    let right_postings = chain.nodes[right].postings.take();
    let result = apply(op, left_postings, right_postings);

    let before = chain.nodes[left].left;
    let after = chain.nodes[right].right;

    chain.nodes[op_node].kind = NodeKind::Term;
    chain.nodes[op_node].postings = result;
    chain.nodes[op_node].left = before;
    chain.nodes[op_node].right = after;
    match before {
        Some(b) => chain.nodes[b].right = Some(op_node),
        None => chain.leftmost = Some(op_node),
    }
    if let Some(a) = after {
        chain.nodes[a].left = Some(op_node);
    }
    op_node
}

fn apply<'idx>(
    op: NodeKind,
    left: Option<Postings<'idx>>,
    right: Option<Postings<'idx>>,
) -> Option<Postings<'idx>> {
    let same_set = matches!((&left, &right), (Some(a), Some(b)) if postings_identity(a) == postings_identity(b) && postings_identity(a).is_some());

    match op {
        NodeKind::Or => match (left, right) {
            (None, None) => None,
            (None, Some(r)) => Some(r),
            (Some(l), None) => Some(l),
            (Some(l), Some(r)) => {
                if same_set {
                    Some(l)
                } else {
                    non_empty(OrderedSet::union(l.as_set(), r.as_set()))
                }
            }
        },
        NodeKind::And => match (left, right) {
            (Some(l), Some(r)) => {
                if same_set {
                    Some(l)
                } else {
                    non_empty(OrderedSet::intersection(l.as_set(), r.as_set()))
                }
            }
            _ => None,
        },
        NodeKind::AndNot => match (left, right) {
            (None, _) => None,
            (Some(l), None) => Some(l),
            (Some(l), Some(r)) => {
                if same_set {
                    None
                } else {
                    non_empty(OrderedSet::difference(l.as_set(), r.as_set()))
                }
            }
        },
        NodeKind::Term | NodeKind::LParen | NodeKind::RParen => {
            unreachable!("apply is only ever called with an operator kind")
        }
    }
}

fn postings_identity(postings: &Postings<'_>) -> Option<crate::index::WordId> {
    match postings {
        Postings::Borrowed(_, word_id) => Some(*word_id),
        Postings::Owned(_) => None,
    }
}

fn non_empty(set: OrderedSet<crate::index::DocId>) -> Option<Postings<'static>> {
    if set.is_empty() {
        None
    } else {
        Some(Postings::Owned(set))
    }
}
