//! Crate-wide error type for query parsing and evaluation failures.

use thiserror::Error;

/// Everything that can go wrong running a boolean query against an
/// [`crate::Index`]. A query that parses and evaluates cleanly but matches
/// no documents is not an error: it's an empty result list.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    #[error("query has no tokens")]
    EmptyQuery,

    #[error("syntax error around token {token_index} ({token:?}): {message}")]
    Syntax {
        message: String,
        token_index: usize,
        token: String,
    },
}

impl SearchError {
    pub(crate) fn syntax(message: impl Into<String>, token_index: usize, token: impl Into<String>) -> Self {
        SearchError::Syntax {
            message: message.into(),
            token_index,
            token: token.into(),
        }
    }
}
